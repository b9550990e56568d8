//! COLLADA 1.4.1 constants and the skeleton every new document starts from.

/// Default namespace of COLLADA 1.4.x documents.
pub const COLLADA_NAMESPACE: &str = "http://www.collada.org/2005/11/COLLADASchema";

/// Schema version written on new documents.
pub const COLLADA_VERSION: &str = "1.4.1";

/// Tag name of the document root.
pub const ROOT_ELEMENT: &str = "COLLADA";

/// Attribute carrying the default namespace declaration.
pub const NAMESPACE_ATTRIBUTE: &str = "xmlns";

/// Skeleton parsed by [`crate::ColladaDocument::new`].
///
/// The namespace declaration is added at construction, the same way it is
/// restored on loaded documents that lack one.
pub const TEMPLATE: &str = r#"<?xml version="1.0"?>
<COLLADA version="1.4.1">
    <asset>
        <contributor>
            <author></author>
            <authoring_tool></authoring_tool>
            <comments></comments>
            <copyright></copyright>
        </contributor>
        <created></created>
        <modified></modified>
        <unit name="meter" meter="1.0"/>
        <up_axis>Y_UP</up_axis>
    </asset>
    <library_cameras></library_cameras>
    <library_lights></library_lights>
    <library_materials></library_materials>
    <library_effects></library_effects>
    <library_geometries></library_geometries>
    <library_visual_scenes></library_visual_scenes>
    <scene></scene>
</COLLADA>
"#;

/// Top-level children of a new document, in order.
pub const TOP_LEVEL_ELEMENTS: [&str; 8] = [
    "asset",
    "library_cameras",
    "library_lights",
    "library_materials",
    "library_effects",
    "library_geometries",
    "library_visual_scenes",
    "scene",
];

/// Element paths, relative to the root.
pub mod path {
    pub const AUTHOR: &str = "asset/contributor/author";
    pub const AUTHORING_TOOL: &str = "asset/contributor/authoring_tool";
    pub const COMMENTS: &str = "asset/contributor/comments";
    pub const COPYRIGHT: &str = "asset/contributor/copyright";
    pub const CREATED: &str = "asset/created";
    pub const MODIFIED: &str = "asset/modified";
    pub const UNIT: &str = "asset/unit";
    pub const UP_AXIS: &str = "asset/up_axis";
}

/// Asset fields that must exist on every constructed document.
pub const REQUIRED_ASSET_PATHS: [&str; 6] = [
    path::AUTHOR,
    path::AUTHORING_TOOL,
    path::CREATED,
    path::MODIFIED,
    path::UNIT,
    path::UP_AXIS,
];

/// Identity written to `contributor/authoring_tool`.
pub const TOOL_IDENTITY: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
