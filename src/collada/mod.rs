//! COLLADA 1.4.1 document model.
//!
//! This module provides [`ColladaDocument`], which builds a schema-valid
//! skeleton or loads an existing `.dae` file, exposes the asset metadata
//! (unit, up axis, contributor, timestamps), and serializes the result with
//! either indented or flattened whitespace.

pub mod axis;
pub mod constants;
pub mod document;
pub mod options;
pub mod timestamp;
pub mod unit;

pub use axis::UpAxis;
pub use constants::{COLLADA_NAMESPACE, COLLADA_VERSION};
pub use document::ColladaDocument;
pub use options::{Whitespace, WriteOptions};
pub use unit::{UnitScale, known_units};
