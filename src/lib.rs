//! colladoc - build, edit, and serialize COLLADA 1.4.1 documents
//!
//! This library creates COLLADA (`.dae`) asset documents from a fixed
//! skeleton, loads existing ones, edits the asset metadata every COLLADA file
//! carries, and writes the tree back out with controllable whitespace.
//!
//! # Features
//!
//! - **Template documents**: Every new document has the asset block, the six
//!   library blocks, and the scene block in schema order
//! - **Verbatim namespaces**: A default namespace declared on a loaded root is
//!   written back exactly as it was read
//! - **Unit and axis helpers**: Named units resolve through a built-in table,
//!   arbitrary units are accepted with an explicit scale
//! - **Whitespace control**: Indent for humans or flatten for size, both
//!   idempotent
//! - **Encodings**: UTF-8, UTF-16, and the legacy encodings known to
//!   `encoding_rs`
//!
//! # Example - Creating a document
//!
//! ```no_run
//! use colladoc::{ColladaDocument, WriteOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = ColladaDocument::new("my-exporter")?;
//! doc.set_unit_scale("inch", None)?;
//! doc.set_up_axis("Z_UP")?;
//! doc.save("model.dae", &WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Editing an existing file
//!
//! ```no_run
//! use colladoc::{ColladaDocument, WriteOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = ColladaDocument::open("model.dae", "")?;
//! let unit = doc.unit_scale()?;
//! println!("{} meters per {}", unit.meter, unit.name);
//!
//! // Custom units need an explicit scale
//! doc.set_unit_scale("cubit", Some(0.4572))?;
//! doc.save("model.dae", &WriteOptions::new().with_indent(false))?;
//! # Ok(())
//! # }
//! ```

/// Shared error type, encoding helpers, and environment lookups
pub mod common;

/// Generic ordered XML element tree with parser, writer, and whitespace passes
pub mod tree;

/// The COLLADA document model
pub mod collada;

// Re-export commonly used types for convenience
pub use collada::{ColladaDocument, UnitScale, UpAxis, Whitespace, WriteOptions};
pub use common::{Error, Result};
