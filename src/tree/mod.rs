//! Generic XML tree capability.
//!
//! A small ordered, attributed element tree with a quick-xml backed parser
//! and writer, plus the whitespace passes used at serialization time. Nothing
//! in here knows about COLLADA.

pub mod element;
pub mod parser;
pub mod whitespace;
pub mod writer;

pub use element::Element;
pub use parser::{parse_bytes, parse_str};
pub use whitespace::{flatten, indent};
pub use writer::to_xml_string;
