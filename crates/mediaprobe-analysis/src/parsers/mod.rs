//! Output parsers for the external inspection tools
//!
//! Each parser is a pure function of the tool's stdout. Individual fields
//! that fail to parse are dropped; a parser never fails as a whole.

pub mod ffprobe;
pub mod mime;
pub mod pdfinfo;
