//! SDP parsing
//!
//! - [`line_parser`]: one `<type>=<value>` line (nom)
//! - [`tokenizer`]: single pass over a document into an attribute index
//! - [`attributes`]: value parsers for `fingerprint` and `ssrc`

pub mod attributes;
pub mod line_parser;
pub mod tokenizer;

pub use attributes::{parse_fingerprint, parse_ssrc};
pub use line_parser::{parse_sdp_line, split_attribute};
pub use tokenizer::SdpAttributes;
