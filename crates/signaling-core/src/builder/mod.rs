//! SDP answer construction
//!
//! [`document`] holds the typed line records; [`answer`] assembles them into the
//! fixed ICE-lite answer layout.

pub mod answer;
pub mod document;

pub use answer::SdpAnswerBuilder;
pub use document::{SdpDocument, SdpLine};
