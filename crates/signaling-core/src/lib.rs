//! Manual signaling for a single audio-only ICE-lite WebRTC session.
//!
//! The local WebRTC engine produces an offer; [`SdpOfferExtractor`] reduces it to
//! the transport parameters the remote side needs, which the operator copies as
//! JSON. The remote side answers with its own transport parameters, which
//! [`SdpAnswerBuilder`] turns into a complete SDP answer describing one
//! receive-only audio section, with this endpoint acting as the ICE-lite,
//! DTLS-passive peer.
//!
//! ```text
//! local offer SDP --extract--> TransportParams --JSON--> operator
//! operator --JSON--> RemoteTransportParams --build--> SDP answer --> local engine
//! ```
//!
//! Both operations are pure: they read their argument, allocate locally and
//! return. They hold no session state and can be called from any thread.
//!
//! A [`Candidate`] also parses from an `a=candidate:` line, so an answer can be
//! read back into the records it was built from:
//!
//! ```
//! use rvoip_signaling_core::Candidate;
//!
//! let candidate: Candidate = "a=candidate:1 1 udp 2113667327 10.0.0.5 54321 typ host generation 0"
//!     .parse()
//!     .unwrap();
//! assert_eq!(candidate.port, 54321);
//! assert_eq!(candidate.to_string(), "1 1 udp 2113667327 10.0.0.5 54321 typ host generation 0");
//! ```

// Error handling
pub mod error;

// Transport parameter records
pub mod params;

// ICE candidates
pub mod candidate;

// SDP tokenizer and attribute parsers
pub mod parser;

// Offer extraction
pub mod extractor;

// Answer construction
pub mod builder;

// Copy-paste exchange
pub mod signaling;

// Public exports
pub use builder::{SdpAnswerBuilder, SdpDocument, SdpLine};
pub use candidate::Candidate;
pub use error::{Error, Result};
pub use extractor::SdpOfferExtractor;
pub use params::{Fingerprint, RemoteTransportParams, SetupRole, TransportParams};
pub use signaling::{answer_from_payload, local_offer_payload};

/// Re-export of common types and functions
pub mod prelude {
    pub use super::{
        Candidate, Error, Fingerprint, RemoteTransportParams, Result, SdpAnswerBuilder,
        SdpOfferExtractor, SetupRole, TransportParams, answer_from_payload, local_offer_payload,
    };
}

/// Protocol constants
pub mod constants {
    /// Offer attribute prefixes
    pub const FINGERPRINT_PREFIX: &str = "a=fingerprint:";
    pub const SETUP_PREFIX: &str = "a=setup:";
    pub const ICE_PWD_PREFIX: &str = "a=ice-pwd:";
    pub const ICE_UFRAG_PREFIX: &str = "a=ice-ufrag:";
    pub const SSRC_PREFIX: &str = "a=ssrc:";

    /// Prefixes an offer must carry, in the order they are checked
    pub const REQUIRED_OFFER_PREFIXES: [&str; 4] =
        [FINGERPRINT_PREFIX, SETUP_PREFIX, ICE_PWD_PREFIX, ICE_UFRAG_PREFIX];

    /// Media section id, also the BUNDLE group member
    pub const MEDIA_ID: &str = "0";

    /// Origin session version
    pub const SESSION_VERSION: u64 = 2;

    /// Port and address placeholders; the real path is negotiated through ICE
    pub const PLACEHOLDER_PORT: u16 = 1;
    pub const PLACEHOLDER_ADDRESS: &str = "0.0.0.0";

    /// Opus
    pub const OPUS_PAYLOAD_TYPE: u8 = 111;
    pub const OPUS_RTPMAP: &str = "opus/48000/2";
    pub const OPUS_FMTP: &str = "minptime=10; useinbandfec=1; usedtx=1";

    /// RFC 4733 telephone events
    pub const TELEPHONE_EVENT_PAYLOAD_TYPE: u8 = 126;
    pub const TELEPHONE_EVENT_RTPMAP: &str = "telephone-event/8000";

    /// RFC 6464 audio level header extension
    pub const AUDIO_LEVEL_EXTMAP_ID: u8 = 1;
    pub const AUDIO_LEVEL_EXTMAP_URI: &str = "urn:ietf:params:rtp-hdrext:ssrc-audio-level";
}
