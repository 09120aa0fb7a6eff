//! ICE-lite SDP answer synthesis
//!
//! The answer always describes one receive-only audio section, with this endpoint
//! playing the ICE-lite, DTLS-passive role. Only the ICE credentials, the first
//! fingerprint and the candidates come from the remote record; everything else is
//! fixed.

use tracing::{debug, warn};

use super::document::{SdpDocument, SdpLine};
use crate::candidate::Candidate;
use crate::constants::{
    AUDIO_LEVEL_EXTMAP_ID, AUDIO_LEVEL_EXTMAP_URI, MEDIA_ID, OPUS_FMTP, OPUS_PAYLOAD_TYPE,
    OPUS_RTPMAP, PLACEHOLDER_ADDRESS, PLACEHOLDER_PORT, SESSION_VERSION,
    TELEPHONE_EVENT_PAYLOAD_TYPE, TELEPHONE_EVENT_RTPMAP,
};
use crate::error::Result;
use crate::params::{RemoteTransportParams, SetupRole};

/// Builds SDP answers from [`RemoteTransportParams`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SdpAnswerBuilder;

impl SdpAnswerBuilder {
    /// Build the answer text, using the current time as origin session id
    ///
    /// # Examples
    ///
    /// ```
    /// use rvoip_signaling_core::{RemoteTransportParams, SdpAnswerBuilder};
    ///
    /// let remote = RemoteTransportParams::from_json(r#"{
    ///     "fingerprints": [{"fingerprint": "AA:BB:CC", "hash": "sha-256", "setup": "active"}],
    ///     "pwd": "pwd123",
    ///     "ufrag": "uf1",
    ///     "candidates": []
    /// }"#).unwrap();
    ///
    /// let answer = SdpAnswerBuilder::build(&remote).unwrap();
    /// assert!(answer.contains("a=fingerprint:sha-256 AA:BB:CC\r\n"));
    /// assert!(answer.contains("a=setup:passive\r\n"));
    /// ```
    pub fn build(remote: &RemoteTransportParams) -> Result<String> {
        let session_id = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        Ok(Self::build_document(remote, session_id)?.to_string())
    }

    /// Build the answer document for a given origin session id
    ///
    /// Deterministic for identical input.
    pub fn build_document(remote: &RemoteTransportParams, session_id: u64) -> Result<SdpDocument> {
        remote.validate()?;

        if remote.candidates.is_empty() {
            warn!("Building answer without candidates; the peer will have no connectivity path");
        }

        let mut doc = SdpDocument::new();
        doc.append(session_section(session_id));
        doc.append(media_section());
        doc.append(transport_section(remote)?);
        doc.append(candidate_section(&remote.candidates));
        doc.append(codec_section());

        debug!(
            "Built answer for ufrag={} with {} candidate(s)",
            remote.user_fragment,
            remote.candidates.len()
        );

        Ok(doc)
    }
}

fn placeholder_connection() -> SdpLine {
    SdpLine::Connection {
        net_type: "IN".to_string(),
        addr_type: "IP4".to_string(),
        address: PLACEHOLDER_ADDRESS.to_string(),
    }
}

/// `v=`, `o=`, `s=`, `t=` and the session-wide BUNDLE / ICE-lite attributes
fn session_section(session_id: u64) -> Vec<SdpLine> {
    vec![
        SdpLine::Version(0),
        SdpLine::Origin {
            username: "-".to_string(),
            session_id,
            session_version: SESSION_VERSION,
            net_type: "IN".to_string(),
            addr_type: "IP4".to_string(),
            address: PLACEHOLDER_ADDRESS.to_string(),
        },
        SdpLine::SessionName("-".to_string()),
        SdpLine::Timing { start: 0, stop: 0 },
        SdpLine::attribute("group", format!("BUNDLE {}", MEDIA_ID)),
        SdpLine::property("ice-lite"),
    ]
}

/// The single audio media line; port and address are resolved through ICE
fn media_section() -> Vec<SdpLine> {
    vec![
        SdpLine::Media {
            media: "audio".to_string(),
            port: PLACEHOLDER_PORT,
            protocol: "RTP/SAVPF".to_string(),
            formats: vec![OPUS_PAYLOAD_TYPE, TELEPHONE_EVENT_PAYLOAD_TYPE],
        },
        placeholder_connection(),
        SdpLine::attribute("mid", MEDIA_ID),
    ]
}

/// ICE credentials and DTLS parameters
///
/// The setup role is always passive; the remote entry's `setup` is not echoed.
fn transport_section(remote: &RemoteTransportParams) -> Result<Vec<SdpLine>> {
    let fingerprint = remote.primary_fingerprint()?;

    Ok(vec![
        SdpLine::attribute("ice-ufrag", remote.user_fragment.as_str()),
        SdpLine::attribute("ice-pwd", remote.password.as_str()),
        SdpLine::attribute("fingerprint", fingerprint.to_attribute_value()),
        SdpLine::attribute("setup", SetupRole::Passive.as_str()),
    ])
}

fn candidate_section(candidates: &[Candidate]) -> Vec<SdpLine> {
    candidates
        .iter()
        .map(|candidate| SdpLine::attribute("candidate", candidate.to_string()))
        .collect()
}

/// Codec mapping, RTCP and direction attributes
fn codec_section() -> Vec<SdpLine> {
    vec![
        SdpLine::attribute("rtpmap", format!("{} {}", OPUS_PAYLOAD_TYPE, OPUS_RTPMAP)),
        SdpLine::attribute(
            "rtpmap",
            format!("{} {}", TELEPHONE_EVENT_PAYLOAD_TYPE, TELEPHONE_EVENT_RTPMAP),
        ),
        SdpLine::attribute("fmtp", format!("{} {}", OPUS_PAYLOAD_TYPE, OPUS_FMTP)),
        SdpLine::attribute(
            "rtcp",
            format!("{} IN IP4 {}", PLACEHOLDER_PORT, PLACEHOLDER_ADDRESS),
        ),
        SdpLine::property("rtcp-mux"),
        SdpLine::attribute("rtcp-fb", format!("{} transport-cc", OPUS_PAYLOAD_TYPE)),
        SdpLine::attribute(
            "extmap",
            format!("{} {}", AUDIO_LEVEL_EXTMAP_ID, AUDIO_LEVEL_EXTMAP_URI),
        ),
        SdpLine::property("recvonly"),
    ]
}
