//! Transport parameter records exchanged between the two ends of a call
//!
//! Two records travel through the manual exchange:
//!
//! - [`TransportParams`] is extracted from our own offer and shown to the operator.
//! - [`RemoteTransportParams`] is pasted back by the operator and describes the
//!   peer we answer.
//!
//! Both serialize to the same JSON shape (`fingerprints`, `pwd`, `ufrag`, ...), so
//! the record the operator copies on one side is the record pasted on the other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::{Error, Result};

/// DTLS connection role (RFC 8842 `a=setup:`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupRole {
    /// Initiates the DTLS handshake (DTLS client)
    #[default]
    Active,
    /// Waits for the DTLS handshake (DTLS server)
    Passive,
    /// Either role, decided by the answerer
    Actpass,
    /// No connection yet
    Holdconn,
}

impl SetupRole {
    /// The attribute value as written in SDP
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupRole::Active => "active",
            SetupRole::Passive => "passive",
            SetupRole::Actpass => "actpass",
            SetupRole::Holdconn => "holdconn",
        }
    }
}

impl fmt::Display for SetupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One DTLS certificate fingerprint entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Hex-colon-separated digest, e.g. `AA:BB:CC`
    pub fingerprint: String,

    /// Digest algorithm name, e.g. `sha-256`
    #[serde(rename = "hash")]
    pub hash_algorithm: String,

    /// DTLS role advertised alongside the fingerprint
    #[serde(default)]
    pub setup: SetupRole,
}

impl Fingerprint {
    /// Create a fingerprint entry
    pub fn new(hash_algorithm: impl Into<String>, fingerprint: impl Into<String>, setup: SetupRole) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            hash_algorithm: hash_algorithm.into(),
            setup,
        }
    }

    /// `<hash> <fingerprint>`, the value of an `a=fingerprint:` line
    pub fn to_attribute_value(&self) -> String {
        format!("{} {}", self.hash_algorithm, self.fingerprint)
    }

    /// Both parts are single tokens that fit on one `a=fingerprint:` line
    fn is_usable(&self) -> bool {
        is_line_token(&self.fingerprint) && is_line_token(&self.hash_algorithm)
    }
}

/// Non-empty, without whitespace or control characters (CR and LF included)
fn is_line_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c.is_control())
}

fn require_credential(value: &str, field: &'static str) -> Result<()> {
    if is_line_token(value) {
        Ok(())
    } else {
        Err(Error::MissingCredentials { field })
    }
}

/// Transport parameters of the local endpoint, extracted from its own offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TransportPayload", try_from = "TransportPayload")]
pub struct TransportParams {
    /// DTLS certificate fingerprint digest
    pub fingerprint: String,
    /// Digest algorithm of `fingerprint`
    pub hash_algorithm: String,
    /// DTLS role; always `active` for a locally produced offer
    pub setup_role: SetupRole,
    /// ICE password
    pub password: String,
    /// ICE username fragment
    pub user_fragment: String,
    /// SSRC of the local audio stream, when the offer carries one
    pub sync_source: Option<u32>,
    /// SSRC groups; never populated here
    pub sync_source_groups: Vec<String>,
}

impl TransportParams {
    /// The record as a single fingerprint entry
    pub fn fingerprint_entry(&self) -> Fingerprint {
        Fingerprint::new(&self.hash_algorithm, &self.fingerprint, self.setup_role)
    }

    /// Compact JSON payload for the operator to copy
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON payload
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a payload produced by [`TransportParams::to_json`]
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Wire shape of [`TransportParams`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransportPayload {
    fingerprints: Vec<Fingerprint>,
    pwd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ssrc: Option<u32>,
    #[serde(rename = "ssrc-groups", default)]
    ssrc_groups: Vec<String>,
    ufrag: String,
}

impl From<TransportParams> for TransportPayload {
    fn from(params: TransportParams) -> Self {
        let fingerprint = params.fingerprint_entry();
        TransportPayload {
            fingerprints: vec![fingerprint],
            pwd: params.password,
            ssrc: params.sync_source,
            ssrc_groups: params.sync_source_groups,
            ufrag: params.user_fragment,
        }
    }
}

impl TryFrom<TransportPayload> for TransportParams {
    type Error = Error;

    fn try_from(payload: TransportPayload) -> Result<Self> {
        let first = payload
            .fingerprints
            .into_iter()
            .next()
            .filter(Fingerprint::is_usable)
            .ok_or(Error::MissingFingerprint)?;
        if payload.pwd.is_empty() {
            return Err(Error::MissingCredentials { field: "pwd" });
        }
        if payload.ufrag.is_empty() {
            return Err(Error::MissingCredentials { field: "ufrag" });
        }

        Ok(TransportParams {
            fingerprint: first.fingerprint,
            hash_algorithm: first.hash_algorithm,
            setup_role: first.setup,
            password: payload.pwd,
            user_fragment: payload.ufrag,
            sync_source: payload.ssrc,
            sync_source_groups: payload.ssrc_groups,
        })
    }
}

/// Transport parameters of the peer being answered, as pasted by the operator
///
/// Missing keys decode to empty values so that validation can name exactly what
/// is absent instead of failing with a generic decode error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RemoteTransportParams {
    /// Fingerprint entries; only the first is used
    #[serde(default)]
    pub fingerprints: Vec<Fingerprint>,

    /// ICE password
    #[serde(rename = "pwd", default)]
    pub password: String,

    /// ICE username fragment
    #[serde(rename = "ufrag", default)]
    pub user_fragment: String,

    /// Connectivity candidates, in the order they are advertised
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl RemoteTransportParams {
    /// Decode a pasted payload
    ///
    /// Accepts the record on its own or wrapped as `{"transport": {...}}`, the shape
    /// conference servers return it in.
    pub fn from_json(payload: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(payload)?;
        if let Some(transport) = value.get_mut("transport").filter(|t| t.is_object()) {
            let inner = transport.take();
            return Ok(serde_json::from_value(inner)?);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The fingerprint entry an answer is built from
    pub fn primary_fingerprint(&self) -> Result<&Fingerprint> {
        self.fingerprints
            .first()
            .filter(|fp| fp.is_usable())
            .ok_or(Error::MissingFingerprint)
    }

    /// Check everything an answer needs, in the order the answer consumes it
    ///
    /// Every value copied into the answer must be a single token: a blank value
    /// or one carrying whitespace or a line break is reported as missing.
    pub fn validate(&self) -> Result<()> {
        self.primary_fingerprint()?;
        require_credential(&self.user_fragment, "ufrag")?;
        require_credential(&self.password, "pwd")?;

        for candidate in &self.candidates {
            candidate.validate()?;
        }

        Ok(())
    }
}

impl From<TransportParams> for RemoteTransportParams {
    fn from(params: TransportParams) -> Self {
        let fingerprint = params.fingerprint_entry();
        RemoteTransportParams {
            fingerprints: vec![fingerprint],
            password: params.password,
            user_fragment: params.user_fragment,
            candidates: Vec::new(),
        }
    }
}
