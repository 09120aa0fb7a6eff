use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting an offer or building an answer
#[derive(Error, Debug)]
pub enum Error {
    /// A required attribute of the local offer is absent or unparsable
    #[error("Malformed offer: {prefix} {reason}")]
    MalformedOffer {
        /// The SDP line prefix that could not be resolved, e.g. `a=ice-pwd:`
        prefix: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The remote record carries no usable DTLS fingerprint
    #[error("Remote transport parameters carry no fingerprint")]
    MissingFingerprint,

    /// The remote record lacks an ICE credential, or carries one that is not a single token
    #[error("Remote transport parameters are missing a usable ICE credential `{field}`")]
    MissingCredentials {
        /// `pwd` or `ufrag`
        field: &'static str,
    },

    /// A synchronization-source token is not an unsigned 32-bit integer
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),

    /// A candidate field would corrupt the emitted line, or a candidate line is unparsable
    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    /// The interchange record could not be decoded or encoded
    #[error("Invalid transport payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// An attribute value rejected by its value parser
    #[error("Parser error: {0}")]
    Parser(String),
}

impl Error {
    /// Shorthand for an offer attribute that is not present at all
    pub(crate) fn missing_prefix(prefix: &'static str) -> Self {
        Error::MalformedOffer {
            prefix,
            reason: "not found".to_string(),
        }
    }

    /// The offer prefix this error refers to, if any
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Error::MalformedOffer { prefix, .. } => Some(*prefix),
            _ => None,
        }
    }
}
