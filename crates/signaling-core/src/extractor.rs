//! Local offer extraction
//!
//! Reduces the offer produced by the local WebRTC engine to the handful of
//! transport parameters the remote side needs: DTLS fingerprint, ICE credentials
//! and, when present, the SSRC of the captured audio stream.

use tracing::{debug, warn};

use crate::constants::{
    FINGERPRINT_PREFIX, ICE_PWD_PREFIX, ICE_UFRAG_PREFIX, SETUP_PREFIX, SSRC_PREFIX,
};
use crate::error::{Error, Result};
use crate::params::{SetupRole, TransportParams};
use crate::parser::{SdpAttributes, parse_fingerprint, parse_ssrc};

/// Extracts [`TransportParams`] from a raw local offer
#[derive(Debug, Clone, Copy, Default)]
pub struct SdpOfferExtractor;

impl SdpOfferExtractor {
    /// Parse a raw offer into transport parameters
    ///
    /// Every required attribute is resolved from its first occurrence in the
    /// document. A required attribute that is absent or empty, or a fingerprint
    /// that is not `<hash> <digest>`, fails the whole extraction with [`Error::MalformedOffer`] naming its prefix. The
    /// `a=ssrc:` attribute is optional and never fails the extraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvoip_signaling_core::SdpOfferExtractor;
    ///
    /// let offer = "v=0\r\n\
    ///     a=fingerprint:sha-256 AA:BB:CC\r\n\
    ///     a=setup:actpass\r\n\
    ///     a=ice-pwd:pwd123\r\n\
    ///     a=ice-ufrag:uf1\r\n";
    ///
    /// let params = SdpOfferExtractor::extract(offer).unwrap();
    /// assert_eq!(params.fingerprint, "AA:BB:CC");
    /// assert_eq!(params.sync_source, None);
    /// ```
    pub fn extract(raw_sdp: &str) -> Result<TransportParams> {
        let attrs = SdpAttributes::parse(raw_sdp);

        let fingerprint_line = required(&attrs, FINGERPRINT_PREFIX)?;
        let (hash_algorithm, fingerprint) =
            parse_fingerprint(fingerprint_line).map_err(|e| malformed(FINGERPRINT_PREFIX, e))?;

        // Must be present; the offerer's own role is reported as active whatever it advertises
        required(&attrs, SETUP_PREFIX)?;

        let password = required(&attrs, ICE_PWD_PREFIX)?;
        let user_fragment = required(&attrs, ICE_UFRAG_PREFIX)?;

        let sync_source = attrs.first(attribute_name(SSRC_PREFIX)).and_then(|value| {
            match parse_ssrc(value) {
                Ok(ssrc) => Some(ssrc),
                Err(e) => {
                    warn!("Ignoring unparsable {} line: {}", SSRC_PREFIX, e);
                    None
                }
            }
        });

        debug!(
            "Extracted offer transport: hash={}, ufrag={}, ssrc={:?}",
            hash_algorithm, user_fragment, sync_source
        );

        Ok(TransportParams {
            fingerprint: fingerprint.to_string(),
            hash_algorithm: hash_algorithm.to_string(),
            setup_role: SetupRole::Active,
            password: password.to_string(),
            user_fragment: user_fragment.to_string(),
            sync_source,
            sync_source_groups: Vec::new(),
        })
    }
}

/// `a=ice-pwd:` -> `ice-pwd`
fn attribute_name(prefix: &str) -> &str {
    let name = prefix.strip_prefix("a=").unwrap_or(prefix);
    name.strip_suffix(':').unwrap_or(name)
}

fn required<'a>(attrs: &SdpAttributes<'a>, prefix: &'static str) -> Result<&'a str> {
    match attrs.first(attribute_name(prefix)) {
        None => Err(Error::missing_prefix(prefix)),
        Some("") => Err(Error::MalformedOffer {
            prefix,
            reason: "has an empty value".to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn malformed(prefix: &'static str, cause: Error) -> Error {
    Error::MalformedOffer {
        prefix,
        reason: cause.to_string(),
    }
}
