//! Manual offer/answer exchange
//!
//! The two halves of a copy-paste signaling round, expressed as plain functions:
//! nothing here holds session state between calls.

use tracing::debug;

use crate::builder::SdpAnswerBuilder;
use crate::error::Result;
use crate::extractor::SdpOfferExtractor;
use crate::params::RemoteTransportParams;

/// Turn the local engine's offer into the JSON payload the operator copies
pub fn local_offer_payload(raw_offer: &str, pretty: bool) -> Result<String> {
    let params = SdpOfferExtractor::extract(raw_offer)?;
    if pretty {
        params.to_json_pretty()
    } else {
        params.to_json()
    }
}

/// Turn the payload pasted by the operator into the SDP answer for the local engine
pub fn answer_from_payload(remote_payload: &str) -> Result<String> {
    let remote = RemoteTransportParams::from_json(remote_payload)?;
    debug!(
        "Decoded remote payload with {} fingerprint(s) and {} candidate(s)",
        remote.fingerprints.len(),
        remote.candidates.len()
    );
    SdpAnswerBuilder::build(&remote)
}
