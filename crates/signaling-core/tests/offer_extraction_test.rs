// Tests for extracting transport parameters from local offers

use proptest::prelude::*;
use rvoip_signaling_core::constants::{REQUIRED_OFFER_PREFIXES, SSRC_PREFIX};
use rvoip_signaling_core::{Error, SdpOfferExtractor, SetupRole, TransportParams};

const FIREFOX_OFFER: &str = "v=0\r\n\
    o=mozilla...THIS_IS_SDPARTA-99.0 3702263452735398412 0 IN IP4 0.0.0.0\r\n\
    s=-\r\n\
    t=0 0\r\n\
    a=sendrecv\r\n\
    a=fingerprint:sha-256 1A:2B:3C:4D:5E:6F:70:81:92:A3:B4:C5:D6:E7:F8:09:1A:2B:3C:4D:5E:6F:70:81:92:A3:B4:C5:D6:E7:F8:09\r\n\
    a=group:BUNDLE 0\r\n\
    a=ice-options:trickle\r\n\
    a=msid-semantic:WMS *\r\n\
    m=audio 9 UDP/TLS/RTP/SAVPF 109 9 0 8 101\r\n\
    c=IN IP4 0.0.0.0\r\n\
    a=sendrecv\r\n\
    a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r\n\
    a=fmtp:109 maxplaybackrate=48000;stereo=1;useinbandfec=1\r\n\
    a=ice-pwd:4bfd1ea7e4b0d0b5c5ff2e1f3d1d9c5a\r\n\
    a=ice-ufrag:b8a3a3f4\r\n\
    a=mid:0\r\n\
    a=msid:{5b2b9d9e-1c1f-4a0c-9b33-2b0d2c6c5a11} {0c2f3e7d-2b5a-4b7e-8f1c-9d3a2e1b0c4d}\r\n\
    a=rtcp-mux\r\n\
    a=rtpmap:109 opus/48000/2\r\n\
    a=setup:actpass\r\n\
    a=ssrc:3792434455 cname:{a6c1b0f5-0f7e-4c9e-9b1a-6d0e2f3c4b5a}\r\n";

#[test]
fn test_extract_firefox_offer() {
    let params = SdpOfferExtractor::extract(FIREFOX_OFFER).unwrap();

    assert_eq!(params.hash_algorithm, "sha-256");
    assert!(params.fingerprint.starts_with("1A:2B:3C"));
    assert_eq!(params.password, "4bfd1ea7e4b0d0b5c5ff2e1f3d1d9c5a");
    assert_eq!(params.user_fragment, "b8a3a3f4");
    assert_eq!(params.setup_role, SetupRole::Active);
    assert_eq!(params.sync_source, Some(3792434455));
}

#[test]
fn test_every_required_prefix_is_enforced() {
    for prefix in REQUIRED_OFFER_PREFIXES {
        let stripped: String = FIREFOX_OFFER
            .split_inclusive("\r\n")
            .filter(|line| !line.starts_with(prefix))
            .collect();

        match SdpOfferExtractor::extract(&stripped) {
            Err(Error::MalformedOffer { prefix: missing, .. }) => assert_eq!(missing, prefix),
            other => panic!("expected MalformedOffer for {}, got {:?}", prefix, other),
        }
    }
}

#[test]
fn test_offer_without_ssrc() {
    let offer: String = FIREFOX_OFFER
        .split_inclusive("\r\n")
        .filter(|line| !line.starts_with(SSRC_PREFIX))
        .collect();

    let params = SdpOfferExtractor::extract(&offer).unwrap();
    assert_eq!(params.sync_source, None);
    assert!(!params.to_json().unwrap().contains("\"ssrc\""));
}

#[test]
fn test_lf_only_offer() {
    let offer = FIREFOX_OFFER.replace("\r\n", "\n");
    let params = SdpOfferExtractor::extract(&offer).unwrap();
    assert_eq!(params.user_fragment, "b8a3a3f4");
}

#[test]
fn test_empty_document() {
    assert!(matches!(
        SdpOfferExtractor::extract(""),
        Err(Error::MalformedOffer { prefix: "a=fingerprint:", .. })
    ));
}

#[test]
fn test_payload_round_trips_to_transport_params() {
    let params = SdpOfferExtractor::extract(FIREFOX_OFFER).unwrap();
    let decoded = TransportParams::from_json(&params.to_json().unwrap()).unwrap();
    assert_eq!(decoded, params);
}

fn hash_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["sha-1", "sha-224", "sha-256", "sha-384", "sha-512"])
}

fn digest_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[0-9A-F]{2}", 1..32).prop_map(|pairs| pairs.join(":"))
}

fn offer_text(hash: &str, digest: &str, pwd: &str, ufrag: &str, ssrc: Option<u32>) -> String {
    let mut offer = format!(
        "v=0\r\n\
         o=- 1 2 IN IP4 127.0.0.1\r\n\
         s=-\r\n\
         t=0 0\r\n\
         m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
         a=ice-ufrag:{ufrag}\r\n\
         a=ice-pwd:{pwd}\r\n\
         a=fingerprint:{hash} {digest}\r\n\
         a=setup:actpass\r\n"
    );
    if let Some(ssrc) = ssrc {
        offer.push_str(&format!("a=ssrc:{ssrc} cname:test\r\n"));
    }
    offer
}

proptest! {
    #[test]
    fn prop_fields_equal_literal_suffixes(
        hash in hash_strategy(),
        digest in digest_strategy(),
        pwd in "[A-Za-z0-9+/]{22,32}",
        ufrag in "[A-Za-z0-9+/]{4,16}",
        ssrc in proptest::option::of(any::<u32>()),
    ) {
        let params = SdpOfferExtractor::extract(&offer_text(hash, &digest, &pwd, &ufrag, ssrc)).unwrap();

        prop_assert_eq!(params.hash_algorithm.as_str(), hash);
        prop_assert_eq!(&params.fingerprint, &digest);
        prop_assert_eq!(&params.password, &pwd);
        prop_assert_eq!(&params.user_fragment, &ufrag);
        prop_assert_eq!(params.sync_source, ssrc);
        prop_assert_eq!(params.setup_role, SetupRole::Active);
        prop_assert!(params.sync_source_groups.is_empty());
    }

    #[test]
    fn prop_removing_required_prefix_fails(
        digest in digest_strategy(),
        pwd in "[A-Za-z0-9+/]{22,32}",
        ufrag in "[A-Za-z0-9+/]{4,16}",
        index in 0..REQUIRED_OFFER_PREFIXES.len(),
    ) {
        let prefix = REQUIRED_OFFER_PREFIXES[index];
        let offer: String = offer_text("sha-256", &digest, &pwd, &ufrag, Some(7))
            .split_inclusive("\r\n")
            .filter(|line| !line.starts_with(prefix))
            .collect();

        let err = SdpOfferExtractor::extract(&offer).unwrap_err();
        prop_assert_eq!(err.prefix(), Some(prefix));
    }
}
