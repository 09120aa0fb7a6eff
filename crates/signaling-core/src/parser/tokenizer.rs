//! Single-pass SDP tokenizer
//!
//! Walks the document once and indexes every line, so that attribute lookups do
//! not rescan the text. Singular attributes are read with [`SdpAttributes::first`]
//! (first occurrence wins, regardless of which section it appears in); repeated
//! attributes such as `candidate` or `ssrc` are read with [`SdpAttributes::all`].

use std::collections::HashMap;

use tracing::trace;

use super::line_parser::{parse_sdp_line, split_attribute};

/// Index of an SDP document's lines, keyed by attribute name and line type
#[derive(Debug, Default, Clone)]
pub struct SdpAttributes<'a> {
    attributes: HashMap<&'a str, Vec<&'a str>>,
    lines: HashMap<char, Vec<&'a str>>,
}

impl<'a> SdpAttributes<'a> {
    /// Tokenize a raw SDP document
    ///
    /// Blank lines are skipped. Lines that are not of the form `<type>=<value>` are
    /// skipped as well: only the attributes looked up later are contractual, and a
    /// missing one is reported by the caller.
    pub fn parse(raw: &'a str) -> Self {
        let mut index = SdpAttributes::default();

        for line in raw.lines() {
            if line.is_empty() {
                continue;
            }

            match parse_sdp_line(line) {
                Ok((_, ('a', value))) => {
                    let (name, attr_value) = split_attribute(value);
                    index.attributes.entry(name).or_default().push(attr_value);
                }
                Ok((_, (kind, value))) => {
                    index.lines.entry(kind).or_default().push(value);
                }
                Err(_) => trace!("Skipping unparsable SDP line: {:?}", line),
            }
        }

        index
    }

    /// Value of the first `a=<name>:` line
    pub fn first(&self, name: &str) -> Option<&'a str> {
        self.attributes.get(name).and_then(|values| values.first().copied())
    }

    /// Values of every `a=<name>:` line, in document order
    pub fn all(&self, name: &str) -> &[&'a str] {
        self.attributes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an `a=<name>` line is present at all
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Values of every non-attribute line of the given type (`m`, `c`, `o`, ...)
    pub fn lines(&self, kind: char) -> &[&'a str] {
        self.lines.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFER: &str = "v=0\r\n\
        o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n\
        s=-\r\n\
        t=0 0\r\n\
        a=group:BUNDLE 0\r\n\
        m=audio 9 UDP/TLS/RTP/SAVPF 111 126\r\n\
        c=IN IP4 0.0.0.0\r\n\
        a=candidate:1 1 udp 2113667327 10.0.0.5 54321 typ host generation 0\r\n\
        a=candidate:2 1 udp 1686052607 203.0.113.7 54321 typ srflx raddr 10.0.0.5 rport 54321 generation 0\r\n\
        a=ice-ufrag:uf1\r\n\
        a=ice-pwd:pwd123\r\n\
        a=ice-ufrag:second\r\n\
        a=rtcp-mux\r\n\
        a=ssrc:12345 cname:abc\r\n\
        a=ssrc:12345 msid:stream track\r\n";

    #[test]
    fn test_first_occurrence_wins() {
        let attrs = SdpAttributes::parse(OFFER);
        assert_eq!(attrs.first("ice-ufrag"), Some("uf1"));
        assert_eq!(attrs.all("ice-ufrag"), &["uf1", "second"]);
        assert_eq!(attrs.first("ice-pwd"), Some("pwd123"));
    }

    #[test]
    fn test_repeated_attributes_are_collected() {
        let attrs = SdpAttributes::parse(OFFER);
        let candidates = attrs.all("candidate");
        assert_eq!(candidates.len(), 2);
        assert!(candidates[1].contains("typ srflx"));
        assert_eq!(attrs.all("ssrc").len(), 2);
        assert!(attrs.all("fingerprint").is_empty());
    }

    #[test]
    fn test_property_attributes_and_lines() {
        let attrs = SdpAttributes::parse(OFFER);
        assert!(attrs.contains("rtcp-mux"));
        assert_eq!(attrs.first("rtcp-mux"), Some(""));
        assert_eq!(attrs.lines('m'), &["audio 9 UDP/TLS/RTP/SAVPF 111 126"]);
        assert_eq!(attrs.lines('v'), &["0"]);
        assert!(attrs.lines('b').is_empty());
    }

    #[test]
    fn test_tolerates_lf_blank_and_garbage_lines() {
        let attrs = SdpAttributes::parse("v=0\n\nnot an sdp line\na=ice-pwd:p\n");
        assert_eq!(attrs.first("ice-pwd"), Some("p"));
        assert_eq!(attrs.lines('v'), &["0"]);
    }
}
