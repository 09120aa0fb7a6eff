//! Value parsers for the attributes the offer extractor consumes
//!
//! Implements the DTLS `fingerprint` attribute of RFC 8842 and the leading SSRC
//! token of RFC 5576 `a=ssrc:` lines.

use nom::{
    IResult,
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::char,
    combinator::recognize,
    multi::separated_list1,
    sequence::separated_pair,
};

use crate::error::{Error, Result};

/// Parser for hash function part of fingerprint; any token is accepted
fn hash_function_parser(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// Parser for fingerprint value (colon-separated pairs of hex digits)
fn fingerprint_value_parser(input: &str) -> IResult<&str, &str> {
    recognize(separated_list1(
        char(':'),
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    ))(input)
}

/// Parses fingerprint attribute value: `<hash-function> <fingerprint>`
///
/// The value is split on its single space. Both parts are returned exactly as
/// written; the hash function name is not restricted to a registry so that
/// newer digests (`sha3-256`, ...) pass through unchanged.
pub fn parse_fingerprint(value: &str) -> Result<(&str, &str)> {
    let (rest, (hash, fingerprint)) =
        separated_pair(hash_function_parser, char(' '), fingerprint_value_parser)(value)
            .map_err(|_| Error::Parser(format!("Invalid fingerprint value: {}", value)))?;

    if !rest.is_empty() {
        return Err(Error::Parser(format!(
            "Invalid fingerprint format, trailing content: {}", value
        )));
    }

    Ok((hash, fingerprint))
}

/// Parses the SSRC id leading an `a=ssrc:<ssrc-id> <attribute>` value
pub fn parse_ssrc(value: &str) -> Result<u32> {
    let token = value.split_whitespace().next().unwrap_or("");
    token
        .parse::<u32>()
        .map_err(|_| Error::InvalidInteger(format!("ssrc id {:?}", token)))
}
