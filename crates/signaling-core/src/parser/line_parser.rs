//! SDP line parsing utilities
//!
//! Each SDP line has the format `<type>=<value>` where type is a single character
//! (RFC 8866 Section 5). Lines are terminated by CRLF, although LF alone is
//! tolerated since some engines emit it.

use nom::{
    IResult,
    character::complete::{anychar, char, not_line_ending},
};

/// Parse an SDP line into a key-value pair
///
/// The value is returned exactly as written (no trimming); line terminators are
/// consumed from the remaining input.
///
/// # Examples
///
/// ```
/// use rvoip_signaling_core::parser::parse_sdp_line;
///
/// let (_, (key, value)) = parse_sdp_line("a=ice-ufrag:uf1\r\n").unwrap();
/// assert_eq!(key, 'a');
/// assert_eq!(value, "ice-ufrag:uf1");
/// ```
pub fn parse_sdp_line(input: &str) -> IResult<&str, (char, &str)> {
    let (input, key) = anychar(input)?;
    let (input, _) = char('=')(input)?;
    let (input, value) = not_line_ending(input)?;

    let input = input
        .strip_prefix("\r\n")
        .or_else(|| input.strip_prefix('\n'))
        .unwrap_or(input);

    Ok((input, (key, value)))
}

/// Split the value of an `a=` line into attribute name and attribute value
///
/// Property attributes such as `a=rtcp-mux` have no value and yield `""`.
pub fn split_attribute(value: &str) -> (&str, &str) {
    value.split_once(':').unwrap_or((value, ""))
}
