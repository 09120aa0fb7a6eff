//! Typed SDP line records and their serialization
//!
//! A document is an ordered list of [`SdpLine`]s; nothing is rendered until the
//! whole document is written out, each line terminated by CRLF.

use std::fmt;

/// One line of an SDP document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdpLine {
    /// `v=<version>`
    Version(u8),

    /// `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
    Origin {
        username: String,
        session_id: u64,
        session_version: u64,
        net_type: String,
        addr_type: String,
        address: String,
    },

    /// `s=<session name>`
    SessionName(String),

    /// `t=<start-time> <stop-time>`
    Timing { start: u64, stop: u64 },

    /// `m=<media> <port> <proto> <fmt> ...`
    Media {
        media: String,
        port: u16,
        protocol: String,
        formats: Vec<u8>,
    },

    /// `c=<nettype> <addrtype> <connection-address>`
    Connection {
        net_type: String,
        addr_type: String,
        address: String,
    },

    /// `a=<name>` or `a=<name>:<value>`
    Attribute { name: String, value: Option<String> },
}

impl SdpLine {
    /// Value attribute, `a=<name>:<value>`
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        SdpLine::Attribute {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Property attribute, `a=<name>`
    pub fn property(name: impl Into<String>) -> Self {
        SdpLine::Attribute {
            name: name.into(),
            value: None,
        }
    }

    /// Attribute name if this is an `a=` line
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            SdpLine::Attribute { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for SdpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdpLine::Version(version) => write!(f, "v={}", version),
            SdpLine::Origin {
                username,
                session_id,
                session_version,
                net_type,
                addr_type,
                address,
            } => write!(
                f,
                "o={} {} {} {} {} {}",
                username, session_id, session_version, net_type, addr_type, address
            ),
            SdpLine::SessionName(name) => write!(f, "s={}", name),
            SdpLine::Timing { start, stop } => write!(f, "t={} {}", start, stop),
            SdpLine::Media {
                media,
                port,
                protocol,
                formats,
            } => {
                write!(f, "m={} {} {}", media, port, protocol)?;
                for format in formats {
                    write!(f, " {}", format)?;
                }
                Ok(())
            }
            SdpLine::Connection {
                net_type,
                addr_type,
                address,
            } => write!(f, "c={} {} {}", net_type, addr_type, address),
            SdpLine::Attribute { name, value: None } => write!(f, "a={}", name),
            SdpLine::Attribute {
                name,
                value: Some(value),
            } => write!(f, "a={}:{}", name, value),
        }
    }
}

/// Ordered SDP document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdpDocument {
    lines: Vec<SdpLine>,
}

impl SdpDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn push(&mut self, line: SdpLine) {
        self.lines.push(line);
    }

    /// Append a whole section, keeping its order
    pub fn append(&mut self, section: impl IntoIterator<Item = SdpLine>) {
        self.lines.extend(section);
    }

    pub fn lines(&self) -> &[SdpLine] {
        &self.lines
    }

    /// Every `a=<name>` line, in document order
    pub fn attributes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SdpLine> + 'a {
        self.lines
            .iter()
            .filter(move |line| line.attribute_name() == Some(name))
    }
}

impl fmt::Display for SdpDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            write!(f, "{}\r\n", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_rendering() {
        assert_eq!(SdpLine::Version(0).to_string(), "v=0");
        assert_eq!(SdpLine::Timing { start: 0, stop: 0 }.to_string(), "t=0 0");
        assert_eq!(
            SdpLine::Media {
                media: "audio".to_string(),
                port: 1,
                protocol: "RTP/SAVPF".to_string(),
                formats: vec![111, 126],
            }
            .to_string(),
            "m=audio 1 RTP/SAVPF 111 126"
        );
        assert_eq!(SdpLine::property("rtcp-mux").to_string(), "a=rtcp-mux");
        assert_eq!(SdpLine::attribute("mid", "0").to_string(), "a=mid:0");
    }

    #[test]
    fn test_origin_rendering() {
        let origin = SdpLine::Origin {
            username: "-".to_string(),
            session_id: 1700000000000,
            session_version: 2,
            net_type: "IN".to_string(),
            addr_type: "IP4".to_string(),
            address: "0.0.0.0".to_string(),
        };
        assert_eq!(origin.to_string(), "o=- 1700000000000 2 IN IP4 0.0.0.0");
    }

    #[test]
    fn test_document_keeps_order_and_terminates_lines() {
        let mut doc = SdpDocument::new();
        doc.push(SdpLine::Version(0));
        doc.append([SdpLine::SessionName("-".to_string()), SdpLine::property("ice-lite")]);

        assert_eq!(doc.to_string(), "v=0\r\ns=-\r\na=ice-lite\r\n");
        assert_eq!(doc.lines().len(), 3);
        assert_eq!(doc.attributes("ice-lite").count(), 1);
        assert_eq!(doc.attributes("mid").count(), 0);
    }
}
