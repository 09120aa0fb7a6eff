//! ICE candidate records
//!
//! A [`Candidate`] is written into the answer as
//! `a=candidate:<foundation> <component> <protocol> <priority> <address> <port> typ <type> generation <generation>`
//! (RFC 8839 grammar plus the `generation` extension browsers emit). The same line
//! parses back with [`str::parse`], which checks candidates read from an answer
//! and accepts lines copied from a browser's offer.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One advertised transport path of the remote endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Foundation token
    pub foundation: String,

    /// Component id (1 = RTP)
    #[serde(deserialize_with = "number_or_string")]
    pub component: u32,

    /// Transport protocol, e.g. `udp`
    pub protocol: String,

    /// Candidate priority
    #[serde(deserialize_with = "number_or_string")]
    pub priority: u32,

    /// Connection address; remote payloads may call it `ip`
    #[serde(alias = "ip")]
    pub address: String,

    /// Connection port
    #[serde(deserialize_with = "number_or_string")]
    pub port: u16,

    /// Candidate type, e.g. `host`, `srflx`, `relay`
    #[serde(rename = "type")]
    pub candidate_type: String,

    /// ICE generation
    #[serde(deserialize_with = "number_or_string")]
    pub generation: u32,
}

impl Candidate {
    /// Check that every token can be written into a single candidate line
    pub fn validate(&self) -> Result<()> {
        let tokens = [
            ("foundation", &self.foundation),
            ("protocol", &self.protocol),
            ("address", &self.address),
            ("type", &self.candidate_type),
        ];
        for (name, token) in tokens {
            if token.is_empty() {
                return Err(Error::InvalidCandidate(format!("empty {}", name)));
            }
            if token.chars().any(char::is_whitespace) {
                return Err(Error::InvalidCandidate(format!(
                    "{} contains whitespace: {:?}", name, token
                )));
            }
        }

        if self.component == 0 || self.component > 256 {
            return Err(Error::InvalidCandidate(format!(
                "component out of range: {}", self.component
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} typ {} generation {}",
            self.foundation,
            self.component,
            self.protocol,
            self.priority,
            self.address,
            self.port,
            self.candidate_type,
            self.generation
        )
    }
}

impl FromStr for Candidate {
    type Err = Error;

    /// Parses a candidate value, with or without the `a=candidate:` prefix
    ///
    /// Extensions other than `generation` (`raddr`, `rport`, `network-id`, ...) are
    /// skipped; a missing `generation` reads as 0.
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        let value = value.strip_prefix("a=").unwrap_or(value);
        let value = value.strip_prefix("candidate:").unwrap_or(value);

        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() < 8 {
            return Err(Error::InvalidCandidate(format!(
                "insufficient parts: {}", value
            )));
        }

        let component = parts[1].parse::<u32>().map_err(|_| {
            Error::InvalidCandidate(format!("invalid component id: {}", parts[1]))
        })?;
        let priority = parts[3].parse::<u32>().map_err(|_| {
            Error::InvalidCandidate(format!("invalid priority: {}", parts[3]))
        })?;
        let port = parts[5].parse::<u16>().map_err(|_| {
            Error::InvalidCandidate(format!("invalid port: {}", parts[5]))
        })?;

        if parts[6] != "typ" {
            return Err(Error::InvalidCandidate(format!(
                "expected 'typ' keyword, found: {}", parts[6]
            )));
        }

        let generation = match parts[8..].windows(2).find(|pair| pair[0] == "generation") {
            Some(pair) => pair[1].parse::<u32>().map_err(|_| {
                Error::InvalidCandidate(format!("invalid generation: {}", pair[1]))
            })?,
            None => 0,
        };

        let candidate = Candidate {
            foundation: parts[0].to_string(),
            component,
            protocol: parts[2].to_string(),
            priority,
            address: parts[4].to_string(),
            port,
            candidate_type: parts[7].to_string(),
            generation,
        };
        candidate.validate()?;

        Ok(candidate)
    }
}

/// Remote payloads carry numbers either as JSON numbers or as decimal strings
fn number_or_string<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<N> {
        Number(N),
        String(String),
    }

    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse::<T>().map_err(de::Error::custom),
    }
}
