//! Path descriptors used as the argument type of every filesystem operation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheme prefix accepted by the local backend
pub const FILE_SCHEME: &str = "file://";

/// A path descriptor, optionally carrying a scheme and host.
///
/// `"hdfs://namenode/data/a"` parses into protocol `"hdfs://"`, host
/// `"namenode"` and name `"/data/a"`. A string without `://` is a plain
/// local path and lands in `name` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uri {
    pub protocol: String,
    pub host: String,
    pub name: String,
}

impl Uri {
    /// Parse a URI string
    pub fn parse(uri: &str) -> Self {
        let Some(pos) = uri.find("://") else {
            return Self::local(uri);
        };

        let split = pos + 3;
        let protocol = uri[..split].to_string();
        let rest = &uri[split..];

        // file:// never carries a host: file:///tmp/x names /tmp/x
        if protocol == FILE_SCHEME {
            return Self {
                protocol,
                host: String::new(),
                name: rest.to_string(),
            };
        }

        match rest.find('/') {
            Some(slash) => Self {
                protocol,
                host: rest[..slash].to_string(),
                name: rest[slash..].to_string(),
            },
            None => Self {
                protocol,
                host: rest.to_string(),
                name: "/".to_string(),
            },
        }
    }

    /// Build a URI from a raw native path without scheme parsing
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            protocol: String::new(),
            host: String::new(),
            name: name.into(),
        }
    }

    /// Full string form: protocol, host and name concatenated
    pub fn str(&self) -> String {
        format!("{}{}{}", self.protocol, self.host, self.name)
    }

    /// True when the local backend can serve this URI
    pub fn is_local(&self) -> bool {
        self.protocol.is_empty() || self.protocol == FILE_SCHEME
    }

    /// Child URI formed by appending `entry` with exactly one separator
    pub fn join(&self, entry: &str) -> Self {
        let mut name = self.name.clone();
        if !ends_with_separator(&name) {
            name.push('/');
        }
        name.push_str(entry);
        Self {
            protocol: self.protocol.clone(),
            host: self.host.clone(),
            name,
        }
    }
}

#[cfg(windows)]
fn ends_with_separator(name: &str) -> bool {
    name.ends_with('/') || name.ends_with('\\')
}

#[cfg(not(windows))]
fn ends_with_separator(name: &str) -> bool {
    name.ends_with('/')
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.protocol, self.host, self.name)
    }
}

impl FromStr for Uri {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}
