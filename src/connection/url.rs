//! Connection URL parsing
//!
//! Supports formats:
//! * scheme://[user[:password]@]host[:port][,host[:port]...][/path][?query]
//! * scheme:///path/to/socket (Unix socket, no host)
//!
//! Only the pieces the handle needs are extracted: the scheme (checked
//! against the driver), userinfo (for redacted logging) and the host list.
//! The raw string is what the driver parses.

use crate::{Error, Result};
use std::fmt;

/// Parsed connection URL
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUrl {
    raw: String,
    scheme: String,
    username: Option<String>,
    password: Option<String>,
    hosts: Vec<String>,
    path: Option<String>,
    query: Option<String>,
}

/// Validate the optional port of a single `host[:port]` entry
fn validate_host(host: &str) -> Result<()> {
    // IPv6 literals carry colons of their own
    let port = if let Some(rest) = host.strip_prefix('[') {
        let (_, after) = rest
            .split_once(']')
            .ok_or_else(|| Error::Config(format!("unterminated IPv6 host: {}", host)))?;
        if after.is_empty() {
            None
        } else {
            Some(after.strip_prefix(':').ok_or_else(|| {
                Error::Config(format!("unexpected characters after IPv6 host: {}", host))
            })?)
        }
    } else {
        host.rsplit_once(':').map(|(_, port)| port)
    };

    if let Some(port) = port {
        port.parse::<u16>()
            .map_err(|_| Error::Config(format!("invalid port in host: {}", host)))?;
    }
    Ok(())
}

impl ConnectionUrl {
    /// Parse connection URL
    pub fn parse(s: &str) -> Result<Self> {
        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| Error::Config("connection URL must contain a scheme".into()))?;

        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(Error::Config(format!("invalid URL scheme: {:?}", scheme)));
        }

        // Authority ends at the first '/' or '?'
        let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
        let (authority, rest) = rest.split_at(authority_end);

        // Passwords may contain unescaped '@', so split on the last one
        let (userinfo, host_list) = match authority.rfind('@') {
            Some(pos) => (Some(&authority[..pos]), &authority[pos + 1..]),
            None => (None, authority),
        };

        let (username, password) = match userinfo {
            Some(info) => match info.split_once(':') {
                Some((user, pass)) => (Some(user.to_string()), Some(pass.to_string())),
                None => (Some(info.to_string()), None),
            },
            None => (None, None),
        };

        // Split off query string before looking at the path
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        let path = path.trim_start_matches('/');
        let path = if path.is_empty() {
            None
        } else {
            Some(path.to_string())
        };

        let hosts = if host_list.is_empty() {
            Vec::new()
        } else {
            host_list
                .split(',')
                .map(|host| {
                    let host = host.trim();
                    if host.is_empty() {
                        return Err(Error::Config("empty host in host list".into()));
                    }
                    validate_host(host)?;
                    Ok(host.to_string())
                })
                .collect::<Result<Vec<_>>>()?
        };

        if hosts.is_empty() && path.is_none() {
            return Err(Error::Config(
                "connection URL must name a host or a socket path".into(),
            ));
        }

        Ok(Self {
            raw: s.to_string(),
            scheme: scheme.to_ascii_lowercase(),
            username,
            password,
            hosts,
            path,
            query,
        })
    }

    /// Reject URLs whose scheme the driver does not speak
    pub fn check_scheme(&self, accepted: &[&str]) -> Result<()> {
        if accepted.iter().any(|s| s.eq_ignore_ascii_case(&self.scheme)) {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "unsupported URL scheme {:?} (expected one of: {})",
                self.scheme,
                accepted.join(", ")
            )))
        }
    }

    /// The URL exactly as configured, password included
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased scheme
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Username embedded in the URL
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Hosts in the order given
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Path without the leading slash (database name, db index or socket path)
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// URL with the password masked, for logs
    pub fn redacted(&self) -> String {
        let mut out = format!("{}://", self.scheme);
        if let Some(user) = &self.username {
            out.push_str(user);
            if self.password.is_some() {
                out.push_str(":****");
            }
            out.push('@');
        }
        out.push_str(&self.hosts.join(","));
        if let Some(path) = &self.path {
            out.push('/');
            out.push_str(path);
        }
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        out
    }
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUrl")
            .field(&self.redacted())
            .finish()
    }
}
