//! URI decomposition: scheme detection, authority split, path/query/fragment.

use serde::{Serialize, Serializer};

/// How a URI names its scheme. The three forms serialize differently:
/// `WithAuthority` restores `proto://`, `Bare` restores `proto:`, and
/// `None` contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    /// No scheme at all (bare relative path or rooted filesystem path).
    None,
    /// `proto://host/...`; an authority section follows the delimiter.
    WithAuthority(String),
    /// `proto:path` with no authority (`lib:util/fs`, and the empty-scheme
    /// form `:util/fs`).
    Bare(String),
}

impl Scheme {
    /// Scheme name without delimiters; `None` when the URI has no scheme.
    pub fn name(&self) -> Option<&str> {
        match self {
            Scheme::None => None,
            Scheme::WithAuthority(p) | Scheme::Bare(p) => Some(p),
        }
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(p) => serializer.serialize_some(p),
            None => serializer.serialize_none(),
        }
    }
}

/// Decomposed URI produced by [`parse`]. Every field is best-effort:
/// malformed input degrades to absent components, never to an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUri {
    pub scheme: Scheme,
    /// Authority with the port, normalized (`ngui.io:81`).
    pub host: Option<String>,
    /// Authority without the port.
    pub hostname: Option<String>,
    pub port: Option<u16>,
    /// Path portion, possibly empty. `zip` archive separators (`@`) are kept
    /// verbatim; splitting archive path from entry path is the consumer's job.
    pub pathname: String,
    /// Query string without the leading `?`.
    pub search: Option<String>,
    /// Fragment without the leading `#`.
    pub hash: Option<String>,
}

impl ParsedUri {
    /// Scheme name, or the empty string for scheme-less URIs.
    pub fn protocol(&self) -> &str {
        self.scheme.name().unwrap_or("")
    }

    /// `protocol://host` when both are present, empty otherwise.
    pub fn origin(&self) -> String {
        match (&self.scheme, &self.host) {
            (Scheme::WithAuthority(p), Some(h)) => format!("{p}://{h}"),
            _ => String::new(),
        }
    }

    /// Reserialize the URI, omitting empty optional parts and their
    /// delimiters.
    pub fn href(&self) -> String {
        let mut out = String::new();
        match &self.scheme {
            Scheme::None => {}
            Scheme::WithAuthority(p) => {
                out.push_str(p);
                out.push_str("://");
                if let Some(h) = &self.host {
                    out.push_str(h);
                }
            }
            Scheme::Bare(p) => {
                out.push_str(p);
                out.push(':');
            }
        }
        out.push_str(&self.pathname);
        if let Some(s) = &self.search {
            if !s.is_empty() {
                out.push('?');
                out.push_str(s);
            }
        }
        if let Some(h) = &self.hash {
            if !h.is_empty() {
                out.push('#');
                out.push_str(h);
            }
        }
        out
    }
}

/// Splits a URI string into its components. Total: any input yields a
/// `ParsedUri`, with unparseable remainders kept in `pathname`.
pub fn parse(uri: &str) -> ParsedUri {
    let (scheme, rest) = split_scheme(uri);

    let (host, rest) = match scheme {
        Scheme::WithAuthority(_) => {
            let end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
            let raw = &rest[..end];
            let host = if raw.is_empty() { None } else { Some(raw) };
            (host, &rest[end..])
        }
        _ => (None, rest),
    };

    let (pathname, search, hash) = split_path_query_fragment(rest);

    let (host, hostname, port) = match host {
        Some(raw) => {
            let (hostname, port) = split_port(raw);
            let host = match port {
                Some(p) => format!("{hostname}:{p}"),
                None => hostname.clone(),
            };
            (Some(host), Some(hostname), port)
        }
        None => (None, None, None),
    };

    ParsedUri {
        scheme,
        host,
        hostname,
        port,
        pathname: pathname.to_string(),
        search: nonempty(search),
        hash: nonempty(hash),
    }
}

fn nonempty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

/// A scheme name is `[A-Za-z][A-Za-z0-9+.-]*`. Single letters are excluded
/// by the caller (Windows drive letters).
fn is_scheme_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
}

fn is_drive_letter(s: &str) -> bool {
    s.len() == 1 && s.as_bytes()[0].is_ascii_alphabetic()
}

fn split_scheme(uri: &str) -> (Scheme, &str) {
    if let Some(idx) = uri.find("://") {
        let proto = &uri[..idx];
        if is_scheme_name(proto) {
            return (Scheme::WithAuthority(proto.to_string()), &uri[idx + 3..]);
        }
    }
    if let Some(idx) = uri.find(':') {
        let proto = &uri[..idx];
        // A single letter before `:` is a Windows drive, not a scheme.
        if (proto.is_empty() || is_scheme_name(proto)) && !is_drive_letter(proto) {
            return (Scheme::Bare(proto.to_string()), &uri[idx + 1..]);
        }
    }
    (Scheme::None, uri)
}

/// Fragment is split off first, so a `?` inside the fragment stays there.
fn split_path_query_fragment(rest: &str) -> (&str, Option<&str>, Option<&str>) {
    let (before_hash, hash) = match rest.split_once('#') {
        Some((b, h)) => (b, Some(h)),
        None => (rest, None),
    };
    let (pathname, search) = match before_hash.split_once('?') {
        Some((p, s)) => (p, Some(s)),
        None => (before_hash, None),
    };
    (pathname, search, hash)
}

/// Splits `host[:port]` on the last `:` that is followed only by digits.
/// A dangling `:` or an out-of-range port degrades to no port.
fn split_port(raw: &str) -> (String, Option<u16>) {
    if let Some(idx) = raw.rfind(':') {
        let digits = &raw[idx + 1..];
        if digits.is_empty() {
            return (raw[..idx].to_string(), None);
        }
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            match digits.parse::<u16>() {
                Ok(port) => return (raw[..idx].to_string(), Some(port)),
                Err(_) => {
                    tracing::debug!("port {digits:?} in {raw:?} not representable, dropping");
                    return (raw[..idx].to_string(), None);
                }
            }
        }
    }
    (raw.to_string(), None)
}
