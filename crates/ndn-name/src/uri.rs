//! URI text codec for components.
//!
//! A component renders as its percent-escaped value, prefixed by
//! `<decimal type>=` unless it is GENERIC. The two digest types use the
//! `sha256digest=` and `params-sha256=` aliases with a hex value instead.
//! Bytes outside `[A-Za-z0-9-._~]` are escaped as `%xx`.

use std::fmt;
use std::str::FromStr;

use crate::component::{types, Component, ComponentKind};
use crate::error::{NameError, Result};
use crate::options::{HexCase, UriOptions};

/// Text alias for implicit SHA-256 digest components.
pub const IMPLICIT_SHA256_PREFIX: &str = "sha256digest=";
/// Text alias for parameters SHA-256 digest components.
pub const PARAMETERS_SHA256_PREFIX: &str = "params-sha256=";

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";
const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Append `value` to `out`, percent-escaping reserved bytes.
pub fn escape_into(out: &mut String, value: &[u8], case: HexCase) {
    let digits = match case {
        HexCase::Lower => LOWER_HEX,
        HexCase::Upper => UPPER_HEX,
    };
    for &b in value {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(digits[(b >> 4) as usize] as char);
            out.push(digits[(b & 0x0F) as usize] as char);
        }
    }
}

/// Percent-decode `text`, a suffix of `segment` (used for error reporting).
fn unescape(segment: &str, text: &str) -> Result<Vec<u8>> {
    let base = segment.len() - text.len();
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let hi = bytes.get(i + 1).copied().and_then(hex_digit);
        let lo = bytes.get(i + 2).copied().and_then(hex_digit);
        match (hi, lo) {
            (Some(hi), Some(lo)) => {
                out.push((hi << 4) | lo);
                i += 3;
            }
            _ => {
                return Err(NameError::InvalidEscape {
                    segment: segment.to_string(),
                    position: base + i,
                })
            }
        }
    }
    Ok(out)
}

fn parse_type(prefix: &str) -> Result<u64> {
    let invalid = || NameError::InvalidTypePrefix {
        prefix: prefix.to_string(),
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    prefix.parse().map_err(|_| invalid())
}

impl Component {
    /// Render with the default options.
    pub fn to_uri(&self) -> String {
        self.to_uri_with(&UriOptions::default())
    }

    /// Render with numeric types and uppercase escapes.
    pub fn to_canonical_uri(&self) -> String {
        self.to_uri_with(&UriOptions::canonical())
    }

    /// Render with explicit options.
    pub fn to_uri_with(&self, options: &UriOptions) -> String {
        let mut out = String::with_capacity(self.value().len() + 8);
        self.write_uri(&mut out, options);
        out
    }

    pub(crate) fn write_uri(&self, out: &mut String, options: &UriOptions) {
        let alias = match self.kind() {
            ComponentKind::ImplicitSha256 => Some(IMPLICIT_SHA256_PREFIX),
            ComponentKind::ParametersSha256 => Some(PARAMETERS_SHA256_PREFIX),
            ComponentKind::Generic
            | ComponentKind::Segment
            | ComponentKind::ByteOffset
            | ComponentKind::Version
            | ComponentKind::Timestamp
            | ComponentKind::SequenceNum
            | ComponentKind::Other(_) => None,
        };

        match alias {
            Some(prefix) if options.digest_aliases => {
                out.push_str(prefix);
                match options.hex_case {
                    HexCase::Lower => out.push_str(&hex::encode(self.value())),
                    HexCase::Upper => out.push_str(&hex::encode_upper(self.value())),
                }
            }
            _ => {
                if self.kind() != ComponentKind::Generic {
                    out.push_str(&self.typ().to_string());
                    out.push('=');
                }
                escape_into(out, self.value(), options.hex_case);
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl FromStr for Component {
    type Err = NameError;

    /// Parse one URI segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndn_name::Component;
    ///
    /// let comp: Component = "foo%25bar".parse().unwrap();
    /// assert_eq!(comp.value(), b"foo%bar");
    /// assert_eq!(comp.to_string(), "foo%25bar");
    ///
    /// assert!("1=2=A".parse::<Component>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        if s.contains('/') {
            return Err(NameError::UnescapedSeparator(s.to_string()));
        }
        if let Some(digest) = s.strip_prefix(IMPLICIT_SHA256_PREFIX) {
            return Self::from_hex(digest, types::IMPLICIT_SHA256);
        }
        if let Some(digest) = s.strip_prefix(PARAMETERS_SHA256_PREFIX) {
            return Self::from_hex(digest, types::PARAMETERS_SHA256);
        }

        let (typ, text) = match s.split_once('=') {
            Some((prefix, rest)) => {
                if rest.contains('=') {
                    return Err(NameError::ExtraSeparator(s.to_string()));
                }
                (parse_type(prefix)?, rest)
            }
            None => (types::GENERIC, s),
        };

        // `...` is the empty-component marker of the older URI scheme.
        if text.len() >= 3 && text.bytes().all(|b| b == b'.') {
            return Err(NameError::UnsupportedSegment(s.to_string()));
        }

        Ok(Self::from_parts(typ, unescape(s, text)?))
    }
}

impl TryFrom<String> for Component {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<&str> for Component {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<Component> for String {
    fn from(component: Component) -> Self {
        component.to_uri()
    }
}
