use serde::{Deserialize, Serialize};

/// Letter case of hex digits in percent-escapes and digest values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexCase {
    #[default]
    Lower,
    Upper,
}

/// Options controlling how components and names render as URIs.
///
/// Parsing accepts every rendering these options can produce, so any choice
/// round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriOptions {
    /// Render digest components as `sha256digest=` / `params-sha256=`
    /// instead of `1=` / `2=`.
    pub digest_aliases: bool,
    /// Case of hex digits in escapes and digests.
    pub hex_case: HexCase,
}

impl Default for UriOptions {
    fn default() -> Self {
        Self {
            digest_aliases: true,
            hex_case: HexCase::Lower,
        }
    }
}

impl UriOptions {
    /// Canonical form: numeric types everywhere and uppercase hex, as
    /// forwarder management APIs expect.
    pub const fn canonical() -> Self {
        Self {
            digest_aliases: false,
            hex_case: HexCase::Upper,
        }
    }
}
