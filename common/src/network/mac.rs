use std::fmt;

const OCTETS: usize = 6;

/// A hardware address in colon separated form, e.g. `aa:bb:cc:00:11:22`.
///
/// Letter case and octet order are kept exactly as they were read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Normalizes a hyphen separated token (`aa-bb-cc-00-11-22`) into colon form.
    ///
    /// Returns `None` when the token is not six hyphenated hexadecimal octets.
    pub fn from_hyphenated(token: &str) -> Option<Self> {
        if !is_hyphenated(token) {
            return None;
        }
        Some(Self(token.replace('-', ":")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_hyphenated(token: &str) -> bool {
    let octets: Vec<&str> = token.split('-').collect();
    octets.len() == OCTETS
        && octets
            .iter()
            .all(|octet| octet.len() == 2 && octet.chars().all(|c| c.is_ascii_hexdigit()))
}
