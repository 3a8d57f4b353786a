//! Zone identity and demand potentials.

use std::borrow::Borrow;
use std::fmt;

/// Grid-cell identifier as supplied by the statistics tables, e.g.
/// `"513204611"`.
///
/// The string is kept verbatim; structural parsing lives in `mf-mesh`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ZoneCode(String);

impl ZoneCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ZoneCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ZoneCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ZoneCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ZoneCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One grid cell with its trip production and attraction potentials.
///
/// Both potentials are non-negative and already unit-converted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub code:       ZoneCode,
    pub production: f64,
    pub attraction: f64,
}

impl Zone {
    pub fn new(code: impl Into<ZoneCode>, production: f64, attraction: f64) -> Self {
        Self { code: code.into(), production, attraction }
    }
}
