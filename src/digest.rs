use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::algorithm::Algorithm;
use crate::error::DigestError;

/// Something an actual digest can be checked against.
///
/// Implemented by [`Digest`] (one expected value) and
/// [`MultipleDigest`](crate::MultipleDigest) (any of several).
pub trait VerifyingDigest {
    fn verify(&self, actual: &Digest) -> Result<(), DigestError>;
}

/// A single `(algorithm, hex value)` pair.
///
/// The value is kept exactly as supplied. Equality is structural; use
/// [`Digest::verify`] for the case-insensitive comparison of hex values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    value: String,
}

impl Digest {
    pub fn new(algorithm: Algorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm,
            value: value.into(),
        }
    }

    /// Construct from an algorithm name, e.g. `Digest::with_name("sha1", hex)`.
    pub fn with_name(name: &str, value: impl Into<String>) -> Result<Self, DigestError> {
        Ok(Self::new(Algorithm::from_name(name)?, value))
    }

    /// Hex-encode raw digest bytes.
    pub fn from_bytes(algorithm: Algorithm, bytes: &[u8]) -> Self {
        Self::new(algorithm, hex::encode(bytes))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decode the hex value back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DigestError> {
        Ok(hex::decode(&self.value)?)
    }

    /// Parse `<algorithm>:<hex>` or a bare `<hex>` (assumed sha1).
    pub fn from_string(s: &str) -> Result<Self, DigestError> {
        Self::parse_with_default(s, Algorithm::DEFAULT)
    }

    pub(crate) fn parse_with_default(s: &str, default: Algorithm) -> Result<Self, DigestError> {
        let Some((prefix, value)) = s.split_once(':') else {
            if s.is_empty() {
                return Err(DigestError::InvalidFormat("empty digest value".to_string()));
            }
            tracing::trace!(algorithm = %default, "digest has no algorithm prefix");
            return Ok(Self::new(default, s));
        };

        let algorithm = Algorithm::from_name(prefix)?;
        if value.is_empty() {
            return Err(DigestError::InvalidFormat(format!(
                "missing digest value after '{}:'",
                prefix
            )));
        }

        Ok(Self::new(algorithm, value))
    }

    /// Same algorithm and same hex value, ignoring ASCII case.
    pub fn matches(&self, other: &Digest) -> bool {
        self.algorithm == other.algorithm && self.value.eq_ignore_ascii_case(&other.value)
    }
}

impl VerifyingDigest for Digest {
    fn verify(&self, actual: &Digest) -> Result<(), DigestError> {
        if self.matches(actual) {
            return Ok(());
        }

        tracing::debug!(expected = %self, actual = %actual, "digest mismatch");
        Err(DigestError::DigestMismatch {
            expected: self.to_string(),
            actual: actual.to_string(),
        })
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.value)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}
