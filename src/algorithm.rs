use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::digest::Digest;
use crate::error::DigestError;
use crate::hash::Hasher;

/// Supported digest algorithms, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, weakest first. Error messages list names in this order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];

    /// Algorithm assumed for digest strings that carry no `<algorithm>:` prefix.
    pub const DEFAULT: Algorithm = Algorithm::Sha1;

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Relative strength; a higher rank is preferred.
    pub fn strength(&self) -> u8 {
        match self {
            Algorithm::Sha1 => 1,
            Algorithm::Sha256 => 2,
            Algorithm::Sha512 => 3,
        }
    }

    /// Size of the raw digest in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
        }
    }

    /// Resolve an algorithm by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, DigestError> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DigestError::UnrecognizedAlgorithm(name.to_string()))
    }

    /// Comma separated list of supported names, e.g. `sha1, sha256, sha512`.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(Algorithm::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Start a fresh incremental hash for this algorithm.
    pub fn hasher(&self) -> Hasher {
        Hasher::new(*self)
    }

    /// Hash an in-memory buffer in one go.
    pub fn digest(&self, data: &[u8]) -> Digest {
        let mut hasher = self.hasher();
        hasher.update(data);
        hasher.finalize_digest()
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
