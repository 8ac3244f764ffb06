use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::algorithm::Algorithm;
use crate::digest::{Digest, VerifyingDigest};
use crate::error::DigestError;

pub const DELIMITER: char = ';';

/// Several acceptable digests for the same content.
///
/// Entries keep their first-seen order and duplicates are dropped; two
/// entries are duplicates when their algorithms match and their hex values
/// differ only in case.
///
/// Verification is permissive: an actual digest passes if it matches the
/// entry for *its* algorithm, even when a stronger algorithm is also listed.
/// Callers that want the strongest check should hash with
/// [`MultipleDigest::preferred_algorithm`] before calling `verify`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipleDigest {
    digests: Vec<Digest>,
}

impl MultipleDigest {
    pub fn new(digests: Vec<Digest>) -> Self {
        let mut unique: Vec<Digest> = Vec::with_capacity(digests.len());
        for digest in digests {
            if !unique.iter().any(|seen| seen.matches(&digest)) {
                unique.push(digest);
            }
        }
        Self { digests: unique }
    }

    /// Parse with the default [`MultipleDigestParser`].
    pub fn from_string(s: &str) -> Result<Self, DigestError> {
        MultipleDigestParser::default().parse(s)
    }

    pub fn digests(&self) -> &[Digest] {
        &self.digests
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Algorithms in entry order; may repeat if one algorithm has several values.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.digests.iter().map(Digest::algorithm).collect()
    }

    /// First entry using `algorithm`.
    pub fn digest_for(&self, algorithm: Algorithm) -> Option<&Digest> {
        self.digests.iter().find(|d| d.algorithm() == algorithm)
    }

    /// Entry with the strongest algorithm, first one on ties.
    pub fn strongest(&self) -> Result<&Digest, DigestError> {
        self.digests
            .iter()
            .min_by_key(|d| Reverse(d.algorithm().strength()))
            .ok_or(DigestError::NoDigestsProvided)
    }

    pub fn preferred_algorithm(&self) -> Result<Algorithm, DigestError> {
        self.strongest().map(Digest::algorithm)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Digest> {
        self.digests.iter()
    }

    fn available_algorithms(&self) -> String {
        self.digests
            .iter()
            .map(|d| d.algorithm().name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl VerifyingDigest for MultipleDigest {
    fn verify(&self, actual: &Digest) -> Result<(), DigestError> {
        if self.digests.is_empty() {
            return Err(DigestError::NoDigestsProvided);
        }

        match self.digest_for(actual.algorithm()) {
            Some(expected) => expected.verify(actual),
            None => {
                tracing::debug!(
                    algorithm = %actual.algorithm(),
                    available = %self.available_algorithms(),
                    "no expected digest shares the actual algorithm"
                );
                Err(DigestError::NoDigestAlgorithmOverlap {
                    algorithm: actual.algorithm(),
                    available: self.available_algorithms(),
                })
            }
        }
    }
}

impl From<Digest> for MultipleDigest {
    fn from(digest: Digest) -> Self {
        Self {
            digests: vec![digest],
        }
    }
}

impl<'a> IntoIterator for &'a MultipleDigest {
    type Item = &'a Digest;
    type IntoIter = std::slice::Iter<'a, Digest>;

    fn into_iter(self) -> Self::IntoIter {
        self.digests.iter()
    }
}

impl FromStr for MultipleDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for MultipleDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digest) in self.digests.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", digest)?;
        }
        Ok(())
    }
}

impl Serialize for MultipleDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MultipleDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        // An empty set serializes to "", so accept it back.
        MultipleDigestParser::new()
            .with_allow_empty(true)
            .parse(&s)
            .map_err(serde::de::Error::custom)
    }
}

/// Parser settings for `;`-delimited digest lists.
#[derive(Debug, Clone)]
pub struct MultipleDigestParser {
    pub allow_empty: bool,
    pub default_algorithm: Algorithm,
}

impl Default for MultipleDigestParser {
    fn default() -> Self {
        Self {
            allow_empty: false,
            default_algorithm: Algorithm::DEFAULT,
        }
    }
}

impl MultipleDigestParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept inputs with no entries (`""`, `";;"`) as an empty set.
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Algorithm assumed for entries without a prefix.
    pub fn with_default_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.default_algorithm = algorithm;
        self
    }

    pub fn parse(&self, s: &str) -> Result<MultipleDigest, DigestError> {
        let digests = s
            .split(DELIMITER)
            .filter(|segment| !segment.is_empty())
            .map(|segment| Digest::parse_with_default(segment, self.default_algorithm))
            .collect::<Result<Vec<_>, _>>()?;

        if digests.is_empty() && !self.allow_empty {
            return Err(DigestError::NoDigestsProvided);
        }

        let multiple = MultipleDigest::new(digests);
        tracing::trace!(entries = multiple.len(), "parsed multiple digest");
        Ok(multiple)
    }
}
