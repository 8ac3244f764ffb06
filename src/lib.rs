//! Digest parsing and multi-algorithm verification.
//!
//! A digest string is either `<algorithm>:<hex>` or a bare `<hex>` (taken as
//! sha1). Several acceptable digests for one artifact are written as a
//! `;`-separated list:
//!
//! ```
//! use multidigest::{create_hash_from_algorithm, parse_multiple_digest_string, VerifyingDigest};
//!
//! let expected = parse_multiple_digest_string(
//!     "sha1:07e1306432667f916639d47481edc4f2ca456454;\
//!      sha256:b1e66f505465c28d705cf587b041a6506cfe749f7aa4159d8a3f45cc53f1fb23",
//! ).unwrap();
//!
//! let mut hasher = create_hash_from_algorithm(expected.preferred_algorithm().unwrap().name()).unwrap();
//! hasher.update(b"the checksum of c1oudc0w is deterministic");
//! expected.verify(&hasher.finalize_digest()).unwrap();
//! ```

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod hash;
pub mod multiple;

pub use algorithm::Algorithm;
pub use digest::{Digest, VerifyingDigest};
pub use error::{DigestError, Result};
pub use hash::{create_hash_from_algorithm, Hasher};
pub use multiple::{MultipleDigest, MultipleDigestParser};

/// Parse a single digest, `<algorithm>:<hex>` or bare `<hex>` for sha1.
pub fn parse_digest_string(s: &str) -> Result<Digest> {
    Digest::from_string(s)
}

/// Parse a `;`-delimited list of digests with the default parser settings.
///
/// Empty segments are skipped; an input with no entries at all is rejected
/// with [`DigestError::NoDigestsProvided`]. Use [`MultipleDigestParser`] to
/// accept empty lists.
pub fn parse_multiple_digest_string(s: &str) -> Result<MultipleDigest> {
    MultipleDigest::from_string(s)
}

/// Hash `data` with the named algorithm.
pub fn compute_digest(algorithm: &str, data: &[u8]) -> Result<Digest> {
    Ok(Algorithm::from_name(algorithm)?.digest(data))
}

/// Hash `data` with the strongest algorithm in `expected` and verify it.
pub fn verify_content(expected: &MultipleDigest, data: &[u8]) -> Result<()> {
    let actual = expected.preferred_algorithm()?.digest(data);
    expected.verify(&actual)
}
