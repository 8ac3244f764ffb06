use std::io;

use sha1::Sha1;
use sha2::{Digest as _, Sha256, Sha512};

use crate::algorithm::Algorithm;
use crate::digest::Digest;
use crate::error::DigestError;

/// Incremental hash accumulator for one of the supported algorithms.
///
/// Writes take `&mut self` and finalising consumes the hasher, so a single
/// instance is always driven by one writer.
#[derive(Debug, Clone)]
pub enum Hasher {
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl Hasher {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha1 => Hasher::Sha1(Sha1::new()),
            Algorithm::Sha256 => Hasher::Sha256(Sha256::new()),
            Algorithm::Sha512 => Hasher::Sha512(Sha512::new()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Hasher::Sha1(_) => Algorithm::Sha1,
            Hasher::Sha256(_) => Algorithm::Sha256,
            Hasher::Sha512(_) => Algorithm::Sha512,
        }
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        match self {
            Hasher::Sha1(h) => h.update(data),
            Hasher::Sha256(h) => h.update(data),
            Hasher::Sha512(h) => h.update(data),
        }
    }

    /// Raw digest bytes.
    pub fn finalize(self) -> Vec<u8> {
        match self {
            Hasher::Sha1(h) => h.finalize().to_vec(),
            Hasher::Sha256(h) => h.finalize().to_vec(),
            Hasher::Sha512(h) => h.finalize().to_vec(),
        }
    }

    /// Lowercase hex of the digest, comparable against [`Digest::value`].
    pub fn finalize_hex(self) -> String {
        hex::encode(self.finalize())
    }

    pub fn finalize_digest(self) -> Digest {
        let algorithm = self.algorithm();
        Digest::from_bytes(algorithm, &self.finalize())
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Look up an algorithm by name and return a fresh accumulator for it.
pub fn create_hash_from_algorithm(name: &str) -> Result<Hasher, DigestError> {
    let algorithm = Algorithm::from_name(name)?;
    Ok(Hasher::new(algorithm))
}
