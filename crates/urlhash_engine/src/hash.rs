use md5::{Digest, Md5};

pub trait ContentHasher: Send + Sync {
    /// Lowercase hex digest of `bytes`. Never fails, empty input included.
    fn digest(&self, bytes: &[u8]) -> String;
}

/// MD5 content fingerprint. Not used for anything security related.
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5Hasher;

impl ContentHasher for Md5Hasher {
    fn digest(&self, bytes: &[u8]) -> String {
        content_digest(bytes)
    }
}

pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}
