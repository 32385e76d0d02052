mod cbc;

use std::fmt;

use rand::RngCore;

/// The closed set of benchmarked cipher variants. Each carries its fixed
/// key and block size; CBC chaining and key/IV validation live in `cbc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Aes128,
    Aes256,
    Des,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Aes128, Algorithm::Aes256, Algorithm::Des];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Aes128 => "AES-128",
            Algorithm::Aes256 => "AES-256",
            Algorithm::Des => "DES",
        }
    }

    pub fn key_size(&self) -> usize {
        match self {
            Algorithm::Aes128 => 16,
            Algorithm::Aes256 => 32,
            Algorithm::Des => 8,
        }
    }

    pub fn block_size(&self) -> usize {
        match self {
            Algorithm::Aes128 | Algorithm::Aes256 => 16,
            Algorithm::Des => 8,
        }
    }

    /// Fresh random key and IV of this variant's sizes. Benchmark-strength
    /// randomness; the material is dropped after the integrity check.
    pub fn generate_key_iv(&self) -> (Vec<u8>, Vec<u8>) {
        let mut key = vec![0u8; self.key_size()];
        let mut iv = vec![0u8; self.block_size()];
        rand::thread_rng().fill_bytes(&mut key);
        rand::thread_rng().fill_bytes(&mut iv);
        (key, iv)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
