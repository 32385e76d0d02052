use aes::{Aes128, Aes256};
use cipher::{
    BlockDecrypt, BlockEncrypt, KeyInit,
    generic_array::GenericArray,
};
use des::Des;

use super::Algorithm;
use crate::{BenchError, Result};

impl Algorithm {
    /// CBC-encrypts `padded`, whose length must already be a multiple of the
    /// block size.
    pub fn encrypt_cbc(&self, padded: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.check_lengths(padded, key, iv)?;
        match self {
            Algorithm::Aes128 => {
                let cipher = Aes128::new_from_slice(key)
                    .map_err(|e| BenchError::InvalidKeyOrIv(e.to_string()))?;
                Ok(chain_encrypt(padded, iv, self.block_size(), |block| {
                    cipher.encrypt_block(GenericArray::from_mut_slice(block))
                }))
            }
            Algorithm::Aes256 => {
                let cipher = Aes256::new_from_slice(key)
                    .map_err(|e| BenchError::InvalidKeyOrIv(e.to_string()))?;
                Ok(chain_encrypt(padded, iv, self.block_size(), |block| {
                    cipher.encrypt_block(GenericArray::from_mut_slice(block))
                }))
            }
            Algorithm::Des => {
                let cipher = Des::new_from_slice(key)
                    .map_err(|e| BenchError::InvalidKeyOrIv(e.to_string()))?;
                Ok(chain_encrypt(padded, iv, self.block_size(), |block| {
                    cipher.encrypt_block(GenericArray::from_mut_slice(block))
                }))
            }
        }
    }

    /// Reverses `encrypt_cbc`. The output still carries its PKCS7 padding.
    pub fn decrypt_cbc(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.check_lengths(ciphertext, key, iv)?;
        match self {
            Algorithm::Aes128 => {
                let cipher = Aes128::new_from_slice(key)
                    .map_err(|e| BenchError::InvalidKeyOrIv(e.to_string()))?;
                Ok(chain_decrypt(ciphertext, iv, self.block_size(), |block| {
                    cipher.decrypt_block(GenericArray::from_mut_slice(block))
                }))
            }
            Algorithm::Aes256 => {
                let cipher = Aes256::new_from_slice(key)
                    .map_err(|e| BenchError::InvalidKeyOrIv(e.to_string()))?;
                Ok(chain_decrypt(ciphertext, iv, self.block_size(), |block| {
                    cipher.decrypt_block(GenericArray::from_mut_slice(block))
                }))
            }
            Algorithm::Des => {
                let cipher = Des::new_from_slice(key)
                    .map_err(|e| BenchError::InvalidKeyOrIv(e.to_string()))?;
                Ok(chain_decrypt(ciphertext, iv, self.block_size(), |block| {
                    cipher.decrypt_block(GenericArray::from_mut_slice(block))
                }))
            }
        }
    }

    fn check_lengths(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<()> {
        if key.len() != self.key_size() {
            return Err(BenchError::InvalidKeyOrIv(format!(
                "{} expects a {}-byte key, got {}",
                self.name(),
                self.key_size(),
                key.len()
            )));
        }
        if iv.len() != self.block_size() {
            return Err(BenchError::InvalidKeyOrIv(format!(
                "{} expects a {}-byte IV, got {}",
                self.name(),
                self.block_size(),
                iv.len()
            )));
        }
        if data.len() % self.block_size() != 0 {
            return Err(BenchError::InvalidKeyOrIv(format!(
                "Input length {} is not a multiple of the {}-byte block size",
                data.len(),
                self.block_size()
            )));
        }
        Ok(())
    }
}

// One chaining loop serves all three variants; each arm above passes its
// cipher's single-block transform in. Encryption is sequential by nature:
// every block is XORed with the previous ciphertext block (IV first) before
// the transform.
fn chain_encrypt<F>(padded: &[u8], iv: &[u8], block_size: usize, mut encrypt_block: F) -> Vec<u8>
where
    F: FnMut(&mut [u8]),
{
    let mut out = padded.to_vec();
    let mut prev = iv.to_vec();
    for block in out.chunks_mut(block_size) {
        for (b, p) in block.iter_mut().zip(prev.iter()) {
            *b ^= p;
        }
        encrypt_block(block);
        prev.copy_from_slice(block);
    }
    out
}

fn chain_decrypt<F>(ciphertext: &[u8], iv: &[u8], block_size: usize, mut decrypt_block: F) -> Vec<u8>
where
    F: FnMut(&mut [u8]),
{
    let mut out = ciphertext.to_vec();
    let mut prev = iv.to_vec();
    for block in out.chunks_mut(block_size) {
        let current = block.to_vec();
        decrypt_block(block);
        for (b, p) in block.iter_mut().zip(prev.iter()) {
            *b ^= p;
        }
        prev = current;
    }
    out
}
