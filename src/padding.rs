use crate::{BenchError, Result};

/// Appends PKCS7 padding. Always adds at least one byte; input whose length
/// is already a multiple of the block size gains a full block.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad_len = block_size - (data.len() % block_size);
    let mut padded = data.to_vec();
    padded.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    padded
}

/// Strips PKCS7 padding, verifying the trailing count byte and that every
/// padding byte carries that count.
pub fn pkcs7_unpad(padded: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if padded.is_empty() || padded.len() % block_size != 0 {
        return Err(BenchError::Padding(
            "Input length is not a positive multiple of the block size".to_string(),
        ));
    }

    let pad_len = padded[padded.len() - 1] as usize;
    if pad_len == 0 || pad_len > block_size {
        return Err(BenchError::Padding(format!(
            "Padding count {} out of range for block size {}",
            pad_len, block_size
        )));
    }

    let start = padded.len() - pad_len;
    if !padded[start..].iter().all(|&b| b == pad_len as u8) {
        return Err(BenchError::Padding(
            "Inconsistent trailing padding bytes".to_string(),
        ));
    }

    Ok(padded[..start].to_vec())
}
