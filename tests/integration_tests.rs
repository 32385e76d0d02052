use cbc_benchmarks::algorithms::Algorithm;
use cbc_benchmarks::padding::{pkcs7_pad, pkcs7_unpad};
use cbc_benchmarks::BenchError;

#[test]
fn test_full_cbc_workflow() {
    let algorithm = Algorithm::Aes256;
    let (key, iv) = algorithm.generate_key_iv();
    assert_eq!(key.len(), 32, "Key length should be 32 bytes for AES-256");
    assert_eq!(iv.len(), 16, "IV length should be one AES block");

    // Test data (exactly 48 bytes - 3 AES blocks before padding)
    let original_data = b"This is a test message for AES-256 encrypt!!!!!!";
    assert_eq!(original_data.len(), 48, "Test data should be 48 bytes");

    let padded = pkcs7_pad(original_data, algorithm.block_size());
    assert_eq!(padded.len(), 64, "Aligned input gains a full padding block");

    let encrypted = algorithm
        .encrypt_cbc(&padded, &key, &iv)
        .expect("Failed to encrypt");
    assert_ne!(encrypted, padded);
    assert_eq!(encrypted.len() % 16, 0);

    let decrypted = algorithm
        .decrypt_cbc(&encrypted, &key, &iv)
        .expect("Failed to decrypt");
    let recovered = pkcs7_unpad(&decrypted, algorithm.block_size()).expect("Failed to unpad");
    assert_eq!(recovered, original_data);
}

#[test]
fn test_round_trip_all_algorithms() {
    for algorithm in Algorithm::ALL {
        // Lengths around the block boundary
        let test_cases = vec![
            b"1".to_vec(),
            b"12345678".to_vec(),
            vec![0xAB; algorithm.block_size()],
            vec![0xCD; algorithm.block_size() + 1],
            vec![0xEF; 3 * algorithm.block_size() - 1],
        ];

        for original in test_cases {
            let (key, iv) = algorithm.generate_key_iv();
            let padded = pkcs7_pad(&original, algorithm.block_size());
            assert_eq!(padded.len() % algorithm.block_size(), 0);

            let ciphertext = algorithm
                .encrypt_cbc(&padded, &key, &iv)
                .expect("Failed to encrypt");
            let decrypted = algorithm
                .decrypt_cbc(&ciphertext, &key, &iv)
                .expect("Failed to decrypt");
            let recovered =
                pkcs7_unpad(&decrypted, algorithm.block_size()).expect("Failed to unpad");
            assert_eq!(
                recovered, original,
                "{} round trip should match the original",
                algorithm
            );
        }
    }
}

#[test]
fn test_large_data_round_trip() {
    use rand::RngCore;

    let mut original = vec![0u8; 1_048_576];
    rand::thread_rng().fill_bytes(&mut original);

    for algorithm in Algorithm::ALL {
        let (key, iv) = algorithm.generate_key_iv();
        let padded = pkcs7_pad(&original, algorithm.block_size());
        let ciphertext = algorithm
            .encrypt_cbc(&padded, &key, &iv)
            .expect("Failed to encrypt");
        let decrypted = algorithm
            .decrypt_cbc(&ciphertext, &key, &iv)
            .expect("Failed to decrypt");
        let recovered = pkcs7_unpad(&decrypted, algorithm.block_size()).expect("Failed to unpad");
        assert_eq!(recovered, original, "{} 1MB round trip", algorithm);
    }
}

#[test]
fn test_pad_adds_full_block_when_aligned() {
    let data = vec![0x42; 32];
    let padded = pkcs7_pad(&data, 16);
    assert_eq!(padded.len(), 48);
    assert!(padded[32..].iter().all(|&b| b == 16));
}

#[test]
fn test_pad_counts_match_added_bytes() {
    for len in 0..=24usize {
        let data = vec![0x13; len];
        let padded = pkcs7_pad(&data, 8);
        let pad_len = padded.len() - len;
        assert!(pad_len >= 1 && pad_len <= 8);
        assert_eq!(padded.len() % 8, 0);
        assert!(padded[len..].iter().all(|&b| b == pad_len as u8));
    }
}

#[test]
fn test_unpad_rejects_zero_count() {
    let buf = vec![0u8; 16];
    let err = pkcs7_unpad(&buf, 16).unwrap_err();
    assert!(matches!(err, BenchError::Padding(_)));
}

#[test]
fn test_unpad_rejects_count_above_block_size() {
    let mut buf = vec![1u8; 16];
    buf[15] = 17;
    let err = pkcs7_unpad(&buf, 16).unwrap_err();
    assert!(matches!(err, BenchError::Padding(_)));
}

#[test]
fn test_unpad_rejects_inconsistent_trailer() {
    let mut buf = vec![7u8; 16];
    buf[15] = 3;
    buf[14] = 3;
    buf[13] = 1;
    let err = pkcs7_unpad(&buf, 16).unwrap_err();
    assert!(matches!(err, BenchError::Padding(_)));
}

#[test]
fn test_unpad_rejects_unaligned_input() {
    let buf = vec![2u8; 7];
    let err = pkcs7_unpad(&buf, 8).unwrap_err();
    assert!(matches!(err, BenchError::Padding(_)));

    let err = pkcs7_unpad(&[], 8).unwrap_err();
    assert!(matches!(err, BenchError::Padding(_)));
}

#[test]
fn test_key_and_iv_lengths_validated() {
    for algorithm in Algorithm::ALL {
        let block = vec![0u8; algorithm.block_size()];
        let (key, iv) = algorithm.generate_key_iv();

        let short_key = vec![0u8; algorithm.key_size() - 1];
        let err = algorithm.encrypt_cbc(&block, &short_key, &iv).unwrap_err();
        assert!(matches!(err, BenchError::InvalidKeyOrIv(_)));

        let long_iv = vec![0u8; algorithm.block_size() + 1];
        let err = algorithm.encrypt_cbc(&block, &key, &long_iv).unwrap_err();
        assert!(matches!(err, BenchError::InvalidKeyOrIv(_)));

        let unaligned = vec![0u8; algorithm.block_size() + 1];
        let err = algorithm.decrypt_cbc(&unaligned, &key, &iv).unwrap_err();
        assert!(matches!(err, BenchError::InvalidKeyOrIv(_)));
    }
}

#[test]
fn test_corrupted_ciphertext_breaks_round_trip() {
    for algorithm in Algorithm::ALL {
        let original = vec![0x5A; 1000];
        let (key, iv) = algorithm.generate_key_iv();
        let padded = pkcs7_pad(&original, algorithm.block_size());
        let mut ciphertext = algorithm
            .encrypt_cbc(&padded, &key, &iv)
            .expect("Failed to encrypt");

        ciphertext[0] ^= 1;

        let recovered = algorithm
            .decrypt_cbc(&ciphertext, &key, &iv)
            .and_then(|decrypted| pkcs7_unpad(&decrypted, algorithm.block_size()));
        match recovered {
            Ok(plaintext) => assert_ne!(
                plaintext, original,
                "{} must not silently recover the original from tampered ciphertext",
                algorithm
            ),
            Err(BenchError::Padding(_)) => {}
            Err(err) => panic!("unexpected error kind: {}", err),
        }
    }
}
