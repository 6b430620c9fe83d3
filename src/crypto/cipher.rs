//! AES-256 applied to independent 16-byte blocks.
//!
//! There is no chaining, no IV, and no authentication tag: every block is
//! encrypted on its own, so identical plaintext blocks under the same key
//! always produce identical ciphertext blocks. This is the on-disk record
//! format and must stay byte-compatible with existing vaults.
//!
//! Padding is the caller's job. `pad_zero` right-pads with `0x00` up to a
//! block boundary and `strip_zero_padding` removes every trailing `0x00`,
//! which means plaintext that itself ends in zero bytes does not survive a
//! round trip.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

use crate::errors::{Result, SafeZoneError};

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Required key width in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Encrypt `plaintext` block by block with a 32-byte `key`.
///
/// `plaintext` must already be a whole number of blocks.
pub fn encrypt_blocks(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = build_cipher(key)?;
    ensure_aligned(plaintext)?;

    let mut output = plaintext.to_vec();
    for block in output.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
    Ok(output)
}

/// Decrypt data produced by `encrypt_blocks`.
pub fn decrypt_blocks(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = build_cipher(key)?;
    ensure_aligned(ciphertext)?;

    let mut output = ciphertext.to_vec();
    for block in output.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(block));
    }
    Ok(output)
}

/// Right-pad `data` with zero bytes up to the next block boundary.
///
/// Input that is already aligned (including empty input) is returned as is.
pub fn pad_zero(data: &[u8]) -> Vec<u8> {
    let padded_len = data.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(data);
    padded.resize(padded_len, 0);
    padded
}

/// Drop every trailing zero byte.
pub fn strip_zero_padding(mut data: Vec<u8>) -> Vec<u8> {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    data.truncate(end);
    data
}

fn build_cipher(key: &[u8]) -> Result<Aes256> {
    // Check first so a short key never reaches the cipher.
    if key.len() != KEY_LEN {
        return Err(SafeZoneError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }
    Aes256::new_from_slice(key).map_err(|_| SafeZoneError::InvalidKeyLength {
        expected: KEY_LEN,
        actual: key.len(),
    })
}

fn ensure_aligned(data: &[u8]) -> Result<()> {
    if data.len() % BLOCK_SIZE == 0 {
        Ok(())
    } else {
        Err(SafeZoneError::UnalignedInput(data.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_zero_rounds_up_to_block() {
        assert_eq!(pad_zero(b"abc").len(), BLOCK_SIZE);
        assert_eq!(pad_zero(&[1u8; 16]).len(), 16);
        assert_eq!(pad_zero(&[1u8; 17]).len(), 32);
        assert!(pad_zero(b"").is_empty());
    }

    #[test]
    fn strip_zero_padding_removes_only_trailing_zeros() {
        assert_eq!(strip_zero_padding(b"a\0b\0\0\0".to_vec()), b"a\0b".to_vec());
        assert!(strip_zero_padding(vec![0u8; 16]).is_empty());
    }

    #[test]
    fn fips197_known_answer() {
        // FIPS-197 appendix C.3 (AES-256).
        let key: Vec<u8> = (0u8..32).collect();
        let plaintext = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let ciphertext = encrypt_blocks(&key, &plaintext).unwrap();
        assert_eq!(hex::encode(&ciphertext), "8ea2b7ca516745bfeafc49904b496089");
        assert_eq!(decrypt_blocks(&key, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn unaligned_input_is_rejected() {
        let key = [7u8; KEY_LEN];
        assert!(matches!(
            encrypt_blocks(&key, b"short"),
            Err(SafeZoneError::UnalignedInput(5))
        ));
        assert!(matches!(
            decrypt_blocks(&key, &[0u8; 20]),
            Err(SafeZoneError::UnalignedInput(20))
        ));
    }
}
