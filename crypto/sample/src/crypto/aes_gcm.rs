use aes_gcm::{
    Aes128Gcm, Nonce, Tag,
    aead::{AeadInPlace, KeyInit},
};
use zeroize::{Zeroize, Zeroizing};

use sample_crypto_core::{AESGCM_IV_SIZE, AesGcmKey, AesGcmTag};

use crate::error::{CryptoError, CryptoResult, check_u32_len};

/**
    Shared argument checks for both directions.

    The IV must be exactly 96 bits, and at least one of `src` and `aad` must be
    non-empty: a call with nothing to encrypt and nothing to authenticate is
    rejected as a caller mistake.
*/
fn check_params(src: &[u8], iv: &[u8], aad: &[u8]) -> CryptoResult<()> {
    if iv.len() != AESGCM_IV_SIZE {
        return Err(CryptoError::InvalidIvLength(iv.len()));
    }
    if src.is_empty() && aad.is_empty() {
        return Err(CryptoError::InvalidParameter(
            "both source and AAD are empty",
        ));
    }
    check_u32_len("source", src.len())?;
    check_u32_len("AAD", aad.len())?;
    Ok(())
}

fn check_dst(src: &[u8], dst: &[u8]) -> CryptoResult<()> {
    if dst.len() < src.len() {
        return Err(CryptoError::BufferTooSmall {
            needed: src.len(),
            available: dst.len(),
        });
    }
    Ok(())
}

/**
    AES-128-GCM encryption into a caller-provided buffer.

    Key: 16 bytes. IV: must be 12 bytes. AAD: may be empty.
    Output: the first `src.len()` bytes of `dst` receive the ciphertext; the
    128-bit tag is returned. `dst` shorter than `src` is an invalid parameter.
*/
pub fn rijndael128_gcm_encrypt_into(
    key: &AesGcmKey,
    src: &[u8],
    dst: &mut [u8],
    iv: &[u8],
    aad: &[u8],
) -> CryptoResult<AesGcmTag> {
    check_params(src, iv, aad)?;
    check_dst(src, dst)?;

    let out = &mut dst[..src.len()];
    out.copy_from_slice(src);

    let cipher = Aes128Gcm::new(key.as_bytes().into());
    match cipher.encrypt_in_place_detached(Nonce::from_slice(iv), aad, out) {
        Ok(tag) => {
            log::trace!("AES-GCM encrypted {} bytes, {} AAD bytes", src.len(), aad.len());
            Ok(AesGcmTag::from_bytes(tag.into()))
        }
        Err(_) => {
            out.zeroize();
            Err(CryptoError::AesGcm)
        }
    }
}

/**
    AES-128-GCM encryption returning a freshly allocated ciphertext.

    The ciphertext is exactly as long as `src`. Failure to allocate the output
    is reported as out-of-memory.
*/
pub fn rijndael128_gcm_encrypt(
    key: &AesGcmKey,
    src: &[u8],
    iv: &[u8],
    aad: &[u8],
) -> CryptoResult<(Vec<u8>, AesGcmTag)> {
    check_params(src, iv, aad)?;

    let mut out = Vec::new();
    out.try_reserve_exact(src.len())?;
    out.resize(src.len(), 0);

    let tag = rijndael128_gcm_encrypt_into(key, src, &mut out, iv, aad)?;
    Ok((out, tag))
}

/**
    AES-128-GCM decryption into a caller-provided buffer, verifying `tag`.

    On a tag mismatch the output region of `dst` is zeroed and
    [`CryptoError::MacMismatch`] is returned; no plaintext is released.
*/
pub fn rijndael128_gcm_decrypt_into(
    key: &AesGcmKey,
    src: &[u8],
    dst: &mut [u8],
    iv: &[u8],
    aad: &[u8],
    tag: &AesGcmTag,
) -> CryptoResult<()> {
    check_params(src, iv, aad)?;
    check_dst(src, dst)?;

    let out = &mut dst[..src.len()];
    out.copy_from_slice(src);

    let cipher = Aes128Gcm::new(key.as_bytes().into());
    let tag = Tag::from_slice(tag.as_bytes());
    if cipher
        .decrypt_in_place_detached(Nonce::from_slice(iv), aad, out, tag)
        .is_err()
    {
        out.zeroize();
        log::debug!("AES-GCM tag mismatch over {} bytes", src.len());
        return Err(CryptoError::MacMismatch);
    }
    Ok(())
}

/**
    AES-128-GCM decryption returning the plaintext, verifying `tag`.
*/
pub fn rijndael128_gcm_decrypt(
    key: &AesGcmKey,
    src: &[u8],
    iv: &[u8],
    aad: &[u8],
    tag: &AesGcmTag,
) -> CryptoResult<Vec<u8>> {
    check_params(src, iv, aad)?;

    let mut out = Zeroizing::new(Vec::new());
    out.try_reserve_exact(src.len())?;
    out.resize(src.len(), 0);

    rijndael128_gcm_decrypt_into(key, src, &mut out, iv, aad, tag)?;
    Ok(std::mem::take(&mut *out))
}
