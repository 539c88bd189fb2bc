/*!
    Elliptic-curve operations on NIST P-256 (secp256r1).

    All operations go through an [`EccContext`], which owns the random source
    used for private keys and ECDSA nonces:

    - key-pair generation with a pair-validity check
    - ECDH shared secret (x-coordinate of `d·Q`)
    - ECDSA-SHA256 sign and verify

    Scalars, coordinates and signature components cross the boundary
    little-endian; conversion to the curve library's big-endian encoding
    happens only in this module.
*/
mod context;
mod ecdh;
mod ecdsa;

pub use self::context::EccContext;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{FieldBytes, PublicKey, SecretKey};
use zeroize::{Zeroize, Zeroizing};

use sample_crypto_core::{Ec256Private, Ec256Public};

use crate::error::{CryptoError, CryptoResult};

/**
    Parse a boundary private key, rejecting zero and values `>= n`.
*/
pub(crate) fn secret_key_from(private: &Ec256Private) -> CryptoResult<SecretKey> {
    let be = Zeroizing::new(private.to_be());
    SecretKey::from_bytes(FieldBytes::from_slice(&be[..])).map_err(|_| CryptoError::InvalidPrivateKey)
}

pub(crate) fn private_from_secret_key(key: &SecretKey) -> Ec256Private {
    let mut bytes = key.to_bytes();
    let mut be = Zeroizing::new([0u8; 32]);
    be.copy_from_slice(&bytes);
    bytes.as_mut_slice().zeroize();
    Ec256Private::from_be(&be)
}

/**
    Parse a boundary public key. The point must lie on the curve and must not
    be the identity.
*/
pub(crate) fn public_key_from(public: &Ec256Public) -> CryptoResult<PublicKey> {
    let (x, y) = public.to_be();
    let mut sec1 = [0u8; 65];
    sec1[0] = 0x04;
    sec1[1..33].copy_from_slice(&x);
    sec1[33..].copy_from_slice(&y);
    PublicKey::from_sec1_bytes(&sec1).map_err(|_| CryptoError::InvalidPublicKey)
}

pub(crate) fn public_from_key(key: &PublicKey) -> CryptoResult<Ec256Public> {
    let encoded = key.to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Ok(Ec256Public::from_be(&to_array(x), &to_array(y))),
        _ => Err(CryptoError::EccOperation(
            "public key has no affine coordinates".into(),
        )),
    }
}

pub(crate) fn to_array(bytes: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(bytes);
    out
}
