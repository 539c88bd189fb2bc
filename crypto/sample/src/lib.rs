#![allow(clippy::doc_overindented_list_items)]

/*!
    Sample cryptographic provider for remote-attestation debugging.

    Wraps RustCrypto primitives behind a small, stable API with fixed-size
    boundary types and four coarse outcomes ([`Status`]).

    The default `debug-rng` feature provides [`DebugRng`], a generator that is
    deliberately NOT random so attestation messages can be reproduced. Do not
    build a product with it.
*/

mod crypto;
mod ecc;
mod error;
mod rng;

pub mod types {
    pub use sample_crypto_core::*;
}

// Re-export shared boundary types from sample-crypto-core
pub use sample_crypto_core::{
    AesGcmKey, AesGcmTag, CmacKey, CmacTag, DerivedKey, Ec256DhShared, Ec256Private,
    Ec256Public, Ec256Signature, Sha256Hash, Status,
};

pub use self::crypto::aes_gcm::{
    rijndael128_gcm_decrypt, rijndael128_gcm_decrypt_into, rijndael128_gcm_encrypt,
    rijndael128_gcm_encrypt_into,
};
pub use self::crypto::cmac::{CmacState, rijndael128_cmac_msg};
pub use self::crypto::kdf::{
    KeyLabel, SessionKeys, derive_all, derive_kdk, derive_key,
};
pub use self::crypto::sha::{Sha256State, sha256_msg};
pub use self::ecc::EccContext;
pub use self::error::{CryptoError, CryptoResult, status_of};
pub use self::rng::{RandomSource, RngKind, SystemRng};

#[cfg(feature = "debug-rng")]
pub use self::rng::{DebugRng, read_rand};
