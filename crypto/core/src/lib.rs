#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod error;
mod status;
mod types;

pub mod utils;

pub use self::constants::{
    AESGCM_IV_SIZE, AESGCM_KEY_SIZE, AESGCM_MAC_SIZE, CMAC_KEY_SIZE, CMAC_MAC_SIZE,
    DEFAULT_DEBUG_SEED, ECP256_KEY_SIZE, NISTP256_ORDER, NISTP256_ORDER_LIMBS, SHA256_HASH_SIZE,
};
pub use self::error::{ParseError, SizeError};
pub use self::status::Status;
pub use self::types::{
    AesGcmKey, AesGcmTag, CmacKey, CmacTag, DerivedKey, Ec256DhShared, Ec256Private,
    Ec256Public, Ec256Signature, Sha256Hash,
};
pub use self::utils::{eq_ignore_ascii_case, reversed, trim_ascii};
