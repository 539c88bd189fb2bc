use core::fmt;
use core::str::FromStr;

use sample_crypto_core::{
    CmacKey, DerivedKey, Ec256DhShared, ParseError, eq_ignore_ascii_case, trim_ascii,
};

use super::cmac::rijndael128_cmac_secret;
use crate::error::CryptoResult;

/**
    Label of a key in the attestation key schedule.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyLabel {
    /** Session MAC key: authenticates the key-exchange messages. */
    Smk,
    /** Session key: encrypts application secrets. */
    Sk,
    /** MAC key: authenticates application messages. */
    Mk,
    /** Verification key: bound into the attestation report data. */
    Vk,
}

impl KeyLabel {
    pub const ALL: [Self; 4] = [Self::Smk, Self::Sk, Self::Mk, Self::Vk];

    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            3 if eq_ignore_ascii_case(name, b"smk") => Some(Self::Smk),
            2 if eq_ignore_ascii_case(name, b"sk") => Some(Self::Sk),
            2 if eq_ignore_ascii_case(name, b"mk") => Some(Self::Mk),
            2 if eq_ignore_ascii_case(name, b"vk") => Some(Self::Vk),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Smk => "SMK",
            Self::Sk => "SK",
            Self::Mk => "MK",
            Self::Vk => "VK",
        }
    }
}

impl fmt::Display for KeyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for KeyLabel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "key label",
            value: s.to_owned(),
        })
    }
}

/**
    The four keys derived from one shared secret.
*/
#[derive(Debug, Clone)]
pub struct SessionKeys {
    pub smk: DerivedKey,
    pub sk: DerivedKey,
    pub mk: DerivedKey,
    pub vk: DerivedKey,
}

/**
    Key-derivation key: `KDK = CMAC(0^128, shared)`.
    The shared secret is MACed in its little-endian boundary form.
*/
pub fn derive_kdk(shared: &Ec256DhShared) -> CryptoResult<CmacKey> {
    let zero = CmacKey::from_bytes([0u8; 16]);
    let kdk = rijndael128_cmac_secret(&zero, shared.as_le())?;
    Ok(CmacKey::from_bytes(*kdk))
}

/**
    Derive one key from the shared secret.

      key = CMAC(KDK, 0x01 || label || 0x00 || 0x80 0x00)

    The trailing `0x80 0x00` is the 128-bit output length, little-endian.
*/
pub fn derive_key(shared: &Ec256DhShared, label: KeyLabel) -> CryptoResult<DerivedKey> {
    let kdk = derive_kdk(shared)?;
    derive_with_kdk(&kdk, label)
}

/**
    Derive SMK, SK, MK and VK in one pass, computing the KDK once.
*/
pub fn derive_all(shared: &Ec256DhShared) -> CryptoResult<SessionKeys> {
    let kdk = derive_kdk(shared)?;
    Ok(SessionKeys {
        smk: derive_with_kdk(&kdk, KeyLabel::Smk)?,
        sk: derive_with_kdk(&kdk, KeyLabel::Sk)?,
        mk: derive_with_kdk(&kdk, KeyLabel::Mk)?,
        vk: derive_with_kdk(&kdk, KeyLabel::Vk)?,
    })
}

fn derive_with_kdk(kdk: &CmacKey, label: KeyLabel) -> CryptoResult<DerivedKey> {
    let buffer = build_derivation_buffer(label);
    let key = rijndael128_cmac_secret(kdk, &buffer)?;
    log::trace!("derived {label}");
    Ok(DerivedKey::from_bytes(*key))
}

/**
    Returns: 0x01 || label || 0x00 || [0x80, 0x00]
*/
fn build_derivation_buffer(label: KeyLabel) -> Vec<u8> {
    let label = label.to_name().as_bytes();
    let trailer = [0x00, 0x80, 0x00];
    let mut out = Vec::with_capacity(1 + label.len() + trailer.len());
    out.push(0x01);
    out.extend_from_slice(label);
    out.extend_from_slice(&trailer);
    out
}
