use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{AESGCM_KEY_SIZE, AESGCM_MAC_SIZE, CMAC_KEY_SIZE, CMAC_MAC_SIZE};
use crate::error::SizeError;
use crate::utils::reversed;

fn check_size(kind: &'static str, expected: usize, actual: usize) -> Result<(), SizeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(SizeError {
            kind,
            expected,
            actual,
        })
    }
}

/**
    Defines a fixed-size byte newtype for non-secret material (tags, digests).
    These are `Copy`, comparable, and print as lowercase hex.
*/
macro_rules! public_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const SIZE: usize = $len;

            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = SizeError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                check_size($kind, $len, bytes.len())?;
                let mut out = [0u8; $len];
                out.copy_from_slice(bytes);
                Ok(Self(out))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }
    };
}

/**
    Defines a fixed-size byte newtype for secret material (keys, shared secrets).
    These are wiped on drop, are not `Copy`, and never print their contents.
*/
macro_rules! secret_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const SIZE: usize = $len;

            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = SizeError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                check_size($kind, $len, bytes.len())?;
                let mut out = [0u8; $len];
                out.copy_from_slice(bytes);
                let value = Self(out);
                out.zeroize();
                Ok(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(<redacted>)"))
            }
        }
    };
}

secret_bytes!(
    /**
        128-bit AES-GCM key.
    */
    AesGcmKey,
    AESGCM_KEY_SIZE,
    "AES-GCM key"
);

public_bytes!(
    /**
        128-bit AES-GCM authentication tag.
    */
    AesGcmTag,
    AESGCM_MAC_SIZE,
    "AES-GCM tag"
);

secret_bytes!(
    /**
        128-bit AES-CMAC key.
    */
    CmacKey,
    CMAC_KEY_SIZE,
    "CMAC key"
);

public_bytes!(
    /**
        128-bit AES-CMAC tag.
    */
    CmacTag,
    CMAC_MAC_SIZE,
    "CMAC tag"
);

secret_bytes!(
    /**
        128-bit key produced by the attestation key schedule (SMK, SK, MK, VK).
    */
    DerivedKey,
    16,
    "derived key"
);

public_bytes!(
    /**
        SHA-256 digest, in the natural digest byte order.
    */
    Sha256Hash,
    32,
    "SHA-256 hash"
);

/**
    P-256 private scalar `r`, little-endian.
*/
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ec256Private {
    r: [u8; 32],
}

impl Ec256Private {
    pub const fn from_le(r: [u8; 32]) -> Self {
        Self { r }
    }

    pub fn from_be(r: &[u8; 32]) -> Self {
        Self { r: reversed(r) }
    }

    pub const fn as_le(&self) -> &[u8; 32] {
        &self.r
    }

    /**
        Big-endian copy of the scalar. The caller owns wiping it.
    */
    pub fn to_be(&self) -> [u8; 32] {
        reversed(&self.r)
    }
}

impl TryFrom<&[u8]> for Ec256Private {
    type Error = SizeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_size("EC private key", 32, bytes.len())?;
        let mut r = [0u8; 32];
        r.copy_from_slice(bytes);
        let key = Self { r };
        r.zeroize();
        Ok(key)
    }
}

impl fmt::Debug for Ec256Private {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ec256Private(<redacted>)")
    }
}

/**
    P-256 public point as affine coordinates, each little-endian.

    The 64-byte serialized form is `gx || gy`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ec256Public {
    pub gx: [u8; 32],
    pub gy: [u8; 32],
}

impl Ec256Public {
    pub const SIZE: usize = 64;

    pub const fn from_le(gx: [u8; 32], gy: [u8; 32]) -> Self {
        Self { gx, gy }
    }

    pub fn from_be(x: &[u8; 32], y: &[u8; 32]) -> Self {
        Self {
            gx: reversed(x),
            gy: reversed(y),
        }
    }

    pub fn to_be(&self) -> ([u8; 32], [u8; 32]) {
        (reversed(&self.gx), reversed(&self.gy))
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.gx);
        out[32..].copy_from_slice(&self.gy);
        out
    }
}

impl TryFrom<&[u8]> for Ec256Public {
    type Error = SizeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_size("EC public key", Self::SIZE, bytes.len())?;
        let mut gx = [0u8; 32];
        let mut gy = [0u8; 32];
        gx.copy_from_slice(&bytes[..32]);
        gy.copy_from_slice(&bytes[32..]);
        Ok(Self { gx, gy })
    }
}

impl fmt::Display for Ec256Public {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

/**
    ECDH shared secret: x-coordinate of the shared point, little-endian.
*/
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ec256DhShared {
    s: [u8; 32],
}

impl Ec256DhShared {
    pub const fn from_le(s: [u8; 32]) -> Self {
        Self { s }
    }

    pub const fn as_le(&self) -> &[u8; 32] {
        &self.s
    }
}

impl fmt::Debug for Ec256DhShared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ec256DhShared(<redacted>)")
    }
}

/**
    ECDSA signature `(r, s)` stored as `x` and `y`, each little-endian.

    The 64-byte serialized form is `x || y`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ec256Signature {
    pub x: [u8; 32],
    pub y: [u8; 32],
}

impl Ec256Signature {
    pub const SIZE: usize = 64;

    pub fn from_be(r: &[u8; 32], s: &[u8; 32]) -> Self {
        Self {
            x: reversed(r),
            y: reversed(s),
        }
    }

    pub fn to_be(&self) -> ([u8; 32], [u8; 32]) {
        (reversed(&self.x), reversed(&self.y))
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.x);
        out[32..].copy_from_slice(&self.y);
        out
    }
}

impl TryFrom<&[u8]> for Ec256Signature {
    type Error = SizeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        check_size("ECDSA signature", Self::SIZE, bytes.len())?;
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[..32]);
        y.copy_from_slice(&bytes[32..]);
        Ok(Self { x, y })
    }
}

impl fmt::Display for Ec256Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}
