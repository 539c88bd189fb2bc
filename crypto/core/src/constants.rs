use hex_literal::hex;

/**
    AES-GCM key size in bytes (128 bits).
*/
pub const AESGCM_KEY_SIZE: usize = 16;

/**
    AES-GCM IV size in bytes (96 bits). No other IV length is accepted.
*/
pub const AESGCM_IV_SIZE: usize = 12;

/**
    AES-GCM authentication tag size in bytes (128 bits).
*/
pub const AESGCM_MAC_SIZE: usize = 16;

pub const CMAC_KEY_SIZE: usize = 16;
pub const CMAC_MAC_SIZE: usize = 16;

/**
    Size of a P-256 scalar or affine coordinate in bytes.
*/
pub const ECP256_KEY_SIZE: usize = 32;

pub const SHA256_HASH_SIZE: usize = 32;

/**
    Order `n` of the NIST P-256 base point, big-endian:
    `ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551`
*/
pub const NISTP256_ORDER: [u8; 32] = hex!(
    "ffffffff00000000ffffffffffffffff"
    "bce6faada7179e84f3b9cac2fc632551"
);

/**
    The same group order as little-endian 32-bit limbs, least significant first.
*/
pub const NISTP256_ORDER_LIMBS: [u32; 8] = [
    0xFC632551, 0xF3B9CAC2, 0xA7179E84, 0xBCE6FAAD, 0xFFFFFFFF, 0xFFFFFFFF, 0x00000000, 0xFFFFFFFF,
];

/**
    Seed word repeated by the deterministic debug generator.
*/
pub const DEFAULT_DEBUG_SEED: u32 = 9;
