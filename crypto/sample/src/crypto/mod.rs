/*!
    Symmetric primitives and hashing.

    - AES-128-GCM authenticated encryption (96-bit IV, 128-bit tag)
    - AES-128-CMAC, one-shot and streaming
    - SHA-256, one-shot and streaming
    - The attestation key schedule (KDK, then SMK/SK/MK/VK) built on CMAC
*/

pub mod aes_gcm;
pub mod cmac;
pub mod kdf;
pub mod sha;
