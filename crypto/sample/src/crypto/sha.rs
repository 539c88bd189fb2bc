use sha2::{Digest, Sha256};

use sample_crypto_core::Sha256Hash;

use crate::error::{CryptoResult, check_u32_len};

/**
    One-shot SHA-256.
*/
pub fn sha256_msg(src: &[u8]) -> Sha256Hash {
    Sha256Hash::from_bytes(Sha256::digest(src).into())
}

/**
    Streaming SHA-256 state.

    [`Sha256State::get_hash`] reads the digest of everything absorbed so far
    without consuming the state, so hashing can continue afterwards.
*/
#[derive(Debug, Clone, Default)]
pub struct Sha256State {
    hasher: Sha256,
}

impl Sha256State {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn update(&mut self, src: &[u8]) -> CryptoResult<()> {
        check_u32_len("hash input", src.len())?;
        self.hasher.update(src);
        Ok(())
    }

    pub fn get_hash(&self) -> Sha256Hash {
        Sha256Hash::from_bytes(self.hasher.clone().finalize().into())
    }

    /**
        Release the state.
    */
    pub fn close(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn fips_180_vectors() {
        assert_eq!(
            sha256_msg(b"").0,
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(
            sha256_msg(b"abc").0,
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut state = Sha256State::init();
        state.update(b"a").unwrap();
        state.update(b"").unwrap();
        state.update(b"bc").unwrap();
        assert_eq!(state.get_hash(), sha256_msg(b"abc"));
        state.close();
    }

    #[test]
    fn get_hash_does_not_consume() {
        let mut state = Sha256State::init();
        state.update(b"ab").unwrap();
        let partial = state.get_hash();
        assert_eq!(partial, sha256_msg(b"ab"));
        state.update(b"c").unwrap();
        assert_eq!(state.get_hash(), sha256_msg(b"abc"));
    }
}
