use aes::Aes128;
use cmac::digest::generic_array::GenericArray;
use cmac::digest::FixedOutput;
use cmac::{Cmac, Mac};
use zeroize::Zeroizing;

use sample_crypto_core::{CMAC_MAC_SIZE, CmacKey, CmacTag};

use crate::error::{CryptoResult, check_u32_len};

/**
    Single AES-128-CMAC computation (RFC 4493) over the whole of `src`.
    An empty message is allowed.
*/
pub fn rijndael128_cmac_msg(key: &CmacKey, src: &[u8]) -> CryptoResult<CmacTag> {
    let mut state = CmacState::init(key);
    state.update(src)?;
    Ok(state.finalize())
}

/**
    AES-128-CMAC whose output is key material: the tag is written straight
    into a buffer that is wiped on drop.
*/
pub(crate) fn rijndael128_cmac_secret(
    key: &CmacKey,
    src: &[u8],
) -> CryptoResult<Zeroizing<[u8; CMAC_MAC_SIZE]>> {
    let mut state = CmacState::init(key);
    state.update(src)?;
    let mut out = Zeroizing::new([0u8; CMAC_MAC_SIZE]);
    state
        .mac
        .finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    Ok(out)
}

/**
    Streaming AES-128-CMAC.

    The expanded key schedule and subkeys are wiped when the state is
    finalized, closed or dropped.
*/
#[derive(Clone)]
pub struct CmacState {
    mac: Cmac<Aes128>,
    processed: u64,
}

impl CmacState {
    pub fn init(key: &CmacKey) -> Self {
        Self {
            mac: <Cmac<Aes128> as Mac>::new(key.as_bytes().into()),
            processed: 0,
        }
    }

    pub fn update(&mut self, src: &[u8]) -> CryptoResult<()> {
        check_u32_len("CMAC input", src.len())?;
        self.mac.update(src);
        self.processed += src.len() as u64;
        Ok(())
    }

    /**
        Total bytes absorbed so far.
    */
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn finalize(self) -> CmacTag {
        log::trace!("CMAC over {} bytes", self.processed);
        CmacTag::from_bytes(self.mac.finalize().into_bytes().into())
    }

    /**
        Discard the state without producing a tag.
    */
    pub fn close(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");

    #[test]
    fn rfc4493_empty_message() {
        let tag = rijndael128_cmac_msg(&CmacKey::from_bytes(KEY), &[]).unwrap();
        assert_eq!(tag.0, hex!("bb1d6929e95937287fa37d129b756746"));
    }

    #[test]
    fn rfc4493_one_block() {
        let tag = rijndael128_cmac_msg(
            &CmacKey::from_bytes(KEY),
            &hex!("6bc1bee22e409f96e93d7e117393172a"),
        )
        .unwrap();
        assert_eq!(tag.0, hex!("070a16b46b4d4144f79bdd9dd04a287c"));
    }

    #[test]
    fn streaming_matches_one_shot() {
        let key = CmacKey::from_bytes(KEY);
        let msg: Vec<u8> = (0..100u8).collect();
        let one_shot = rijndael128_cmac_msg(&key, &msg).unwrap();

        let mut state = CmacState::init(&key);
        for chunk in msg.chunks(7) {
            state.update(chunk).unwrap();
        }
        assert_eq!(state.processed(), 100);
        assert_eq!(state.finalize(), one_shot);
    }

    #[test]
    fn secret_output_matches_tag() {
        let key = CmacKey::from_bytes(KEY);
        let tag = rijndael128_cmac_msg(&key, b"label").unwrap();
        let secret = rijndael128_cmac_secret(&key, b"label").unwrap();
        assert_eq!(*secret, tag.0);
    }

    #[test]
    fn drop_wipes_key_schedule() {
        use core::mem::{MaybeUninit, size_of};

        let mut slot = MaybeUninit::new(CmacState::init(&CmacKey::from_bytes(KEY)));
        // SAFETY: the slot holds an initialized state that is dropped exactly once
        // and only read back as plain bytes afterwards
        let bytes = unsafe {
            core::ptr::drop_in_place(slot.as_mut_ptr());
            core::slice::from_raw_parts(slot.as_ptr().cast::<u8>(), size_of::<CmacState>())
        };
        assert!(!bytes.windows(KEY.len()).any(|w| w == KEY));
    }

    #[test]
    fn different_keys_different_tags() {
        let a = rijndael128_cmac_msg(&CmacKey::from_bytes([0u8; 16]), b"m").unwrap();
        let b = rijndael128_cmac_msg(&CmacKey::from_bytes([1u8; 16]), b"m").unwrap();
        assert_ne!(a, b);
    }
}
