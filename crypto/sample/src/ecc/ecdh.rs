use p256::ecdh::diffie_hellman;
use zeroize::Zeroizing;

use sample_crypto_core::{Ec256DhShared, Ec256Private, Ec256Public, reversed};

use crate::error::CryptoResult;
use crate::rng::RandomSource;

use super::{EccContext, public_key_from, secret_key_from, to_array};

impl<R: RandomSource> EccContext<R> {
    /**
        ECDH with the local private key `private_b` and the peer's public
        key `public_ga`.

        The peer point is validated first; an off-curve or identity point is an
        invalid parameter. The result is the x-coordinate of
        `private_b · public_ga`, little-endian.
    */
    pub fn compute_shared_dhkey(
        &self,
        private_b: &Ec256Private,
        public_ga: &Ec256Public,
    ) -> CryptoResult<Ec256DhShared> {
        let peer = public_key_from(public_ga)?;
        let secret = secret_key_from(private_b)?;

        let shared = diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
        let x_be = Zeroizing::new(to_array(shared.raw_secret_bytes()));

        log::debug!("ECC context #{}: computed shared secret", self.id());
        Ok(Ec256DhShared::from_le(reversed(&x_be)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CryptoError;
    use sample_crypto_core::Status;

    #[test]
    fn both_sides_agree() {
        let mut ctx = EccContext::open_system();
        let (priv_a, pub_a) = ctx.create_key_pair().unwrap();
        let (priv_b, pub_b) = ctx.create_key_pair().unwrap();

        let ab = ctx.compute_shared_dhkey(&priv_b, &pub_a).unwrap();
        let ba = ctx.compute_shared_dhkey(&priv_a, &pub_b).unwrap();
        assert_eq!(ab.as_le(), ba.as_le());
    }

    #[test]
    fn scalar_one_yields_peer_x() {
        let ctx = EccContext::open_system();
        let mut one = [0u8; 32];
        one[0] = 1;
        let peer = Ec256Public::from_be(
            &hex_literal::hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            &hex_literal::hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        );
        let shared = ctx
            .compute_shared_dhkey(&Ec256Private::from_le(one), &peer)
            .unwrap();
        assert_eq!(shared.as_le(), &peer.gx);
    }

    #[test]
    fn off_curve_peer_is_invalid_parameter() {
        let mut ctx = EccContext::open_system();
        let (private, mut public) = ctx.create_key_pair().unwrap();
        public.gy[0] ^= 0x01;
        let err = ctx.compute_shared_dhkey(&private, &public).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidPublicKey));
        assert_eq!(err.status(), Status::InvalidParameter);
    }

    #[test]
    fn zero_private_key_is_invalid_parameter() {
        let mut ctx = EccContext::open_system();
        let (_, public) = ctx.create_key_pair().unwrap();
        let err = ctx
            .compute_shared_dhkey(&Ec256Private::from_le([0u8; 32]), &public)
            .unwrap_err();
        assert_eq!(err.status(), Status::InvalidParameter);
    }
}
