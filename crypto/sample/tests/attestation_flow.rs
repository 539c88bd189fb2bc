/*!
    End-to-end key exchange between a challenger and an attesting party,
    driven only through the public API.
*/

use anyhow::Result;

use sample_crypto::{
    AesGcmKey, CmacKey, EccContext, KeyLabel, Sha256State, Status, derive_all,
    derive_key, rijndael128_cmac_msg, rijndael128_gcm_decrypt, rijndael128_gcm_encrypt,
    sha256_msg, status_of,
};

fn transcript(ga: &sample_crypto::Ec256Public, gb: &sample_crypto::Ec256Public) -> Vec<u8> {
    let mut out = Vec::with_capacity(128);
    out.extend_from_slice(&gb.to_bytes());
    out.extend_from_slice(&ga.to_bytes());
    out
}

#[test]
fn key_exchange_sign_and_seal() -> Result<()> {
    // Attesting side: ephemeral key from the reproducible generator.
    let mut enclave = EccContext::open();
    let (enclave_priv, ga) = enclave.create_key_pair()?;

    // Challenger side: long-term signing key and ephemeral key from real entropy.
    let mut challenger = EccContext::open_system();
    let (sign_priv, sign_pub) = challenger.create_key_pair()?;
    let (challenger_priv, gb) = challenger.create_key_pair()?;

    let shared_challenger = challenger.compute_shared_dhkey(&challenger_priv, &ga)?;
    let shared_enclave = enclave.compute_shared_dhkey(&enclave_priv, &gb)?;
    assert_eq!(shared_challenger.as_le(), shared_enclave.as_le());

    let keys_challenger = derive_all(&shared_challenger)?;
    let keys_enclave = derive_all(&shared_enclave)?;
    assert_eq!(keys_challenger.smk.as_bytes(), keys_enclave.smk.as_bytes());
    assert_eq!(keys_challenger.sk.as_bytes(), keys_enclave.sk.as_bytes());

    // Challenger signs Gb || Ga, enclave checks it.
    let signed = transcript(&ga, &gb);
    let signature = challenger.ecdsa_sign(&signed, &sign_priv)?;
    assert!(enclave.ecdsa_verify(&signed, &sign_pub, &signature)?);

    // Message MAC under SMK agrees on both sides.
    let smk_c = CmacKey::from_bytes(*keys_challenger.smk.as_bytes());
    let smk_e = CmacKey::from_bytes(*keys_enclave.smk.as_bytes());
    let mut body = signed.clone();
    body.extend_from_slice(&signature.to_bytes());
    assert_eq!(
        rijndael128_cmac_msg(&smk_c, &body)?,
        rijndael128_cmac_msg(&smk_e, &body)?
    );

    // Secret provisioned under SK.
    let sk_c = AesGcmKey::from_bytes(*keys_challenger.sk.as_bytes());
    let sk_e = AesGcmKey::from_bytes(*keys_enclave.sk.as_bytes());
    let iv = [0u8; 12];
    let secret = b"provisioned secret";
    let (ciphertext, tag) = rijndael128_gcm_encrypt(&sk_c, secret, &iv, &[])?;
    assert_ne!(&ciphertext[..], &secret[..]);
    assert_eq!(
        rijndael128_gcm_decrypt(&sk_e, &ciphertext, &iv, &[], &tag)?,
        secret
    );

    // The VK derived alone matches the batch derivation.
    assert_eq!(
        derive_key(&shared_enclave, KeyLabel::Vk)?.as_bytes(),
        keys_challenger.vk.as_bytes()
    );

    // Report data: SHA-256 over Ga || Gb || VK, streamed.
    let mut hasher = Sha256State::init();
    hasher.update(&ga.to_bytes())?;
    hasher.update(&gb.to_bytes())?;
    hasher.update(keys_enclave.vk.as_bytes())?;
    let mut flat = Vec::new();
    flat.extend_from_slice(&ga.to_bytes());
    flat.extend_from_slice(&gb.to_bytes());
    flat.extend_from_slice(keys_enclave.vk.as_bytes());
    assert_eq!(hasher.get_hash(), sha256_msg(&flat));
    hasher.close();

    enclave.close()?;
    challenger.close()?;
    Ok(())
}

#[test]
fn reproducible_enclave_messages() -> Result<()> {
    let mut first = EccContext::open();
    let mut second = EccContext::open();
    let (_, ga_1) = first.create_key_pair()?;
    let (_, ga_2) = second.create_key_pair()?;
    assert_eq!(ga_1, ga_2);
    Ok(())
}

#[test]
fn wrong_session_key_fails_to_open() -> Result<()> {
    let mut ctx = EccContext::open_system();
    let (priv_a, _) = ctx.create_key_pair()?;
    let (_, pub_b) = ctx.create_key_pair()?;
    let (_, pub_c) = ctx.create_key_pair()?;

    let right = derive_all(&ctx.compute_shared_dhkey(&priv_a, &pub_b)?)?;
    let wrong = derive_all(&ctx.compute_shared_dhkey(&priv_a, &pub_c)?)?;

    let iv = [7u8; 12];
    let (ciphertext, tag) = rijndael128_gcm_encrypt(
        &AesGcmKey::from_bytes(*right.sk.as_bytes()),
        b"payload",
        &iv,
        b"header",
    )?;
    let result = rijndael128_gcm_decrypt(
        &AesGcmKey::from_bytes(*wrong.sk.as_bytes()),
        &ciphertext,
        &iv,
        b"header",
        &tag,
    );
    assert_eq!(status_of(&result), Status::InvalidParameter);
    Ok(())
}
