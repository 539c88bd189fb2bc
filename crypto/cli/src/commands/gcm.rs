use anyhow::{Context, Result};
use clap::Args;

use sample_crypto::{AesGcmKey, AesGcmTag, rijndael128_gcm_decrypt, rijndael128_gcm_encrypt};

use super::{DataArgs, decode_array, decode_hex};

/**
    Key, IV and AAD shared by both GCM directions.
*/
#[derive(Args)]
pub struct GcmParams {
    /// AES-128 key (16 bytes, hex).
    #[arg(long)]
    pub key: String,
    /// IV (12 bytes, hex).
    #[arg(long)]
    pub iv: String,
    /// Additional authenticated data (hex).
    #[arg(long, default_value = "")]
    pub aad: String,
}

impl GcmParams {
    fn load(&self) -> Result<(AesGcmKey, Vec<u8>, Vec<u8>)> {
        let key = AesGcmKey::from_bytes(decode_array::<16>(&self.key, "key")?);
        // IV length is checked by the provider so a bad IV reports its status
        let iv = decode_hex(&self.iv, "IV")?;
        let aad = decode_hex(&self.aad, "AAD")?;
        Ok((key, iv, aad))
    }
}

/**
    Encrypt with AES-128-GCM.
*/
#[derive(Args)]
pub struct GcmEncryptCommand {
    #[command(flatten)]
    pub params: GcmParams,
    #[command(flatten)]
    pub data: DataArgs,
}

impl GcmEncryptCommand {
    pub fn run(self) -> Result<()> {
        let (key, iv, aad) = self.params.load()?;
        let plaintext = self.data.load()?;
        let (ciphertext, tag) =
            rijndael128_gcm_encrypt(&key, &plaintext, &iv, &aad).context("failed to encrypt")?;
        println!("Ciphertext: {}", hex::encode(ciphertext));
        println!("Tag:        {tag}");
        Ok(())
    }
}

/**
    Decrypt with AES-128-GCM and check the tag.
*/
#[derive(Args)]
pub struct GcmDecryptCommand {
    #[command(flatten)]
    pub params: GcmParams,
    /// Authentication tag (16 bytes, hex).
    #[arg(long)]
    pub tag: String,
    #[command(flatten)]
    pub data: DataArgs,
}

impl GcmDecryptCommand {
    pub fn run(self) -> Result<()> {
        let (key, iv, aad) = self.params.load()?;
        let tag = AesGcmTag::from_bytes(decode_array::<16>(&self.tag, "tag")?);
        let ciphertext = self.data.load()?;
        let plaintext = rijndael128_gcm_decrypt(&key, &ciphertext, &iv, &aad, &tag)
            .context("failed to decrypt")?;
        println!("{}", hex::encode(plaintext));
        Ok(())
    }
}
