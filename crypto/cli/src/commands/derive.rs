use anyhow::{Context, Result};
use clap::Args;

use sample_crypto::{Ec256DhShared, KeyLabel, derive_all, derive_key};

use super::decode_array;

/**
    Derive attestation session keys from an ECDH shared secret.
*/
#[derive(Args)]
pub struct DeriveCommand {
    /// Shared secret (32 bytes, little-endian hex).
    #[arg(long)]
    pub shared: String,
    /// Derive only this key (SMK, SK, MK or VK).
    #[arg(long)]
    pub label: Option<KeyLabel>,
}

impl DeriveCommand {
    pub fn run(self) -> Result<()> {
        let shared = Ec256DhShared::from_le(decode_array::<32>(&self.shared, "shared secret")?);

        if let Some(label) = self.label {
            let key = derive_key(&shared, label).context("failed to derive key")?;
            println!("{}", hex::encode(key.as_bytes()));
            return Ok(());
        }

        let keys = derive_all(&shared).context("failed to derive keys")?;
        for (label, key) in KeyLabel::ALL.iter().zip([&keys.smk, &keys.sk, &keys.mk, &keys.vk]) {
            println!("{:<4} {}", label.to_name(), hex::encode(key.as_bytes()));
        }
        Ok(())
    }
}
