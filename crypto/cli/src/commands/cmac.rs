use anyhow::{Context, Result};
use clap::Args;

use sample_crypto::{CmacKey, rijndael128_cmac_msg};

use super::{DataArgs, decode_array};

/**
    Compute an AES-128-CMAC.
*/
#[derive(Args)]
pub struct CmacCommand {
    /// CMAC key (16 bytes, hex).
    #[arg(long)]
    pub key: String,
    #[command(flatten)]
    pub data: DataArgs,
}

impl CmacCommand {
    pub fn run(self) -> Result<()> {
        let key = CmacKey::from_bytes(decode_array::<16>(&self.key, "key")?);
        let data = self.data.load()?;
        let tag = rijndael128_cmac_msg(&key, &data).context("failed to compute CMAC")?;
        println!("{tag}");
        Ok(())
    }
}
