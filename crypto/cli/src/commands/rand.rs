use anyhow::{Context, Result};
use clap::Args;

use sample_crypto::{DebugRng, RandomSource};

/**
    Read bytes from the deterministic debug generator.
*/
#[derive(Args)]
pub struct RandCommand {
    /// Number of bytes to read.
    pub length: usize,
}

impl RandCommand {
    pub fn run(self, seed: Option<u32>) -> Result<()> {
        let mut buf = vec![0u8; self.length];
        match seed {
            Some(seed) => {
                if buf.is_empty() {
                    anyhow::bail!(sample_crypto::CryptoError::InvalidParameter(
                        "random buffer is empty"
                    ));
                }
                DebugRng::with_seed(seed).fill(&mut buf)
            }
            None => sample_crypto::read_rand(&mut buf),
        }
        .context("failed to read random bytes")?;
        println!("{}", hex::encode(buf));
        Ok(())
    }
}
