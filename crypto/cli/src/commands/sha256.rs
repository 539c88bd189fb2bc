use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;

use sample_crypto::Sha256State;

use super::DataArgs;

/**
    Compute a SHA-256 digest. Reads stdin when no data is given.
*/
#[derive(Args)]
pub struct Sha256Command {
    #[command(flatten)]
    pub data: DataArgs,
}

impl Sha256Command {
    pub fn run(self) -> Result<()> {
        let mut state = Sha256State::init();

        if self.data.hex.is_some() || self.data.text.is_some() || self.data.file.is_some() {
            state.update(&self.data.load()?)?;
        } else {
            let mut stdin = std::io::stdin().lock();
            let mut buf = [0u8; 8192];
            loop {
                let n = stdin.read(&mut buf).context("failed to read stdin")?;
                if n == 0 {
                    break;
                }
                state.update(&buf[..n])?;
            }
        }

        println!("{}", state.get_hash());
        state.close();
        Ok(())
    }
}
