use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

mod cmac;
mod derive;
mod ecc;
mod gcm;
mod rand;
mod sha256;

pub use self::cmac::CmacCommand;
pub use self::derive::DeriveCommand;
pub use self::ecc::{EcdhCommand, KeygenCommand, SignCommand, VerifyCommand};
pub use self::gcm::{GcmDecryptCommand, GcmEncryptCommand};
pub use self::rand::RandCommand;
pub use self::sha256::Sha256Command;

/**
    Message input shared by commands that take arbitrary data.
*/
#[derive(Args)]
pub struct DataArgs {
    /// Data as hex.
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub hex: Option<String>,
    /// Data as a UTF-8 string.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
    /// Read data from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl DataArgs {
    pub fn load(&self) -> Result<Vec<u8>> {
        match (&self.hex, &self.text, &self.file) {
            (Some(h), _, _) => decode_hex(h, "data"),
            (_, Some(t), _) => Ok(t.as_bytes().to_vec()),
            (_, _, Some(path)) => std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => Ok(Vec::new()),
        }
    }
}

pub fn decode_hex(s: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(s.trim()).with_context(|| format!("{what} is not valid hex"))
}

/**
    Decode hex into an exact-size array.
*/
pub fn decode_array<const N: usize>(s: &str, what: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(s, what)?;
    if bytes.len() != N {
        bail!("{what} must be {N} bytes, got {}", bytes.len());
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}
