use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sample_crypto::{EccContext, RandomSource, RngKind};

use crate::commands::{
    CmacCommand, DeriveCommand, EcdhCommand, GcmDecryptCommand, GcmEncryptCommand,
    KeygenCommand, RandCommand, Sha256Command, SignCommand, VerifyCommand,
};

/**
    Sample attestation crypto provider, for reproducing and debugging messages.

    All 256-bit values (private keys, coordinates, signature components,
    shared secrets) are read and printed as little-endian hex.
*/
#[derive(Parser)]
#[command(name = "sample-crypto")]
pub struct Cli {
    /// Random source for key and nonce generation: `debug` or `system`.
    #[arg(long, global = true, env = "SAMPLE_CRYPTO_RNG", default_value = "debug")]
    rng: RngKind,

    /// Seed word for the debug random source.
    #[arg(long, global = true, env = "SAMPLE_CRYPTO_SEED")]
    seed: Option<u32>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read bytes from the deterministic debug generator.
    Rand(RandCommand),
    /// Generate a P-256 key pair.
    Keygen(KeygenCommand),
    /// Compute an ECDH shared secret.
    Ecdh(EcdhCommand),
    /// Sign data with ECDSA-SHA256.
    Sign(SignCommand),
    /// Verify an ECDSA-SHA256 signature.
    Verify(VerifyCommand),
    /// Encrypt with AES-128-GCM.
    GcmEncrypt(GcmEncryptCommand),
    /// Decrypt with AES-128-GCM and check the tag.
    GcmDecrypt(GcmDecryptCommand),
    /// Compute an AES-128-CMAC.
    Cmac(CmacCommand),
    /// Compute a SHA-256 digest.
    Sha256(Sha256Command),
    /// Derive attestation session keys from a shared secret.
    Derive(DeriveCommand),
}

impl Cli {
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    pub fn run(self) -> Result<()> {
        let (rng, seed) = (self.rng, self.seed);
        let ctx = || -> Result<EccContext<Box<dyn RandomSource + Send>>> {
            let source = rng
                .build(seed)
                .with_context(|| format!("failed to set up the {rng} random source"))?;
            Ok(EccContext::with_source(source))
        };

        match self.command {
            Command::Rand(cmd) => cmd.run(seed),
            Command::Keygen(cmd) => cmd.run(ctx()?),
            Command::Ecdh(cmd) => cmd.run(ctx()?),
            Command::Sign(cmd) => cmd.run(ctx()?),
            Command::Verify(cmd) => cmd.run(ctx()?),
            Command::GcmEncrypt(cmd) => cmd.run(),
            Command::GcmDecrypt(cmd) => cmd.run(),
            Command::Cmac(cmd) => cmd.run(),
            Command::Sha256(cmd) => cmd.run(),
            Command::Derive(cmd) => cmd.run(),
        }
    }
}
