use anyhow::{Context, Result};
use clap::Args;

use sample_crypto::{
    EccContext, Ec256Private, Ec256Public, Ec256Signature, RandomSource,
};

use super::{DataArgs, decode_array};

fn parse_private(s: &str) -> Result<Ec256Private> {
    Ok(Ec256Private::from_le(decode_array::<32>(s, "private key")?))
}

fn parse_public(s: &str) -> Result<Ec256Public> {
    let bytes = decode_array::<64>(s, "public key")?;
    Ok(Ec256Public::try_from(&bytes[..])?)
}

/**
    Generate a P-256 key pair.
*/
#[derive(Args)]
pub struct KeygenCommand {}

impl KeygenCommand {
    pub fn run<R: RandomSource>(self, mut ctx: EccContext<R>) -> Result<()> {
        let (private, public) = ctx
            .create_key_pair()
            .context("failed to generate key pair")?;

        if ctx.is_deterministic() {
            eprintln!("warning: key generated from the deterministic debug source");
        }
        println!("Private:  {}", hex::encode(private.as_le()));
        println!("Public:   {public}");
        ctx.close()?;
        Ok(())
    }
}

/**
    Compute an ECDH shared secret.
*/
#[derive(Args)]
pub struct EcdhCommand {
    /// Local private key (32 bytes, hex).
    #[arg(long)]
    pub private: String,
    /// Peer public key `gx || gy` (64 bytes, hex).
    #[arg(long)]
    pub peer: String,
}

impl EcdhCommand {
    pub fn run<R: RandomSource>(self, ctx: EccContext<R>) -> Result<()> {
        let private = parse_private(&self.private)?;
        let peer = parse_public(&self.peer)?;
        let shared = ctx
            .compute_shared_dhkey(&private, &peer)
            .context("failed to compute shared secret")?;
        println!("{}", hex::encode(shared.as_le()));
        Ok(())
    }
}

/**
    Sign data with ECDSA-SHA256.
*/
#[derive(Args)]
pub struct SignCommand {
    /// Signing private key (32 bytes, hex).
    #[arg(long)]
    pub private: String,
    #[command(flatten)]
    pub data: DataArgs,
}

impl SignCommand {
    pub fn run<R: RandomSource>(self, mut ctx: EccContext<R>) -> Result<()> {
        let private = parse_private(&self.private)?;
        let data = self.data.load()?;
        let signature = ctx
            .ecdsa_sign(&data, &private)
            .context("failed to sign")?;
        println!("{signature}");
        Ok(())
    }
}

/**
    Verify an ECDSA-SHA256 signature.
*/
#[derive(Args)]
pub struct VerifyCommand {
    /// Signer public key `gx || gy` (64 bytes, hex).
    #[arg(long)]
    pub public: String,
    /// Signature `x || y` (64 bytes, hex).
    #[arg(long)]
    pub signature: String,
    #[command(flatten)]
    pub data: DataArgs,
}

impl VerifyCommand {
    pub fn run<R: RandomSource>(self, ctx: EccContext<R>) -> Result<()> {
        let public = parse_public(&self.public)?;
        let signature = decode_array::<64>(&self.signature, "signature")?;
        let signature = Ec256Signature::try_from(&signature[..])?;
        let data = self.data.load()?;

        let valid = ctx
            .ecdsa_verify(&data, &public, &signature)
            .context("failed to verify")?;
        println!("{}", if valid { "valid" } else { "INVALID" });
        if !valid {
            anyhow::bail!("signature does not verify");
        }
        Ok(())
    }
}
