/*!
    Random byte sources.

    Every operation that needs randomness (private keys, ECDSA nonces) draws it
    through [`RandomSource`], so the source is chosen once per ECC context:

    - [`SystemRng`]: operating-system entropy
    - [`DebugRng`]: a fixed-seed, non-random generator that makes attestation
      messages reproducible. Only compiled with the `debug-rng` feature.
*/
use core::fmt;
use core::str::FromStr;

use p256::elliptic_curve::rand_core::{OsRng, RngCore};
use p256::{FieldBytes, SecretKey};
use zeroize::Zeroizing;

use sample_crypto_core::{ParseError, eq_ignore_ascii_case, reversed, trim_ascii};

#[cfg(feature = "debug-rng")]
use sample_crypto_core::DEFAULT_DEBUG_SEED;

use crate::error::{CryptoError, CryptoResult};

/**
    Upper bound on draws when rejection-sampling a scalar or nonce.
*/
pub(crate) const MAX_SCALAR_DRAWS: u32 = 64;

/**
    A source of bytes for key and nonce generation.
*/
pub trait RandomSource {
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()>;

    /**
        True when the output is reproducible and must never protect real secrets.
    */
    fn is_deterministic(&self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()> {
        (**self).fill(dest)
    }

    fn is_deterministic(&self) -> bool {
        (**self).is_deterministic()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()> {
        (**self).fill(dest)
    }

    fn is_deterministic(&self) -> bool {
        (**self).is_deterministic()
    }
}

/**
    Operating-system entropy.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::RandomSource(e.to_string()))
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

/**
    Deterministic generator for debugging attestation flows.

    Every 32-bit word it writes is the seed in little-endian order; a trailing
    partial word is truncated. It keeps no state, so every read of the same
    length returns the same bytes. Do NOT use it outside of debugging.
*/
#[cfg(feature = "debug-rng")]
#[derive(Debug, Clone)]
pub struct DebugRng {
    seed: u32,
}

#[cfg(feature = "debug-rng")]
impl DebugRng {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_DEBUG_SEED)
    }

    pub fn with_seed(seed: u32) -> Self {
        log::warn!("using the deterministic debug generator (seed {seed}); output is NOT random");
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

#[cfg(feature = "debug-rng")]
impl Default for DebugRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "debug-rng")]
impl RandomSource for DebugRng {
    fn fill(&mut self, dest: &mut [u8]) -> CryptoResult<()> {
        let word = self.seed.to_le_bytes();
        for chunk in dest.chunks_mut(word.len()) {
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
        Ok(())
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

/**
    Fill `dest` from the deterministic debug generator.

    The output is reproducible by construction and provides no secrecy.
*/
#[cfg(feature = "debug-rng")]
pub fn read_rand(dest: &mut [u8]) -> CryptoResult<()> {
    if dest.is_empty() {
        return Err(CryptoError::InvalidParameter("random buffer is empty"));
    }
    DebugRng::new().fill(dest)
}

/**
    Draw a private scalar in `[1, n)`.

    Bytes are read as a little-endian integer, matching how private keys are
    carried at the boundary. Out-of-range draws are discarded and redrawn.
*/
pub(crate) fn draw_secret_key<R: RandomSource + ?Sized>(source: &mut R) -> CryptoResult<SecretKey> {
    let mut le = Zeroizing::new([0u8; 32]);
    for _ in 0..MAX_SCALAR_DRAWS {
        source.fill(&mut le[..])?;
        let be = Zeroizing::new(reversed(&le));
        if let Ok(key) = SecretKey::from_bytes(FieldBytes::from_slice(&be[..])) {
            return Ok(key);
        }
        log::trace!("discarding out-of-range scalar draw");
    }
    Err(CryptoError::ScalarExhausted(MAX_SCALAR_DRAWS))
}

/**
    Which random source a caller asked for.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RngKind {
    #[default]
    Debug,
    System,
}

impl RngKind {
    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = trim_ascii(name);
        match name.len() {
            5 if eq_ignore_ascii_case(name, b"debug") => Some(Self::Debug),
            6 if eq_ignore_ascii_case(name, b"system") => Some(Self::System),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::System => "system",
        }
    }

    /**
        Build the selected source. `seed` only applies to the debug generator.
    */
    pub fn build(self, seed: Option<u32>) -> CryptoResult<Box<dyn RandomSource + Send>> {
        match self {
            #[cfg(feature = "debug-rng")]
            Self::Debug => Ok(Box::new(DebugRng::with_seed(
                seed.unwrap_or(DEFAULT_DEBUG_SEED),
            ))),
            #[cfg(not(feature = "debug-rng"))]
            Self::Debug => {
                let _ = seed;
                Err(CryptoError::InvalidParameter(
                    "debug generator is not compiled in",
                ))
            }
            Self::System => Ok(Box::new(SystemRng)),
        }
    }
}

impl fmt::Display for RngKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for RngKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "random source",
            value: s.to_owned(),
        })
    }
}
