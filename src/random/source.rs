use std::sync::OnceLock;

use rand::RngCore;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// A cryptographically secure provider of random bytes.
pub trait SecureRandomSource: Send + Sync {
    fn name(&self) -> &str;

    /// Capability check, run once when a [`SecureRandom`] chain is built.
    fn is_available(&self) -> bool { true }

    fn try_fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// Built-in providers, iterated in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum SourceKind {
    #[strum(serialize = "getrandom")]
    Getrandom,
    #[strum(serialize = "os-rng")]
    OsRng,
}

impl SourceKind {
    pub fn source(self) -> Box<dyn SecureRandomSource> {
        match self {
            SourceKind::Getrandom => Box::new(GetrandomSource),
            SourceKind::OsRng => Box::new(OsRngSource),
        }
    }
}

/// The platform random-bytes API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetrandomSource;

impl SecureRandomSource for GetrandomSource {
    fn name(&self) -> &str { SourceKind::Getrandom.into() }

    fn is_available(&self) -> bool {
        let mut probe = [0u8; 1];
        getrandom::getrandom(&mut probe).is_ok()
    }

    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| Error::Entropy {
            name: SourceKind::Getrandom.into(),
            reason: e.to_string(),
        })
    }
}

/// `rand`'s operating system generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRngSource;

impl SecureRandomSource for OsRngSource {
    fn name(&self) -> &str { SourceKind::OsRng.into() }

    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        rand::rngs::OsRng.try_fill_bytes(dest).map_err(|e| Error::Entropy {
            name: SourceKind::OsRng.into(),
            reason: e.to_string(),
        })
    }
}

/// Ordered chain of secure sources. A fill falls through to the next source
/// when one fails and gives up with [`Error::NoSecureSource`] after the last.
pub struct SecureRandom {
    sources: Vec<Box<dyn SecureRandomSource>>,
}

impl SecureRandom {
    /// Keeps the sources whose capability check passes, preserving order.
    pub fn new(sources: Vec<Box<dyn SecureRandomSource>>) -> Self {
        let sources: Vec<_> = sources
            .into_iter()
            .filter(|s| {
                let available = s.is_available();
                if !available {
                    debug!(source = s.name(), "secure random source unavailable");
                }
                available
            })
            .collect();
        debug!(
            sources = ?sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            "secure random chain"
        );
        Self { sources }
    }

    /// The process-wide chain of built-in sources, built on first use.
    pub fn global() -> &'static SecureRandom {
        static GLOBAL: OnceLock<SecureRandom> = OnceLock::new();
        GLOBAL.get_or_init(SecureRandom::default)
    }

    pub fn source_names(&self) -> Vec<&str> { self.sources.iter().map(|s| s.name()).collect() }

    pub fn fill(&self, dest: &mut [u8]) -> Result<()> {
        for source in self.sources.iter() {
            match source.try_fill(dest) {
                Ok(()) => return Ok(()),
                Err(e) => warn!(source = source.name(), error = %e, "falling back to next secure random source"),
            }
        }
        Err(Error::NoSecureSource)
    }

    /// Eight secure bytes read as a little-endian `u64`.
    pub fn next_u64(&self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        self.fill(&mut bytes)?;
        Ok(u64::from_le_bytes(bytes))
    }
}

impl Default for SecureRandom {
    fn default() -> Self { Self::new(SourceKind::iter().map(SourceKind::source).collect()) }
}
