use std::fmt;

use crate::error::{CryptoError, CryptoResult};
use crate::math::BigUint;

/// Default lab primes. Far too small for real use.
pub const DEFAULT_P: u64 = 61;
pub const DEFAULT_Q: u64 = 53;

/// Default shared secret for the MAC lab.
pub const DEFAULT_MAC_KEY: &str = "gmiu_secret";

/// Inputs the lab flows need beyond the messages themselves.
#[derive(Clone)]
pub struct LabConfig {
    pub p: BigUint,
    pub q: BigUint,
    pub mac_key: String,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            p: BigUint::from_u64(DEFAULT_P),
            q: BigUint::from_u64(DEFAULT_Q),
            mac_key: DEFAULT_MAC_KEY.to_string(),
        }
    }
}

impl LabConfig {
    /// Reject primes below 2 before they reach key generation.
    pub fn validate(&self) -> CryptoResult<()> {
        for prime in [&self.p, &self.q] {
            if prime.bits() < 2 {
                return Err(CryptoError::InvalidPrime {
                    value: prime.to_string(),
                    reason: "must be at least 2".into(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabConfig")
            .field("p", &self.p.to_string())
            .field("q", &self.q.to_string())
            .field("mac_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_labs() {
        let config = LabConfig::default();
        assert_eq!(config.p.to_u64(), Some(61));
        assert_eq!(config.q.to_u64(), Some(53));
        assert_eq!(config.mac_key, "gmiu_secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tiny_primes_are_rejected() {
        let config = LabConfig {
            p: BigUint::one(),
            ..LabConfig::default()
        };
        assert!(matches!(config.validate(), Err(CryptoError::InvalidPrime { .. })));
    }

    #[test]
    fn debug_redacts_key() {
        let shown = format!("{:?}", LabConfig::default());
        assert!(!shown.contains("gmiu_secret"));
        assert!(shown.contains("61"));
    }
}
