//! The three lab exercises as pure functions returning printable reports.
//!
//! - signature lab: RSA keys from the configured primes, sign, verify, tamper test
//! - digest lab: SHA-1, SHA-256 and derived-512 of two messages side by side
//! - MAC lab: sender computes HMAC-SHA256, receiver checks what arrived

use std::fmt;

use tracing::{debug, info};

use crate::config::LabConfig;
use crate::encoding::{text_bytes, to_hex};
use crate::error::CryptoResult;
use crate::hash::{derived512, sha1, sha256};
use crate::mac::{hmac_sha256, verify_hmac_sha256};
use crate::rsa::{generate_rsa_keys, rsa_sign, rsa_verify, RsaPrivateKey, RsaPublicKey};

/// What happened when the signature was checked against the second message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TamperOutcome {
    /// Second message identical to the first; nothing to detect.
    Unchanged,
    /// Verification failed, as it should for a modified message.
    Rejected,
    /// Verification passed anyway: both digests agree after reduction mod n.
    Collision,
}

#[derive(Debug)]
pub struct SignatureReport {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub signature: Vec<u8>,
    pub verified: bool,
    pub tamper: TamperOutcome,
}

/// Sign `message`, verify it, then try the same signature on `tampered`.
pub fn run_signature_lab(config: &LabConfig, message: &str, tampered: &str) -> CryptoResult<SignatureReport> {
    config.validate()?;
    let (public_key, private_key) = generate_rsa_keys(&config.p, &config.q)?;

    let signature = rsa_sign(text_bytes(message), &private_key)?;
    let verified = rsa_verify(text_bytes(message), &signature, &public_key)?;

    let tamper = if tampered == message {
        TamperOutcome::Unchanged
    } else if rsa_verify(text_bytes(tampered), &signature, &public_key)? {
        TamperOutcome::Collision
    } else {
        TamperOutcome::Rejected
    };
    info!(verified, ?tamper, "signature lab finished");

    Ok(SignatureReport {
        public_key,
        private_key,
        signature,
        verified,
        tamper,
    })
}

impl fmt::Display for SignatureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Public key:  {}", self.public_key)?;
        writeln!(f, "Private key: {}", self.private_key)?;
        writeln!(f)?;
        writeln!(f, "Signature (hex): {}", to_hex(&self.signature))?;
        writeln!(f, "Verification: {}", if self.verified { "SUCCESS" } else { "FAILED" })?;
        writeln!(f)?;
        writeln!(f, "--- Tamper test ---")?;
        match self.tamper {
            TamperOutcome::Unchanged => {
                writeln!(f, "Tampered verification: SUCCESS")?;
                write!(f, "Message is unchanged, nothing was tampered with.")
            }
            TamperOutcome::Rejected => {
                writeln!(f, "Tampered verification: FAILED")?;
                write!(f, "Signature does not match the modified message.")
            }
            TamperOutcome::Collision => {
                writeln!(f, "Tampered verification: SUCCESS (collision)")?;
                write!(f, "Both digests reduce to the same value mod n.")
            }
        }
    }
}

/// Digest algorithms compared by the digest lab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Sha1,
    Sha256,
    Derived512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Derived512];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Derived512 => "SHA-512*",
        }
    }

    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha1 => sha1::hash(message).to_vec(),
            Algorithm::Sha256 => sha256::hash(message).to_vec(),
            Algorithm::Derived512 => derived512::hash(message).to_vec(),
        }
    }
}

/// One algorithm applied to both messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestComparison {
    pub algorithm: Algorithm,
    pub original: Vec<u8>,
    pub modified: Vec<u8>,
}

impl DigestComparison {
    pub fn same(&self) -> bool {
        self.original == self.modified
    }

    /// Number of output bits that differ. About half for unrelated inputs.
    pub fn differing_bits(&self) -> u32 {
        bit_difference(&self.original, &self.modified)
    }

    pub fn total_bits(&self) -> usize {
        self.original.len() * 8
    }
}

/// Count differing bits between two equal-length byte strings.
pub fn bit_difference(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[derive(Clone, Debug)]
pub struct DigestReport {
    pub comparisons: Vec<DigestComparison>,
}

/// Digest both messages with every algorithm.
pub fn run_digest_lab(original: &str, modified: &str) -> DigestReport {
    let comparisons = Algorithm::ALL
        .iter()
        .map(|&algorithm| DigestComparison {
            algorithm,
            original: algorithm.digest(text_bytes(original)),
            modified: algorithm.digest(text_bytes(modified)),
        })
        .collect::<Vec<_>>();
    debug!(algorithms = comparisons.len(), "digest lab finished");
    DigestReport { comparisons }
}

impl fmt::Display for DigestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Original message ---")?;
        for c in &self.comparisons {
            writeln!(f, "{:<9}: {}", c.algorithm.name(), to_hex(&c.original))?;
        }
        writeln!(f)?;
        writeln!(f, "--- Modified message ---")?;
        for c in &self.comparisons {
            writeln!(f, "{:<9}: {}", c.algorithm.name(), to_hex(&c.modified))?;
        }
        writeln!(f)?;
        writeln!(f, "--- Avalanche effect ---")?;
        for c in &self.comparisons {
            writeln!(
                f,
                "{:<9}: same = {}, {}/{} bits differ",
                c.algorithm.name(),
                c.same(),
                c.differing_bits(),
                c.total_bits()
            )?;
        }
        write!(f, "(* SHA-512 here is SHA-256(m) || SHA-256(reversed m), not real SHA-512)")
    }
}

/// Receiver's conclusion about the MAC it was handed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MacVerdict {
    Authentic,
    Tampered,
    /// The received MAC was not hex.
    Malformed(String),
}

#[derive(Clone, Debug)]
pub struct MacReport {
    pub sent_mac: String,
    pub verdict: MacVerdict,
}

/// Sender MACs `message`; receiver checks `received_mac` over `received_message`.
pub fn run_mac_lab(config: &LabConfig, message: &str, received_message: &str, received_mac: &str) -> MacReport {
    let key = text_bytes(&config.mac_key);
    let sent_mac = hmac_sha256(key, text_bytes(message));

    let verdict = match verify_hmac_sha256(key, text_bytes(received_message), received_mac) {
        Ok(true) => MacVerdict::Authentic,
        Ok(false) => MacVerdict::Tampered,
        Err(err) => MacVerdict::Malformed(err.to_string()),
    };
    info!(?verdict, "mac lab finished");

    MacReport { sent_mac, verdict }
}

impl fmt::Display for MacReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Sender =====")?;
        writeln!(f, "Generated MAC: {}", self.sent_mac)?;
        writeln!(f)?;
        writeln!(f, "===== Receiver =====")?;
        match &self.verdict {
            MacVerdict::Authentic => write!(f, "MAC verified: message is authentic and untampered"),
            MacVerdict::Tampered => write!(f, "MAC verification failed: message tampered or wrong key"),
            MacVerdict::Malformed(reason) => write!(f, "MAC verification failed: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_lab_detects_tampering() {
        let report = run_signature_lab(&LabConfig::default(), "Hello world", "Hello wor1d").unwrap();
        assert!(report.verified);
        assert_eq!(report.tamper, TamperOutcome::Rejected);
        assert_eq!(to_hex(&report.signature), "0391");
        let shown = report.to_string();
        assert!(shown.contains("Public key:  (65537, 3233)"));
        assert!(shown.contains("Signature (hex): 0391"));
    }

    #[test]
    fn signature_lab_unchanged_message() {
        let report = run_signature_lab(&LabConfig::default(), "same", "same").unwrap();
        assert_eq!(report.tamper, TamperOutcome::Unchanged);
    }

    #[test]
    fn signature_lab_finds_reduction_collisions() {
        // With n = 3233 about one message in 3233 shares the reduced digest of "m0".
        let config = LabConfig::default();
        let (_, private) = generate_rsa_keys(&config.p, &config.q).unwrap();
        let target = rsa_sign(b"m0", &private).unwrap();
        let twin = (1..100_000)
            .map(|i| format!("m{i}"))
            .find(|m| rsa_sign(m.as_bytes(), &private).unwrap() == target)
            .unwrap();
        let report = run_signature_lab(&config, "m0", &twin).unwrap();
        assert_eq!(report.tamper, TamperOutcome::Collision);
    }

    #[test]
    fn signature_lab_rejects_bad_primes() {
        let config = LabConfig {
            q: crate::math::BigUint::zero(),
            ..LabConfig::default()
        };
        assert!(run_signature_lab(&config, "a", "b").is_err());
    }

    #[test]
    fn digest_lab_reports_all_three() {
        let report = run_digest_lab("network security", "network secur1ty");
        assert_eq!(report.comparisons.len(), 3);
        for c in &report.comparisons {
            assert!(!c.same());
            assert!(c.differing_bits() > 0);
        }
        assert_eq!(report.comparisons[2].total_bits(), 512);
        assert!(report.to_string().contains("not real SHA-512"));
    }

    #[test]
    fn digest_lab_identical_messages() {
        let report = run_digest_lab("abc", "abc");
        assert!(report.comparisons.iter().all(|c| c.same() && c.differing_bits() == 0));
        assert!(report.to_string().contains("SHA-1    : a9993e364706816aba3e25717850c26c9cd0d89d"));
    }

    #[test]
    fn bit_difference_counts() {
        assert_eq!(bit_difference(&[0xff, 0x00], &[0x0f, 0x01]), 5);
    }

    #[test]
    fn mac_lab_verdicts() {
        let config = LabConfig::default();
        let sent = run_mac_lab(&config, "confidential data", "", "").sent_mac;
        assert_eq!(sent, "00e0f1d159962c08d8cc92404f31197046b2c2d1e9ec767531a00af2067e4ee9");

        let ok = run_mac_lab(&config, "confidential data", "confidential data", &sent);
        assert_eq!(ok.verdict, MacVerdict::Authentic);

        let bad = run_mac_lab(&config, "confidential data", "confidential dat4", &sent);
        assert_eq!(bad.verdict, MacVerdict::Tampered);

        let junk = run_mac_lab(&config, "confidential data", "confidential data", "xyz");
        assert!(matches!(junk.verdict, MacVerdict::Malformed(_)));
    }
}
