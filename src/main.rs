use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crypto_lab::config::{LabConfig, DEFAULT_MAC_KEY, DEFAULT_P, DEFAULT_Q};
use crypto_lab::encoding::{parse_integer, text_bytes, to_hex};
use crypto_lab::lab::{run_digest_lab, run_mac_lab, run_signature_lab, Algorithm};
use crypto_lab::{hmac_sha256, logging, BigUint, CryptoError};

/// Hashing, HMAC and textbook RSA labs. Toy cryptography, not for real secrets.
#[derive(Parser, Debug)]
#[command(name = "crypto-lab", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: ConfigArgs,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// First RSA prime.
    #[arg(long, env = "CRYPTO_LAB_P", default_value_t = BigUint::from_u64(DEFAULT_P), value_parser = parse_integer, global = true)]
    p: BigUint,

    /// Second RSA prime.
    #[arg(long, env = "CRYPTO_LAB_Q", default_value_t = BigUint::from_u64(DEFAULT_Q), value_parser = parse_integer, global = true)]
    q: BigUint,

    /// Shared HMAC secret.
    #[arg(long, env = "CRYPTO_LAB_MAC_KEY", default_value = DEFAULT_MAC_KEY, hide_env_values = true, global = true)]
    mac_key: String,
}

impl From<ConfigArgs> for LabConfig {
    fn from(args: ConfigArgs) -> Self {
        LabConfig {
            p: args.p,
            q: args.q,
            mac_key: args.mac_key,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign a message, verify it, then check the signature against a tampered copy.
    Sign {
        message: String,
        tampered: String,
    },

    /// Compare SHA-1, SHA-256 and the derived 512-bit digest of two messages.
    Digest {
        original: String,
        modified: String,
    },

    /// Compute a MAC as sender and check it as receiver.
    Mac {
        message: String,

        /// Message the receiver got. Defaults to MESSAGE.
        #[arg(long)]
        received_message: Option<String>,

        /// MAC the receiver got, as hex. Defaults to the sender's MAC.
        #[arg(long)]
        received_mac: Option<String>,
    },

    /// Print one digest of a message.
    Hash {
        #[arg(long, value_enum, default_value = "sha256")]
        algorithm: AlgorithmArg,

        message: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AlgorithmArg {
    Sha1,
    Sha256,
    /// SHA-256(m) || SHA-256(reversed m), not real SHA-512
    Sha512,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha1 => Algorithm::Sha1,
            AlgorithmArg::Sha256 => Algorithm::Sha256,
            AlgorithmArg::Sha512 => Algorithm::Derived512,
        }
    }
}

fn run(command: Command, config: &LabConfig) -> Result<String, CryptoError> {
    match command {
        Command::Sign { message, tampered } => {
            Ok(run_signature_lab(config, &message, &tampered)?.to_string())
        }
        Command::Digest { original, modified } => Ok(run_digest_lab(&original, &modified).to_string()),
        Command::Mac {
            message,
            received_message,
            received_mac,
        } => {
            let received_message = received_message.unwrap_or_else(|| message.clone());
            let received_mac = received_mac
                .unwrap_or_else(|| hmac_sha256(text_bytes(&config.mac_key), text_bytes(&message)));
            Ok(run_mac_lab(config, &message, &received_message, &received_mac).to_string())
        }
        Command::Hash { algorithm, message } => {
            Ok(to_hex(Algorithm::from(algorithm).digest(text_bytes(&message))))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = LabConfig::from(cli.config);
    tracing::debug!(?config, "starting");

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
