#![forbid(unsafe_code)]
#![warn(clippy::default_trait_access)]

mod defaults;
mod output;

use anyhow::{Context, Result};
use passwd_util::HashType;
use structopt::StructOpt;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Generate an access token for a JupyterLab install
#[derive(StructOpt)]
struct Options {
    /// The password you want to use for authentication
    #[structopt(short, long)]
    password: String,

    /// hash type (argon2, sha256, sha512, pbkdf2-sha256, pbkdf2-sha512, scrypt)
    #[structopt(short, long, default_value = "argon2")]
    algorithm: HashType,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER)),
        )
        .init();
}

fn run(options: Options) -> Result<()> {
    tracing::debug!(algorithm = %options.algorithm, "create access token");
    let token = options
        .algorithm
        .create_token(&options.password)
        .with_context(|| format!("create {} token", options.algorithm))?;

    let stdout = std::io::stdout();
    output::write_token(stdout.lock(), &token).context("write token to stdout")
}

fn main() {
    init_tracing();

    let options: Options = Options::from_args();
    if let Err(err) = run(options) {
        tracing::error!(error = ?err, "failed to generate access token");
        std::process::exit(1);
    }
}
