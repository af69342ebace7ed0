//! Cipherbin command-line client.
//!
//! # Usage
//!
//! ```bash
//! # Write a message in $EDITOR, encrypt it, print the one-time link
//! cipherbin create
//!
//! # Decrypt a one-time link (destroys the message server-side)
//! cipherbin read "https://cipherb.in/msg?bin=<identifier>;<key>"
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "terminal output is this crate's user interface"
)]

mod editor;
mod opener;

use cipherbin_client::{
    ClientError, Config, CryptoError, HttpStore, MessageMetadata, Messenger,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Message shown when a link cannot be parsed as a cipherbin link.
const INVALID_LINK: &str = "Sorry, that seems to be an invalid cipherbin link";

/// Message shown when a fetch fails; deliberately does not distinguish
/// already-read from never-existed.
const CONSUMED_OR_MISSING: &str =
    "Sorry, this message has either already been viewed and destroyed or it never existed at all";

/// Cipherbin one-time encrypted messages
#[derive(Parser, Debug)]
#[command(name = "cipherbin")]
#[command(about = "Encrypted messages that self destruct after one read")]
#[command(version)]
struct Args {
    /// Browser-facing base url embedded in links
    #[arg(long, default_value = Config::DEFAULT_BROWSER_BASE_URL)]
    browser_url: String,

    /// API base url messages are stored at
    #[arg(long, default_value = Config::DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Create a new encrypted message
    ///
    /// Opens your $EDITOR (vim if unset) to capture the message. Type or
    /// paste the content, save, and close; the message is encrypted and the
    /// one-time-use link printed.
    Create {
        /// Contact email stored with the message
        #[arg(long)]
        email: Option<String>,

        /// Reference name stored with the message
        #[arg(long)]
        reference_name: Option<String>,

        /// Access password enforced by the web app
        #[arg(long)]
        password: Option<String>,
    },

    /// Read a cipherbin encrypted message
    ///
    /// Takes the one-time link, fetches the ciphertext (destroying it
    /// server-side) and prints the decrypted message in the terminal.
    Read {
        /// The cipherbin link to read
        url: String,

        /// Open the link in the browser instead of decrypting here
        #[arg(short, long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    if let Err(message) = run(args).await {
        eprintln!("{}", message.red());
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let config = Config::new(&args.browser_url, &args.api_url);
    let store = HttpStore::new(&config.api_base_url).map_err(|err| err.to_string())?;
    let messenger = Messenger::new(store, config.clone());

    match args.command {
        CliCommand::Create { email, reference_name, password } => {
            let metadata = MessageMetadata { email, reference_name, password };
            create(&messenger, metadata).await
        },
        CliCommand::Read { url, open } => read(&messenger, &config, &url, open).await,
    }
}

/// Capture a message, encrypt and store it, print the one-time link.
async fn create(
    messenger: &Messenger<HttpStore>,
    metadata: MessageMetadata,
) -> Result<(), String> {
    let plaintext =
        editor::capture_input(&editor::preferred_editor()).map_err(|err| err.to_string())?;
    tracing::debug!(bytes = plaintext.len(), "captured message from editor");

    let created = messenger.create(&plaintext, metadata).await.map_err(|err| friendly(&err))?;

    println!("Warning! This message will self destruct after reading it.");
    println!("{}", created.url);
    Ok(())
}

/// Resolve a one-time link: open it in the browser, or fetch and decrypt.
async fn read(
    messenger: &Messenger<HttpStore>,
    config: &Config,
    url: &str,
    open: bool,
) -> Result<(), String> {
    if open {
        // Validate the link shape before handing it to the browser.
        cipherbin_link::decode(url, &config.browser_base_url)
            .map_err(|_| INVALID_LINK.to_string())?;

        return opener::open_in_browser(url).map_err(|err| {
            format!("Sorry, there was an error opening the message in your browser: {err}")
        });
    }

    let plaintext = messenger.read(url).await.map_err(|err| friendly(&err))?;

    println!("{}", String::from_utf8_lossy(&plaintext));
    Ok(())
}

/// Map lifecycle errors onto the messages the service shows users.
fn friendly(err: &ClientError) -> String {
    match err {
        ClientError::Link(_) | ClientError::Crypto(CryptoError::InvalidKey { .. }) => {
            INVALID_LINK.to_string()
        },
        ClientError::NotFoundOrConsumed => CONSUMED_OR_MISSING.to_string(),
        ClientError::Crypto(inner) => inner.to_string(),
        ClientError::Store(inner) => inner.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use cipherbin_client::{LinkError, StoreError};

    use super::*;

    #[test]
    fn link_errors_read_as_invalid_link() {
        let err = ClientError::Link(LinkError::EmptyKey);
        assert_eq!(friendly(&err), INVALID_LINK);
    }

    #[test]
    fn bad_key_tokens_read_as_invalid_link() {
        let err = ClientError::Crypto(CryptoError::InvalidKey { reason: "too short".to_string() });
        assert_eq!(friendly(&err), INVALID_LINK);
    }

    #[test]
    fn consumed_and_missing_share_one_message() {
        assert_eq!(friendly(&ClientError::NotFoundOrConsumed), CONSUMED_OR_MISSING);
    }

    #[test]
    fn store_failures_surface_their_own_description() {
        let err = ClientError::Store(StoreError::Rejected { status: 500 });
        assert!(friendly(&err).contains("500"));
    }
}
