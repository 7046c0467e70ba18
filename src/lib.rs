//! CyberPort - an animated portfolio page for the terminal
//!
//! This library provides the pieces behind the `cyberport` binary: typed
//! text reveals, the contact section's command terminal, the portfolio
//! content, and a session that plays the whole page into a terminal.
//!
//! ## Module Organization
//!
//! ### Core Behaviour
//!
//! - [`reveal`] - Character-by-character reveal chains with cancellable timers
//! - [`commands`] - Command table and dispatcher for the contact terminal
//! - [`opener`] - Handing contact links to the host environment
//!
//! ### Page
//!
//! - [`page`] - Sections, hero reveal chain, page state
//! - [`portfolio`] - Profile, skills, projects, contact handshake
//! - [`scene`] - Background grid geometry
//! - [`session`] - Terminal front end tying it all together
//!
//! ### Utilities
//!
//! - [`config`] - Configuration loading and validation
//! - [`mod@error`] - Error types and Result aliases
//! - [`state`] - Application state
//! - [`style`] - ANSI colouring
//!
//! ## Quick Start
//!
//! ```no_run
//! use cyberport::commands::CommandDispatcher;
//!
//! let mut terminal = CommandDispatcher::default();
//! for entry in terminal.dispatch("help") {
//!     println!("{}", entry.text);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Everything runs on a tokio runtime with a single logical actor. The only
//! suspending work is the per-character reveal delay and the cosmetic delay
//! before a contact link opens; both run as tokio tasks owned by a handle.

#[macro_use]
extern crate tracing;

pub mod commands;
pub mod config;
pub mod error;
pub mod opener;
pub mod page;
pub mod portfolio;
pub mod reveal;
pub mod scene;
pub mod session;
pub mod state;
pub mod style;

// Re-exports for core functionality
pub use commands::{CommandDispatcher, CommandLogEntry, LogCategory};
pub use config::Config;
pub use error::{Error, Result};
pub use reveal::{RevealChain, RevealController, RevealEvent, RevealStep};
pub use session::PortfolioSession;

pub use config::loader::ConfigLoader;

/// The current version of CyberPort from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration from the default search paths
///
/// Falls back to the built-in defaults (with a warning) when a file exists
/// but cannot be loaded or fails validation.
///
/// # Examples
///
/// ```no_run
/// let config = cyberport::init();
/// assert!(config.reveal.boot_interval_ms > 0);
/// ```
pub fn init() -> Config {
    info!("Initializing {} v{}", NAME, VERSION);

    match ConfigLoader::load() {
        Ok(config) => {
            debug!("Configuration loaded");
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    }
}

/// Load configuration from an explicit file
///
/// Unlike [`init`], a missing or invalid file is an error: the caller asked
/// for that file specifically.
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    let config = ConfigLoader::load_from_path(config_path).map_err(|e| {
        error!(
            "Failed to load custom configuration from {}: {}",
            config_path.display(),
            e
        );
        e
    })?;

    info!("Custom configuration loaded from: {}", config_path.display());
    Ok(config)
}

/// User-facing explanation of a startup failure
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the path passed to --config\n• Ensure file permissions are correct\n• Run without --config to use defaults",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Ensure file is valid {}",
                format, reason, format
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Check configuration value\n• Remove the field to use its default",
                field, reason
            )
        }
        Error::InvalidRevealInterval { text } => {
            format!(
                "Configuration Error: '{}' has a zero typing interval\n\nTry:\n• Set every reveal.*_interval_ms above 0",
                text
            )
        }
        Error::Io(err) => {
            format!(
                "I/O Error: {}\n\nTry:\n• Check that the terminal is still attached\n• Verify file permissions",
                err
            )
        }
        _ => {
            format!(
                "Unexpected Error: {}\n\nPlease report this issue with debug logs enabled",
                error
            )
        }
    }
}
