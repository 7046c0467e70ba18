//! CyberPort - an animated portfolio page for the terminal
//!
//! Plays the portfolio into stdout and serves the contact terminal on stdin.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, error, info};

use cyberport::config::Config;
use cyberport::opener::{RecordingOpener, SystemOpener, UriOpener};
use cyberport::portfolio::Portfolio;
use cyberport::scene::GridScene;
use cyberport::PortfolioSession;

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Skip typing delays
    no_animation: bool,
    /// Disable ANSI colours
    no_color: bool,
    /// Record links instead of opening them
    dry_run: bool,
    /// Fixed seed for the background scene
    seed: Option<u64>,
    /// Print the portfolio content as JSON and exit
    dump_content: bool,
    /// Print the background scene as JSON and exit
    dump_scene: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let path = args.get(i + 1).context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--seed" => {
                    let seed = args.get(i + 1).context("Missing seed value")?;
                    app_args.seed = Some(
                        seed.parse()
                            .with_context(|| format!("Invalid seed: {}", seed))?,
                    );
                    i += 1;
                }
                "--debug" | "-d" => app_args.debug = true,
                "--no-animation" => app_args.no_animation = true,
                "--no-color" => app_args.no_color = true,
                "--dry-run" => app_args.dry_run = true,
                "--dump-content" => app_args.dump_content = true,
                "--dump-scene" => app_args.dump_scene = true,
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("{} v{}", cyberport::NAME, cyberport::VERSION);
                    process::exit(0);
                }
                arg => anyhow::bail!("Unknown option: {}", arg),
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("CyberPort - {}", cyberport::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    cyberport [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("        --no-animation     Print reveals without typing delays");
    println!("        --no-color         Disable ANSI colours");
    println!("        --dry-run          Log contact links instead of opening them");
    println!("        --seed <N>         Seed for the background scene");
    println!("        --dump-content     Print portfolio content as JSON and exit");
    println!("        --dump-scene       Print the background scene as JSON and exit");
    println!("    -h, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    CyberPort looks for config.toml or config.json in:");
    println!("    1. Path specified with --config");
    println!("    2. <platform config dir>/cyberport/");
    println!("    3. $XDG_CONFIG_HOME/cyberport/");
    println!("    4. ~/.cyberport/ and ~/.config/cyberport/");
    println!("    5. ./.cyberport/");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    // stdout belongs to the page
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Load configuration and apply command line overrides
fn load_configuration(args: &AppArgs) -> cyberport::Result<Config> {
    let mut config = match &args.config_path {
        Some(path) => cyberport::init_with_config(path)?,
        None => cyberport::init(),
    };

    if args.no_animation {
        config.ui.animate = false;
    }
    if args.no_color {
        config.ui.color = false;
    }
    if args.seed.is_some() {
        config.scene.seed = args.seed;
    }

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_help();
        process::exit(1);
    });

    init_logging(args.debug);

    let config = match load_configuration(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("{}", cyberport::handle_startup_error(&e));
            process::exit(1);
        }
    };

    if args.dump_content {
        let content = serde_json::to_string_pretty(&Portfolio::builtin(&config.contact))?;
        println!("{}", content);
        return Ok(());
    }

    if args.dump_scene {
        let scene = serde_json::to_string_pretty(&GridScene::from_config(&config.scene))?;
        println!("{}", scene);
        return Ok(());
    }

    let opener: Arc<dyn UriOpener> = if args.dry_run {
        Arc::new(RecordingOpener::new())
    } else {
        Arc::new(SystemOpener)
    };

    info!("Starting {} v{}", cyberport::NAME, cyberport::VERSION);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = PortfolioSession::new(config, io::stdout(), opener);

    let run = tokio::select! {
        result = session.run(stdin) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            Ok(())
        }
    };
    run.context("Portfolio session failed")?;

    let mut out = session.finish().await?;
    writeln!(out)?;
    info!("{} shutdown complete", cyberport::NAME);
    Ok(())
}
