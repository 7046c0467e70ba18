//! End-to-end tests for a visitor session
//!
//! The session runs with animation off so the whole page plays instantly,
//! colours off so assertions can match plain text, and a recording opener
//! so no browser is launched.

use cyberport::commands::KONAMI_LINES;
use cyberport::config::Config;
use cyberport::opener::RecordingOpener;
use cyberport::page;
use cyberport::portfolio::ConnectionStatus;
use cyberport::state::ApplicationStatus;
use cyberport::PortfolioSession;
use std::sync::Arc;

fn quiet_config() -> Config {
    let mut config = Config::default();
    config.ui.animate = false;
    config.ui.color = false;
    config.contact.open_delay_ms = 0;
    config.scene.seed = Some(7);
    config
}

async fn run_session(input: &'static [u8]) -> (String, RecordingOpener) {
    let opener = RecordingOpener::new();
    let mut session = PortfolioSession::new(quiet_config(), Vec::new(), Arc::new(opener.clone()));
    session.run(input).await.unwrap();
    let out = session.finish().await.unwrap();
    (String::from_utf8(out).unwrap(), opener)
}

#[tokio::test]
async fn test_page_plays_every_section() {
    let (output, _) = run_session(b"exit\n").await;

    for needle in [
        page::BOOT_LINE,
        page::TITLE_LINE,
        page::TAGLINE,
        page::CONNECTING_LINE,
        "Establishing secure connection...",
        "Available commands:",
        "Connection closed.",
    ] {
        assert!(output.contains(needle), "missing {:?} in output", needle);
    }
}

#[tokio::test]
async fn test_commands_render_and_open_links() {
    let (output, opener) = run_session(b"help\nGitHub\nbogus\nexit\n").await;

    assert!(output.contains("Opening GitHub profile:"));
    assert!(output.contains("Command not found: bogus. Type 'help' for available commands."));
    assert_eq!(
        opener.opened(),
        vec![Config::default().contact.github_uri.clone()]
    );
}

#[tokio::test]
async fn test_clear_then_continue() {
    let opener = RecordingOpener::new();
    let mut session = PortfolioSession::new(quiet_config(), Vec::new(), Arc::new(opener));
    session.play_intro().await.unwrap();

    assert!(session.handle_line("help").unwrap());
    assert!(session.handle_line("clear").unwrap());
    assert!(session.dispatcher().log().is_empty());

    assert!(session.handle_line("konami").unwrap());
    let texts: Vec<_> = session
        .dispatcher()
        .log()
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(texts.len(), 1 + KONAMI_LINES.len());
    assert_eq!(&texts[1..], KONAMI_LINES);
}

#[tokio::test]
async fn test_session_ends_on_eof() {
    let opener = RecordingOpener::new();
    let mut session = PortfolioSession::new(quiet_config(), Vec::new(), Arc::new(opener));
    session.run(&b"email\n"[..]).await.unwrap();

    assert_eq!(*session.state().status(), ApplicationStatus::ShuttingDown);
    assert_eq!(session.connection().status(), ConnectionStatus::Connected);
    assert!(session.state().page.is_complete());
    assert_eq!(session.vault().encrypted_count(), 0);
    // The built-in help listing is in the log ahead of the visitor's command
    assert!(session.dispatcher().log().len() > 2);
}

#[tokio::test(start_paused = true)]
async fn test_timed_session_waits_for_handshake() {
    let mut config = quiet_config();
    config.ui.animate = true;
    config.contact.handshake_delay_ms = 2000;

    let opener = RecordingOpener::new();
    let mut session = PortfolioSession::new(config, Vec::new(), Arc::new(opener.clone()));
    let started = tokio::time::Instant::now();
    session.play_intro().await.unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_millis(2000));
    assert!(session.connection().terminal_unlocked());
    assert!(session.handle_line("discord").unwrap());

    let out = session.finish().await.unwrap();
    assert!(!out.is_empty());
    assert_eq!(opener.opened().len(), 1);
}
