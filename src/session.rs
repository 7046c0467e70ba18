//! Terminal front end for the portfolio page
//!
//! [`PortfolioSession`] plays the page top to bottom into any [`Write`]r:
//! the typed hero, the about and projects blocks, the contact handshake, and
//! finally a read-dispatch loop over the contact terminal.

use crate::commands::{is_exit_command, CommandDispatcher, CommandLogEntry, LogCategory};
use crate::config::Config;
use crate::error::Result;
use crate::opener::UriOpener;
use crate::page::{self, HeroBlock, Section};
use crate::portfolio::{ConnectionState, ConnectionStatus, Portfolio, ProjectVault, SkillStatus};
use crate::reveal::{Pacing, RevealController, RevealEvent, RevealHandle};
use crate::scene::GridScene;
use crate::state::{ApplicationState, ApplicationStatus};
use crate::style::{Styler, Tone};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

/// Width of the skill matrix bars
const SKILL_BAR_WIDTH: usize = 20;

/// One visitor's pass over the page
pub struct PortfolioSession<W: Write> {
    config: Config,
    out: W,
    styler: Styler,
    pacing: Pacing,
    state: ApplicationState,
    portfolio: Portfolio,
    vault: ProjectVault,
    connection: ConnectionState,
    dispatcher: CommandDispatcher,
    scene: GridScene,
    opener: Arc<dyn UriOpener>,
    deferred: Vec<JoinHandle<()>>,
}

impl<W: Write> PortfolioSession<W> {
    pub fn new(config: Config, out: W, opener: Arc<dyn UriOpener>) -> Self {
        let portfolio = Portfolio::builtin(&config.contact);
        let vault = ProjectVault::new(&portfolio);
        let dispatcher = CommandDispatcher::new(&config.contact);
        let scene = GridScene::from_config(&config.scene);
        let styler = Styler::new(config.ui.color, config.ui.theme);
        let pacing = if config.ui.animate {
            Pacing::Timed
        } else {
            Pacing::Instant
        };

        Self {
            state: ApplicationState::new(&config.ui),
            config,
            out,
            styler,
            pacing,
            portfolio,
            vault,
            connection: ConnectionState::new(),
            dispatcher,
            scene,
            opener,
            deferred: Vec::new(),
        }
    }

    /// Play the intro, then serve commands from `input` until exit or EOF
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        self.play_intro().await?;

        let mut lines = input.lines();
        loop {
            self.write_prompt()?;
            let Some(line) = lines.next_line().await? else {
                debug!("Input closed");
                break;
            };
            if !self.handle_line(&line)? {
                break;
            }
        }

        self.state.set_status(ApplicationStatus::ShuttingDown);
        Ok(())
    }

    /// Show every section in order, ending with an unlocked contact terminal
    pub async fn play_intro(&mut self) -> Result<()> {
        self.play_hero().await?;
        self.render_about()?;
        self.render_projects()?;
        self.play_contact().await?;
        self.state.set_status(ApplicationStatus::Running);
        Ok(())
    }

    /// Typed hero: boot line, heading, role, tagline, buttons
    pub async fn play_hero(&mut self) -> Result<()> {
        self.state.page.reveal(Section::Hero);
        let styler = self.styler;

        writeln!(
            self.out,
            "{}",
            styler.paint(
                &format!(
                    "System Status: ONLINE | Grid: {} lines, {} nodes",
                    self.scene.lines.len(),
                    self.scene.nodes.len()
                ),
                Tone::Muted,
            )
        )?;

        let handle = RevealController::start_with(page::hero_chain(&self.config.reveal)?, self.pacing);
        let tones = [Tone::Green, Tone::Green, Tone::Cyan];
        let completed = play_chain(&mut self.out, &styler, &tones, handle, |out, step| {
            render_hero_block(out, &styler, step)
        })
        .await?;

        debug!("Hero finished with {} steps", completed);
        Ok(())
    }

    /// `whoami`, expertise cards, and the skill matrix
    pub fn render_about(&mut self) -> Result<()> {
        self.state.page.reveal(Section::About);
        let styler = self.styler;
        let out = &mut self.out;
        write_header(out, &styler, Section::About)?;

        for (i, line) in self.portfolio.profile.lines().iter().enumerate() {
            writeln!(out, "{}", styler.paint(line, Tone::rotating(i)))?;
        }
        writeln!(out, "{}", self.portfolio.profile.summary)?;
        writeln!(out)?;

        for (i, item) in self.portfolio.expertise.iter().enumerate() {
            writeln!(
                out,
                "{} {}",
                styler.bold(&item.title, Tone::rotating(i)),
                styler.paint(&item.description, Tone::Muted)
            )?;
        }
        writeln!(out)?;

        writeln!(out, "{}", styler.bold("SKILL_MATRIX.exe", Tone::Cyan))?;
        for (i, category) in self.portfolio.skills.iter().enumerate() {
            let tone = Tone::rotating(i);
            writeln!(out, "{}", styler.bold(&category.name, tone))?;
            for skill in &category.skills {
                let (bar_tone, tag) = match skill.status {
                    SkillStatus::Proficient => (tone, ""),
                    SkillStatus::Learning => (Tone::Orange, " [learning]"),
                };
                writeln!(
                    out,
                    "  {:<24} {} {:>3}%{}",
                    skill.name,
                    styler.paint(&skill.bar(SKILL_BAR_WIDTH), bar_tone),
                    skill.level,
                    styler.paint(tag, Tone::Orange)
                )?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    /// Project listing; each card is decrypted as it is listed
    pub fn render_projects(&mut self) -> Result<()> {
        self.state.page.reveal(Section::Projects);
        let styler = self.styler;
        write_header(&mut self.out, &styler, Section::Projects)?;

        writeln!(self.out, "{}", styler.paint("Scanning project directory...", Tone::Cyan))?;
        writeln!(self.out, "{}", styler.paint(&self.vault.status_line(), Tone::Green))?;
        writeln!(self.out, "{}", styler.paint("Access level: AUTHORIZED", Tone::Purple))?;
        writeln!(self.out)?;

        let ids: Vec<u32> = self.vault.projects().iter().map(|p| p.id).collect();
        for (i, id) in ids.into_iter().enumerate() {
            let project = self.vault.decrypt(id)?;
            let tone = Tone::rotating(i);
            writeln!(
                self.out,
                "{} {} {}",
                styler.paint("[DECRYPTED]", Tone::Green),
                styler.bold(&project.title, tone),
                styler.paint(&format!("({})", project.category.label()), Tone::Muted)
            )?;
            writeln!(self.out, "  {}", project.description)?;
            writeln!(
                self.out,
                "  {}",
                styler.paint(&project.tech.join(" · "), tone)
            )?;
            for url in project.github_url.iter().chain(project.live_url.iter()) {
                writeln!(self.out, "  {}", styler.paint(url, Tone::Muted))?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Handshake, contact cards, and the built-in help listing
    pub async fn play_contact(&mut self) -> Result<()> {
        self.state.page.reveal(Section::Contact);
        let styler = self.styler;
        write_header(&mut self.out, &styler, Section::Contact)?;
        write_status(&mut self.out, &styler, ConnectionStatus::Idle)?;
        write_status(&mut self.out, &styler, ConnectionStatus::Connecting)?;

        let handle = RevealController::start_with(
            page::connecting_chain(&self.config.reveal)?,
            self.pacing,
        );
        let delay = match self.pacing {
            Pacing::Timed => self.config.contact.handshake_delay(),
            Pacing::Instant => std::time::Duration::ZERO,
        };

        let Self {
            out, connection, ..
        } = &mut *self;
        let (typed, status) = tokio::join!(
            play_chain(out, &styler, &[Tone::Cyan], handle, |_, _| Ok(())),
            connection.connect(delay)
        );
        typed?;
        write_status(&mut self.out, &styler, status)?;
        writeln!(self.out)?;

        for (i, card) in self.portfolio.contacts.iter().enumerate() {
            writeln!(
                self.out,
                "{:<10} {} {}",
                styler.bold(&card.name, Tone::rotating(i)),
                styler.paint(&card.description, Tone::Muted),
                styler.paint(&card.uri, Tone::rotating(i))
            )?;
        }
        writeln!(self.out)?;

        let help = self.dispatcher.dispatch("connect --help");
        self.render_entries(&help, true)?;
        Ok(())
    }

    /// Process one submitted line; `Ok(false)` ends the session
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        if is_exit_command(line) {
            self.state.set_status(ApplicationStatus::ShuttingDown);
            writeln!(self.out, "{}", self.styler.paint("Connection closed.", Tone::Muted))?;
            return Ok(false);
        }

        if !self.connection.terminal_unlocked() {
            warn!("Input before handshake completed: {}", line.trim());
            writeln!(
                self.out,
                "{}",
                self.styler
                    .paint("Terminal locked: no secure connection yet.", Tone::Red)
            )?;
            return Ok(true);
        }

        let entries = self.dispatcher.dispatch(line);
        if entries.is_empty() {
            write!(self.out, "{}", self.styler.clear_screen())?;
        }
        // The visitor's own keystrokes already show the command
        self.render_entries(&entries, false)?;
        self.schedule_opens();
        Ok(true)
    }

    fn render_entries(&mut self, entries: &[CommandLogEntry], with_echo: bool) -> Result<()> {
        for entry in entries {
            if entry.category == LogCategory::Echo && !with_echo {
                continue;
            }
            writeln!(
                self.out,
                "{}",
                self.styler
                    .paint(&entry.text, Tone::for_category(entry.category))
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Open queued links after their delay, without blocking the terminal
    fn schedule_opens(&mut self) {
        for pending in self.dispatcher.take_pending_opens() {
            let opener = Arc::clone(&self.opener);
            self.deferred.push(tokio::spawn(async move {
                tokio::time::sleep(pending.delay).await;
                if let Err(e) = opener.open(&pending.uri) {
                    warn!("Could not open {}: {}", pending.uri, e);
                }
            }));
        }
    }

    fn write_prompt(&mut self) -> Result<()> {
        write!(
            self.out,
            "{} ",
            self.styler.paint(self.dispatcher.prompt(), Tone::Green)
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Wait for outstanding link opens and hand back the writer
    pub async fn finish(self) -> Result<W> {
        let pending = self.deferred.len();
        for result in futures::future::join_all(self.deferred).await {
            if let Err(e) = result {
                warn!("Deferred open task failed: {}", e);
            }
        }
        debug!("Session finished, {} deferred opens settled", pending);
        Ok(self.out)
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn vault(&self) -> &ProjectVault {
        &self.vault
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn scene(&self) -> &GridScene {
        &self.scene
    }
}

/// Print a chain's characters as they arrive; returns the completed step count
async fn play_chain<W, F>(
    out: &mut W,
    styler: &Styler,
    tones: &[Tone],
    mut handle: RevealHandle,
    mut on_step_complete: F,
) -> Result<usize>
where
    W: Write,
    F: FnMut(&mut W, usize) -> std::io::Result<()>,
{
    let mut completed = 0;
    let mut buf = [0u8; 4];

    while let Some(event) = handle.next_event().await {
        match event {
            RevealEvent::Char { step, ch } => {
                let tone = tones.get(step).copied().unwrap_or(Tone::Plain);
                write!(out, "{}", styler.paint(ch.encode_utf8(&mut buf), tone))?;
                out.flush()?;
            }
            RevealEvent::StepComplete { step } => {
                writeln!(out)?;
                completed += 1;
                on_step_complete(out, step)?;
            }
            RevealEvent::ChainComplete => break,
        }
    }

    Ok(completed)
}

fn render_hero_block<W: Write>(out: &mut W, styler: &Styler, step: usize) -> std::io::Result<()> {
    match HeroBlock::unlocked_by(step) {
        Some(HeroBlock::Title) => {
            writeln!(out)?;
            writeln!(out, "{}", styler.bold("CYBER", Tone::Cyan))?;
            writeln!(out, "{}", styler.bold("ENGINEER", Tone::Purple))?;
        }
        Some(HeroBlock::Buttons) => {
            writeln!(out)?;
            writeln!(
                out,
                "{}   {}",
                styler.bold("[ Initialize System ]", Tone::Cyan),
                styler.paint("[ Access Portfolio ]", Tone::Green)
            )?;
            writeln!(out, "{}", styler.paint("SCROLL TO CONTINUE ↓", Tone::Muted))?;
            writeln!(out)?;
        }
        Some(HeroBlock::Subtitle) | None => {}
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, styler: &Styler, section: Section) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {}",
        styler.paint("root@cyberport:~$", Tone::Green),
        section.header_command()
    )
}

fn write_status<W: Write>(
    out: &mut W,
    styler: &Styler,
    status: ConnectionStatus,
) -> std::io::Result<()> {
    for (i, line) in status.lines().iter().enumerate() {
        writeln!(out, "{}", styler.paint(line, Tone::rotating(i)))?;
    }
    Ok(())
}
