//! Page composition: sections, hero reveal chain, and initial page state

use crate::config::{RevealConfig, ThemeMode, UiConfig};
use crate::error::Result;
use crate::reveal::{RevealChain, RevealStep};

/// Typed line shown before anything else
pub const BOOT_LINE: &str = "access granted... initializing portfolio...";
/// Role line under the hero heading
pub const TITLE_LINE: &str = "Software & Cybersecurity Engineer";
/// Focus areas under the role
pub const TAGLINE: &str = "Web3 | Full-stack | Security | UI/UX";
/// Typed while the contact handshake runs
pub const CONNECTING_LINE: &str = "Connecting to secure network...";

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Command shown in the section's terminal header
    pub fn header_command(&self) -> &'static str {
        match self {
            Section::Hero => "boot",
            Section::About => "whoami",
            Section::Projects => "ls -la /projects",
            Section::Contact => "ssh secure-connect",
        }
    }
}

/// Hero content unlocked by each completed reveal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroBlock {
    /// Big heading, unlocked by the boot line
    Title,
    /// Tagline, unlocked by the role line
    Subtitle,
    /// Action buttons and scroll hint, unlocked by the tagline
    Buttons,
}

impl HeroBlock {
    /// Block that becomes visible when hero step `step` completes
    pub fn unlocked_by(step: usize) -> Option<HeroBlock> {
        match step {
            0 => Some(HeroBlock::Title),
            1 => Some(HeroBlock::Subtitle),
            2 => Some(HeroBlock::Buttons),
            _ => None,
        }
    }
}

/// Boot line → role → tagline, each at its configured speed
pub fn hero_chain(reveal: &RevealConfig) -> Result<RevealChain> {
    Ok(RevealChain::new(vec![
        RevealStep::new(BOOT_LINE, reveal.boot_interval())?,
        RevealStep::new(TITLE_LINE, reveal.title_interval())?,
        RevealStep::new(TAGLINE, reveal.tagline_interval())?,
    ]))
}

/// Single-step chain typed during the contact handshake
pub fn connecting_chain(reveal: &RevealConfig) -> Result<RevealChain> {
    Ok(RevealChain::new(vec![RevealStep::new(
        CONNECTING_LINE,
        reveal.status_interval(),
    )?]))
}

/// Presentation state handed to the renderer
///
/// The theme is fixed at startup; sections become visible strictly in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    theme: ThemeMode,
    visible: Vec<Section>,
}

impl PageState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme,
            visible: Vec::new(),
        }
    }

    pub fn from_ui(ui: &UiConfig) -> Self {
        Self::new(ui.theme)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// The next section waiting to be shown
    pub fn next_section(&self) -> Option<Section> {
        Section::ALL.get(self.visible.len()).copied()
    }

    /// Mark `section` visible; only the next section in order is accepted
    pub fn reveal(&mut self, section: Section) -> bool {
        if self.next_section() != Some(section) {
            return false;
        }
        debug!("Section {:?} visible", section);
        self.visible.push(section);
        true
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(&section)
    }

    pub fn is_complete(&self) -> bool {
        self.next_section().is_none()
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}
