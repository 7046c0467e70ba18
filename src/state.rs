//! Application State Management
//!
//! Lifecycle status of a portfolio session plus the page it is showing.

use crate::config::UiConfig;
use crate::page::PageState;

/// Session state
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    /// Application status
    pub status: ApplicationStatus,
    /// Sections shown so far and the startup theme
    pub page: PageState,
}

impl ApplicationState {
    /// Create new application state
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            status: ApplicationStatus::Starting,
            page: PageState::from_ui(ui),
        }
    }

    /// Get application status
    pub fn status(&self) -> &ApplicationStatus {
        &self.status
    }

    /// Set application status
    pub fn set_status(&mut self, status: ApplicationStatus) {
        debug!("Application status: {:?} -> {:?}", self.status, status);
        self.status = status;
    }

    /// Check if the page is fully shown and taking commands
    pub fn is_running(&self) -> bool {
        matches!(self.status, ApplicationStatus::Running)
    }

    /// Check if application is shutting down
    pub fn is_shutting_down(&self) -> bool {
        matches!(self.status, ApplicationStatus::ShuttingDown)
    }
}

/// Application status
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ApplicationStatus {
    /// Intro sections still revealing
    #[default]
    Starting,
    /// Contact terminal accepting commands
    Running,
    /// Session is ending
    ShuttingDown,
    /// Application encountered an error
    Error(String),
}
