//! Which project cards the visitor has "decrypted"

use super::{Portfolio, Project};
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Decryption state of the projects showcase
///
/// Every card starts encrypted. Decrypting is one-way for the session.
#[derive(Debug, Clone)]
pub struct ProjectVault {
    projects: Vec<Project>,
    decrypted: BTreeSet<u32>,
}

impl ProjectVault {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            projects: portfolio.projects.clone(),
            decrypted: BTreeSet::new(),
        }
    }

    /// Reveal a project card
    pub fn decrypt(&mut self, id: u32) -> Result<&Project> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(Error::ProjectNotFound { id })?;

        if self.decrypted.insert(id) {
            info!("Decrypted project #{} ({})", id, project.title);
        }
        Ok(project)
    }

    /// Reveal every card
    pub fn decrypt_all(&mut self) {
        self.decrypted.extend(self.projects.iter().map(|p| p.id));
    }

    pub fn is_decrypted(&self, id: u32) -> bool {
        self.decrypted.contains(&id)
    }

    pub fn encrypted_count(&self) -> usize {
        self.projects.len() - self.decrypted.len()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Summary line for the `ls -la /projects` header
    pub fn status_line(&self) -> String {
        format!("{} encrypted files found", self.encrypted_count())
    }
}
