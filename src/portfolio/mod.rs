//! Portfolio content and the small bits of state attached to it

pub mod connection;
pub mod content;
pub mod vault;

pub use connection::{ConnectionState, ConnectionStatus};
pub use content::{
    ContactCard, Expertise, Portfolio, Profile, Project, ProjectCategory, Skill, SkillCategory,
    SkillStatus,
};
pub use vault::ProjectVault;
