//! Static portfolio content
//!
//! All text shown in the about, projects and contact sections. The data is
//! serde-friendly so it can be dumped with `--dump-content`.

use crate::config::ContactConfig;
use serde::{Deserialize, Serialize};

/// `whoami` block of the about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user: String,
    pub role: String,
    pub specialization: String,
    pub location: String,
    pub status: String,
    pub summary: String,
}

impl Profile {
    /// Lines printed under `whoami`
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("USER: {}", self.user),
            format!("ROLE: {}", self.role),
            format!("SPECIALIZATION: {}", self.specialization),
            format!("LOCATION: {}", self.location),
            format!("STATUS: {}", self.status),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Proficient,
    Learning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100
    pub level: u8,
    pub status: SkillStatus,
}

impl Skill {
    fn new(name: &str, level: u8, status: SkillStatus) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
            status,
        }
    }

    /// Text progress bar of `width` cells
    pub fn bar(&self, width: usize) -> String {
        let filled = (usize::from(self.level) * width + 50) / 100;
        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Web3Dapps,
    SmartContracts,
    SecurityTools,
    FullStackApps,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web3Dapps => "Web3 dApps",
            ProjectCategory::SmartContracts => "Smart Contracts",
            ProjectCategory::SecurityTools => "Security Tools",
            ProjectCategory::FullStackApps => "Full-Stack Apps",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub category: ProjectCategory,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Card shown once the contact handshake completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub uri: String,
    pub description: String,
}

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub expertise: Vec<Expertise>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contacts: Vec<ContactCard>,
}

impl Portfolio {
    /// Built-in content, with contact links taken from configuration
    pub fn builtin(contact: &ContactConfig) -> Self {
        use SkillStatus::{Learning, Proficient};

        let category = |name: &str, skills: Vec<Skill>| SkillCategory {
            name: name.to_string(),
            skills,
        };
        let expertise = |title: &str, description: &str| Expertise {
            title: title.to_string(),
            description: description.to_string(),
        };
        let tech = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

        Self {
            profile: Profile {
                user: "Software & Cybersecurity Engineer".to_string(),
                role: "Software Developer | Security Specialist".to_string(),
                specialization: "Web2 | Web3 | Blockchain | UI/UX".to_string(),
                location: "Nyeri".to_string(),
                status: "Available for projects".to_string(),
                summary: "Passionate about building secure, scalable applications that bridge \
                          the gap between traditional web development and the decentralized \
                          future."
                    .to_string(),
            },
            expertise: vec![
                expertise("Frontend Development", "React, Next.js, TypeScript, Modern UI/UX"),
                expertise("Backend Development", "Django, REST APIs, PostgreSQL, Node.js"),
                expertise("Web3 & Blockchain", "Solana, ICP, Smart Contracts, Ethereum"),
                expertise("Cybersecurity", "Secure Coding, Web Testing, Security Audits"),
            ],
            skills: vec![
                category(
                    "Frontend Frameworks",
                    vec![
                        Skill::new("React", 90, Proficient),
                        Skill::new("Next.js", 85, Proficient),
                    ],
                ),
                category(
                    "Backend Frameworks",
                    vec![
                        Skill::new("Django", 90, Proficient),
                        Skill::new("REST APIs", 88, Proficient),
                        Skill::new("Node.js/Express", 60, Learning),
                    ],
                ),
                category(
                    "Web3 & Blockchain",
                    vec![
                        Skill::new("Solana", 85, Proficient),
                        Skill::new("ICP", 85, Proficient),
                        Skill::new("Ethereum", 55, Learning),
                    ],
                ),
                category(
                    "Cybersecurity",
                    vec![
                        Skill::new("Secure Coding", 88, Proficient),
                        Skill::new("Web Application Testing", 85, Proficient),
                        Skill::new("Web3 Security", 60, Learning),
                        Skill::new("Cryptography", 58, Learning),
                    ],
                ),
                category(
                    "Databases",
                    vec![
                        Skill::new("SQL", 90, Proficient),
                        Skill::new("PostgreSQL", 88, Proficient),
                        Skill::new("MongoDB", 55, Learning),
                    ],
                ),
                category(
                    "Programming Languages",
                    vec![
                        Skill::new("Python", 92, Proficient),
                        Skill::new("JavaScript", 90, Proficient),
                        Skill::new("Rust", 85, Proficient),
                    ],
                ),
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "DeFi Portfolio Tracker".to_string(),
                    description: "Real-time Web3 portfolio tracking with advanced analytics and \
                                  multi-chain support."
                        .to_string(),
                    tech: tech(&["React", "Web3.js", "Solidity", "Node.js"]),
                    category: ProjectCategory::Web3Dapps,
                    github_url: Some(contact.github_uri.clone()),
                    live_url: Some("https://demo.com".to_string()),
                },
                Project {
                    id: 2,
                    title: "Smart Contract Auditor".to_string(),
                    description: "Automated security analysis tool for Ethereum smart contracts \
                                  with vulnerability detection."
                        .to_string(),
                    tech: tech(&["Python", "Solidity", "Docker", "FastAPI"]),
                    category: ProjectCategory::SecurityTools,
                    github_url: None,
                    live_url: None,
                },
                Project {
                    id: 3,
                    title: "Decentralized Chat Protocol".to_string(),
                    description: "End-to-end encrypted messaging system built on blockchain \
                                  with zero-knowledge proofs."
                        .to_string(),
                    tech: tech(&["Rust", "ICP", "React", "WebRTC"]),
                    category: ProjectCategory::SmartContracts,
                    github_url: None,
                    live_url: None,
                },
                Project {
                    id: 4,
                    title: "CyberSec Dashboard".to_string(),
                    description: "Real-time security monitoring platform with threat \
                                  intelligence and incident response."
                        .to_string(),
                    tech: tech(&["Django", "React", "PostgreSQL", "Redis"]),
                    category: ProjectCategory::FullStackApps,
                    github_url: None,
                    live_url: None,
                },
            ],
            contacts: vec![
                ContactCard {
                    name: "GitHub".to_string(),
                    uri: contact.github_uri.clone(),
                    description: "Open source contributions".to_string(),
                },
                ContactCard {
                    name: "LinkedIn".to_string(),
                    uri: contact.linkedin_uri.clone(),
                    description: "Professional network".to_string(),
                },
                ContactCard {
                    name: "Email".to_string(),
                    uri: contact.email_uri.clone(),
                    description: "Direct communication".to_string(),
                },
                ContactCard {
                    name: "Discord".to_string(),
                    uri: contact.discord_uri.clone(),
                    description: "Community chat".to_string(),
                },
            ],
        }
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin(&ContactConfig::default())
    }
}
