use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::LazyLock};
use thiserror::Error;

const CATALOG_FILE: &str = "projects.json";

/// Seconds between the reveal animations of neighbouring project cards.
pub const STAGGER_STEP_SECS: f64 = 0.2;

/// Outbound links open in a new tab without a handle back to this page.
pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

pub static CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load().expect("Embedded project catalog should be valid"));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    /// Site-root relative path of the thumbnail.
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub demo_url: String,
    pub code_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundLink<'a> {
    pub href: &'a str,
    pub label: &'static str,
}

impl OutboundLink<'_> {
    pub fn target(&self) -> &'static str {
        EXTERNAL_TARGET
    }

    pub fn rel(&self) -> &'static str {
        EXTERNAL_REL
    }
}

impl ProjectRecord {
    pub fn demo_link(&self) -> OutboundLink<'_> {
        OutboundLink {
            href: &self.demo_url,
            label: "View Demo",
        }
    }

    pub fn code_link(&self) -> OutboundLink<'_> {
        OutboundLink {
            href: &self.code_url,
            label: "Source Code",
        }
    }
}

/// CSS `animation-delay` for the card at `index` in the grid.
pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER_STEP_SECS)
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Project catalog {0} is not embedded")]
    Missing(&'static str),
    #[error("Couldn't parse project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project id {0} is used more than once")]
    DuplicateId(u32),
    #[error("Project {id} has an empty {field}")]
    MissingUrl { id: u32, field: &'static str },
}

/// The ordered, read-only list of projects shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Validates ids and links. Order is kept exactly as given.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for p in &projects {
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
            if p.demo_url.trim().is_empty() {
                return Err(CatalogError::MissingUrl {
                    id: p.id,
                    field: "demoUrl",
                });
            }
            if p.code_url.trim().is_empty() {
                return Err(CatalogError::MissingUrl {
                    id: p.id,
                    field: "codeUrl",
                });
            }
        }
        Ok(Self { projects })
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let projects = serde_json::from_slice::<Vec<ProjectRecord>>(bytes)?;
        Self::new(projects)
    }

    /// Reads the catalog embedded from `content/projects.json`.
    pub fn load() -> Result<Self, CatalogError> {
        let file = Content::get(CATALOG_FILE).ok_or(CatalogError::Missing(CATALOG_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
