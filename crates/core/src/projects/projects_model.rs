//! Project domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::{FbaCalculationResult, FbaCalculatorInput};
use crate::errors::{Result, ValidationError};

/// A project node without its input/result snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub branch_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A persisted project with its input and derived result snapshots.
///
/// The result is always the engine output for the current input; the two
/// never diverge once a write commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub branch_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub input: FbaCalculatorInput,
    pub result: FbaCalculationResult,
}

impl SavedProject {
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            parent_id: self.parent_id.clone(),
            branch_path: self.branch_path.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A node of the project forest returned by tree listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    pub project: ProjectSummary,
    pub children: Vec<ProjectNode>,
}

const MAX_NAME_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 2000;

fn validate_metadata(name: &str, description: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::InvalidInput("name must not be empty".to_string()).into());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::OutOfRange {
            field: "name".to_string(),
            message: format!("must be at most {MAX_NAME_LEN} characters"),
        }
        .into());
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::OutOfRange {
            field: "description".to_string(),
            message: format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
        }
        .into());
    }
    Ok(())
}

/// Payload for creating a root project or replacing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input: FbaCalculatorInput,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<()> {
        validate_metadata(&self.name, &self.description)
    }
}

/// Payload for branching an existing project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl BranchDraft {
    pub fn validate(&self) -> Result<()> {
        validate_metadata(&self.name, &self.description)
    }
}
