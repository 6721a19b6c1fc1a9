//! Database models for projects.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::errors::StorageError;
use fba_core::calculator::{FbaCalculationResult, FbaCalculatorInput};
use fba_core::projects::{ProjectSummary, SavedProject};

/// Database model for a project row. Input and result snapshots are stored
/// as JSON text; timestamps as RFC 3339 text.
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectDB {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub branch_path: String,
    pub input_json: String,
    pub result_json: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Summary projection used for tree listing and adjacency scans.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProjectSummaryDB {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub branch_path: String,
    pub created_at: String,
    pub updated_at: String,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::SerializationError(format!("invalid timestamp {value:?}: {e}")))
}

impl ProjectDB {
    /// Builds a new row from domain parts, serializing the snapshots.
    pub fn from_parts(
        id: String,
        name: String,
        description: String,
        parent_id: Option<String>,
        branch_path: String,
        input: &FbaCalculatorInput,
        result: &FbaCalculationResult,
        now: DateTime<Utc>,
    ) -> Result<Self, StorageError> {
        Ok(ProjectDB {
            id,
            name,
            description,
            parent_id,
            branch_path,
            input_json: serde_json::to_string(input)?,
            result_json: serde_json::to_string(result)?,
            created_at: now.to_rfc3339(),
            updated_at: now.to_rfc3339(),
        })
    }
}

impl TryFrom<ProjectDB> for SavedProject {
    type Error = StorageError;

    fn try_from(db: ProjectDB) -> Result<Self, StorageError> {
        Ok(SavedProject {
            created_at: parse_timestamp(&db.created_at)?,
            updated_at: parse_timestamp(&db.updated_at)?,
            input: serde_json::from_str(&db.input_json)?,
            result: serde_json::from_str(&db.result_json)?,
            id: db.id,
            name: db.name,
            description: db.description,
            parent_id: db.parent_id,
            branch_path: db.branch_path,
        })
    }
}

impl TryFrom<ProjectSummaryDB> for ProjectSummary {
    type Error = StorageError;

    fn try_from(db: ProjectSummaryDB) -> Result<Self, StorageError> {
        Ok(ProjectSummary {
            created_at: parse_timestamp(&db.created_at)?,
            updated_at: parse_timestamp(&db.updated_at)?,
            id: db.id,
            name: db.name,
            description: db.description,
            parent_id: db.parent_id,
            branch_path: db.branch_path,
        })
    }
}
