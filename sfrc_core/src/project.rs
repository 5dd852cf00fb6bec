//! # Project Data Structures
//!
//! The `Project` struct is the root container for a set of SFRC section
//! calculations. Projects serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (combination set, concrete unit weight)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sfrc_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = project.to_json().unwrap();
//!
//! let loaded = Project::from_json(&json).unwrap();
//! assert_eq!(loaded.meta.job_id, "25-042");
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationOutput};
use crate::errors::{CalcError, CalcResult};
use crate::loads::CombinationSet;

/// Current schema version of project documents
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

/// Outcome of evaluating one stored item.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    pub id: Uuid,
    pub label: String,
    pub calc_type: &'static str,
    pub result: CalcResult<CalculationOutput>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sfrc_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project, returning its UUID.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Evaluate one item with the project settings.
    pub fn evaluate(&self, id: &Uuid) -> CalcResult<CalculationOutput> {
        let item = self.items.get(id).ok_or_else(|| {
            CalcError::invalid_input("item", id.to_string(), "No calculation with this id")
        })?;
        item.evaluate(&self.settings)
    }

    /// Evaluate every item, ordered by label.
    ///
    /// A failing item does not stop the others.
    pub fn evaluate_all(&self) -> Vec<ItemOutcome> {
        let mut outcomes: Vec<ItemOutcome> = self
            .items
            .iter()
            .map(|(id, item)| ItemOutcome {
                id: *id,
                label: item.label().to_string(),
                calc_type: item.calc_type(),
                result: item.evaluate(&self.settings),
            })
            .collect();
        outcomes.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id)));

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!("evaluated {} items ({} failed)", outcomes.len(), failed);
        outcomes
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a project document, rejecting incompatible schema versions.
    ///
    /// # Returns
    ///
    /// * `Ok(Project)` - Successfully parsed project
    /// * `Err(CalcError::SerializationError)` - Invalid JSON
    /// * `Err(CalcError::VersionMismatch)` - Schema version is incompatible
    pub fn from_json(json: &str) -> CalcResult<Project> {
        let project: Project = serde_json::from_str(json)?;
        validate_version(&project.meta.version)?;
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Check a document version against [`SCHEMA_VERSION`].
///
/// The major version must match; while the major version is 0 a document
/// with a newer minor version is rejected too.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };
    let parse = |v: &str| -> Option<Vec<u32>> { v.split('.').map(|p| p.parse().ok()).collect() };

    let file_parts = parse(file_version).ok_or_else(mismatch)?;
    let current_parts = parse(SCHEMA_VERSION).ok_or_else(mismatch)?;

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, ..], [major, ..]) if file_major != major => Err(mismatch()),
        ([0, file_minor, ..], [0, minor, ..]) if file_minor > minor => Err(mismatch()),
        ([_, ..], [_, ..]) => Ok(()),
        _ => Err(mismatch()),
    }
}

/// Project metadata stored in the document header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    pub client: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Strength combinations used for beam demand
    #[serde(default)]
    pub combination_set: CombinationSet,

    /// Unit weight of the concrete for self-weight (kN/m³)
    #[serde(default = "default_unit_weight")]
    pub concrete_unit_weight_kn_m3: f64,
}

fn default_unit_weight() -> f64 {
    25.0
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            combination_set: CombinationSet::default(),
            concrete_unit_weight_kn_m3: default_unit_weight(),
        }
    }
}
