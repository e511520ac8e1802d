//! File system repository: config, the working plan, and the template catalog

use crate::domain::{FlatExerciseModel, PlanRange, SeriesTemplate, TrainingDaySlot};
use crate::error::{PlanError, Result};
use crate::infrastructure::config::PLAN_DIR;
use crate::infrastructure::Config;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

const PLAN_FILE: &str = "plan.toml";
const SERIES_DIR: &str = "series";
const MODELS_DIR: &str = "models";

/// Publication state of the stored plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Draft,
    Published,
}

/// The working plan plus its publication state
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPlan {
    pub status: PlanStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub range: PlanRange,
}

impl StoredPlan {
    pub fn draft(range: PlanRange) -> Self {
        StoredPlan {
            status: PlanStatus::Draft,
            published_at: None,
            range,
        }
    }

    /// Any edit turns a published plan back into a draft
    pub fn mark_edited(&mut self) {
        self.status = PlanStatus::Draft;
        self.published_at = None;
    }

    pub fn publish(&mut self, at: DateTime<Utc>) {
        self.status = PlanStatus::Published;
        self.published_at = Some(at);
    }
}

/// On-disk layout of plan.toml: one record per day
#[derive(Debug, Serialize, Deserialize)]
struct PlanDocument {
    #[serde(default)]
    status: PlanStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    published_at: Option<DateTime<Utc>>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    days: Vec<TrainingDaySlot>,
}

impl From<&StoredPlan> for PlanDocument {
    fn from(plan: &StoredPlan) -> Self {
        PlanDocument {
            status: plan.status,
            published_at: plan.published_at,
            start_date: plan.range.start_date(),
            end_date: plan.range.end_date(),
            days: plan.range.slots().to_vec(),
        }
    }
}

impl TryFrom<PlanDocument> for StoredPlan {
    type Error = PlanError;

    fn try_from(doc: PlanDocument) -> Result<Self> {
        let range = PlanRange::from_slots(doc.start_date, doc.end_date, doc.days).map_err(
            |e| match e {
                PlanError::InvalidRange { .. } => PlanError::CorruptPlan(e.to_string()),
                other => other,
            },
        )?;
        Ok(StoredPlan {
            status: doc.status,
            published_at: doc.published_at,
            range,
        })
    }
}

/// Abstract repository for plan operations
pub trait PlanRepository {
    /// Load configuration from .trainplan/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .trainplan/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .trainplan directory exists
    fn is_initialized(&self) -> bool;

    /// Create .trainplan directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the working plan, `None` when no range has been set yet
    fn load_plan(&self) -> Result<Option<StoredPlan>>;

    /// Replace the working plan on disk
    fn save_plan(&self, plan: &StoredPlan) -> Result<()>;

    /// All series templates, ordered by id
    fn list_series(&self) -> Result<Vec<SeriesTemplate>>;

    /// All flat models, ordered by name
    fn list_models(&self) -> Result<Vec<FlatExerciseModel>>;

    fn load_series(&self, id: &str) -> Result<SeriesTemplate> {
        self.list_series()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| PlanError::SeriesNotFound(id.to_string()))
    }

    fn load_model(&self, name: &str) -> Result<FlatExerciseModel> {
        self.list_models()?
            .into_iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlanError::ModelNotFound(name.to_string()))
    }
}

/// File system implementation of PlanRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the plan root by walking up from the current directory.
    /// TRAINPLAN_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TRAINPLAN_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_plan_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(PlanError::Config(format!(
                    "TRAINPLAN_ROOT is set to '{}' but no .trainplan directory found. \
                    Run 'trainplan init' in that directory or unset TRAINPLAN_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the plan root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_plan_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(PlanError::NotPlanDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_plan_dir(path: &Path) -> bool {
        path.join(PLAN_DIR).is_dir()
    }

    fn plan_dir(&self) -> PathBuf {
        self.root.join(PLAN_DIR)
    }

    /// Write using a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(PLAN_FILE),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Parse every `*.toml` file below `.trainplan/<dir>`
    fn load_catalog<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let catalog_dir = self.plan_dir().join(dir);
        if !catalog_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&catalog_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut items = Vec::with_capacity(paths.len());
        for path in paths {
            let contents = fs::read_to_string(&path)?;
            let item = toml::from_str(&contents)
                .map_err(|e| PlanError::Catalog(format!("{}: {}", path.display(), e)))?;
            items.push(item);
        }

        debug!(dir, count = items.len(), "loaded catalog");
        Ok(items)
    }
}

impl PlanRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_plan_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let plan_dir = self.plan_dir();

        if plan_dir.exists() {
            return Err(PlanError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&plan_dir)?;
        fs::create_dir(plan_dir.join(SERIES_DIR))?;
        fs::create_dir(plan_dir.join(MODELS_DIR))?;
        Ok(())
    }

    fn load_plan(&self) -> Result<Option<StoredPlan>> {
        let path = self.plan_dir().join(PLAN_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let doc: PlanDocument = toml::from_str(&contents)
            .map_err(|e| PlanError::CorruptPlan(format!("{}: {}", path.display(), e)))?;
        StoredPlan::try_from(doc).map(Some)
    }

    fn save_plan(&self, plan: &StoredPlan) -> Result<()> {
        let content = toml::to_string_pretty(&PlanDocument::from(plan))?;
        Self::write_atomic(&self.plan_dir().join(PLAN_FILE), &content)?;
        info!(
            start = %plan.range.start_date(),
            end = %plan.range.end_date(),
            status = ?plan.status,
            "saved plan"
        );
        Ok(())
    }

    fn list_series(&self) -> Result<Vec<SeriesTemplate>> {
        let mut series: Vec<SeriesTemplate> = self.load_catalog(SERIES_DIR)?;
        series.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(series)
    }

    fn list_models(&self) -> Result<Vec<FlatExerciseModel>> {
        let mut models: Vec<FlatExerciseModel> = self.load_catalog(MODELS_DIR)?;
        models.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(models)
    }
}

/// Catalog writers used to seed fixtures in unit tests
#[cfg(test)]
impl FileSystemRepository {
    /// Store a series template as .trainplan/series/<id>.toml
    pub(crate) fn save_series(&self, series: &SeriesTemplate) -> Result<()> {
        let path = self
            .plan_dir()
            .join(SERIES_DIR)
            .join(format!("{}.toml", series.id));
        Self::write_atomic(&path, &toml::to_string_pretty(series)?)
    }

    /// Store a flat model as .trainplan/models/<name>.toml
    pub(crate) fn save_model(&self, model: &FlatExerciseModel) -> Result<()> {
        let stem = model.name.to_lowercase().replace(char::is_whitespace, "-");
        let path = self
            .plan_dir()
            .join(MODELS_DIR)
            .join(format!("{}.toml", stem));
        Self::write_atomic(&path, &toml::to_string_pretty(model)?)
    }
}
