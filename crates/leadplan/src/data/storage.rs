//! Data directory storage
//!
//! Directory structure:
//! ~/.leadplan/
//!   benchmarks.yaml      # Optional replacement for the built-in benchmark tables
//!   leadplan.log         # Application log
//!
//! User inputs and results are never written here.

use std::fs;
use std::path::PathBuf;

use leadplan_core::error::ConfigError;
use leadplan_core::model::Benchmarks;

/// File name of the benchmark override
pub const BENCHMARKS_FILE_NAME: &str = "benchmarks.yaml";

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    Invalid(ConfigError),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Invalid(err) => write!(f, "Invalid benchmarks: {}", err),
        }
    }
}

impl std::error::Error for StorageError {}

/// Where the active benchmark tables came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkSource {
    Builtin,
    File(PathBuf),
}

/// Benchmark tables chosen at startup
#[derive(Debug, Clone)]
pub struct LoadedBenchmarks {
    pub benchmarks: Benchmarks,
    pub source: BenchmarkSource,
    /// Why an override file was ignored, if one was
    pub warning: Option<String>,
}

/// Manages the data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.leadplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".leadplan")
    }

    pub fn benchmarks_path(&self) -> PathBuf {
        self.root.join(BENCHMARKS_FILE_NAME)
    }

    /// Read and validate `benchmarks.yaml`. `Ok(None)` when there is no file.
    pub fn load_benchmarks(&self) -> Result<Option<Benchmarks>, StorageError> {
        let path = self.benchmarks_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let benchmarks: Benchmarks = serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse benchmarks: {}", e)))?;

        benchmarks.validate().map_err(StorageError::Invalid)?;
        Ok(Some(benchmarks))
    }

    /// The override file if it loads cleanly, otherwise the built-in tables.
    pub fn active_benchmarks(&self) -> LoadedBenchmarks {
        match self.load_benchmarks() {
            Ok(Some(benchmarks)) => {
                tracing::info!(path = %self.benchmarks_path().display(), "Loaded benchmark override");
                LoadedBenchmarks {
                    benchmarks,
                    source: BenchmarkSource::File(self.benchmarks_path()),
                    warning: None,
                }
            }
            Ok(None) => {
                tracing::debug!("No benchmark override, using built-in tables");
                LoadedBenchmarks {
                    benchmarks: Benchmarks::builtin().clone(),
                    source: BenchmarkSource::Builtin,
                    warning: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring benchmark override, using built-in tables");
                LoadedBenchmarks {
                    benchmarks: Benchmarks::builtin().clone(),
                    source: BenchmarkSource::Builtin,
                    warning: Some(e.to_string()),
                }
            }
        }
    }

    /// Write benchmark tables as YAML, replacing any existing file atomically.
    pub fn save_benchmarks(&self, benchmarks: &Benchmarks) -> Result<PathBuf, StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        let yaml = benchmarks_yaml(benchmarks)?;
        let path = self.benchmarks_path();
        let tmp_path = path.with_extension("yaml.tmp");

        fs::write(&tmp_path, yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write benchmarks: {}", e)))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace benchmarks: {}", e)))?;

        tracing::info!(path = %path.display(), "Wrote benchmark tables");
        Ok(path)
    }
}

/// Serialize benchmark tables to YAML
pub fn benchmarks_yaml(benchmarks: &Benchmarks) -> Result<String, StorageError> {
    serde_saphyr::to_string(benchmarks)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize benchmarks: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadplan_core::model::Industry;
    use tempfile::TempDir;

    fn data_dir() -> (TempDir, DataDirectory) {
        let tmp = TempDir::new().unwrap();
        let dir = DataDirectory::new(tmp.path().to_path_buf());
        (tmp, dir)
    }

    #[test]
    fn test_no_file_uses_builtin() {
        let (_tmp, dir) = data_dir();
        assert!(dir.load_benchmarks().unwrap().is_none());

        let loaded = dir.active_benchmarks();
        assert_eq!(loaded.source, BenchmarkSource::Builtin);
        assert!(loaded.warning.is_none());
        assert_eq!(&loaded.benchmarks, Benchmarks::builtin());
    }

    #[test]
    fn test_written_tables_load_back() {
        let (_tmp, dir) = data_dir();
        let mut benchmarks = Benchmarks::builtin().clone();
        if let Some(profile) = benchmarks.industries.get_mut(&Industry::Healthcare) {
            profile.average_cost_per_lead = 175.0;
        }

        let path = dir.save_benchmarks(&benchmarks).unwrap();
        assert_eq!(path, dir.benchmarks_path());
        assert!(!path.with_extension("yaml.tmp").exists());

        let loaded = dir.active_benchmarks();
        assert_eq!(loaded.source, BenchmarkSource::File(path));
        assert_eq!(
            loaded
                .benchmarks
                .profile(Industry::Healthcare)
                .unwrap()
                .average_cost_per_lead,
            175.0
        );
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let (_tmp, dir) = data_dir();
        fs::write(dir.benchmarks_path(), "industries: [not, a, map").unwrap();

        assert!(matches!(
            dir.load_benchmarks(),
            Err(StorageError::Parse(_))
        ));

        let loaded = dir.active_benchmarks();
        assert_eq!(loaded.source, BenchmarkSource::Builtin);
        assert!(loaded.warning.is_some());
    }

    #[test]
    fn test_invalid_tables_fall_back() {
        let (_tmp, dir) = data_dir();
        let mut benchmarks = Benchmarks::builtin().clone();
        if let Some(profile) = benchmarks.industries.get_mut(&Industry::Recruitment) {
            profile.conversion_rate = 1.5;
        }
        dir.save_benchmarks(&benchmarks).unwrap();

        assert!(matches!(
            dir.load_benchmarks(),
            Err(StorageError::Invalid(ConfigError::InvalidConversionRate { .. }))
        ));
        assert_eq!(dir.active_benchmarks().source, BenchmarkSource::Builtin);
    }
}
