//! Layered configuration loading.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use tracing::debug;

use super::{CONFIG_FILE_STEMS, ConfigError, ENV_PREFIX, Result, models::*, validation};

/// Supported configuration file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Extensions tried, in order, when searching for a default file
    pub const EXTENSIONS: &'static [&'static str] = &["toml", "yaml", "yml", "json"];

    /// Format of `path`, if its extension is supported
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn merge_into(self, figment: Figment, path: &Path) -> Figment {
        match self {
            Self::Toml => figment.merge(Toml::file(path)),
            Self::Yaml => figment.merge(Yaml::file(path)),
            Self::Json => figment.merge(Json::file(path)),
        }
    }
}

/// Builds a [`SynonymsConfig`] from defaults, files, the environment and
/// explicit overrides, in that order of precedence (last wins).
///
/// ```no_run
/// use synonyms::config::ConfigLoader;
///
/// let _config = ConfigLoader::new()
///     .with_default_files()
///     .with_env()
///     .with_default_max_depth(Some(3))
///     .load()?;
/// # Ok::<(), synonyms::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
    files: Vec<PathBuf>,
    seed_file: Option<PathBuf>,
    default_max_depth: Option<usize>,
    log_level: Option<LogLevel>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(SynonymsConfig::default())),
            files: Vec::new(),
            seed_file: None,
            default_max_depth: None,
            log_level: None,
        }
    }

    /// Merge an explicitly requested file. Missing files are an error.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let format = FileFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        self.figment = format.merge_into(self.figment, path);
        self.files.push(path.to_path_buf());
        debug!(path = %path.display(), ?format, "Merged configuration file");

        Ok(self)
    }

    /// Merge the first configuration file found among the default locations.
    ///
    /// The working directory is searched before the user configuration
    /// directory. Finding nothing is not an error.
    pub fn with_default_files(self) -> Self {
        match Self::default_candidates().into_iter().find(|path| path.is_file()) {
            Some(path) => match self.clone().with_file(&path) {
                Ok(loader) => loader,
                Err(e) => {
                    debug!(error = %e, "Skipping default configuration file");
                    self
                }
            },
            None => {
                debug!("No configuration file found, using defaults");
                self
            }
        }
    }

    /// Merge `SYNONYMS_*` variables. Nested keys use a double underscore,
    /// e.g. `SYNONYMS_STORE__SEED_FILE`.
    pub fn with_env(mut self) -> Self {
        self.figment = self.figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        self
    }

    /// Override the seed dictionary, taken relative to the working directory.
    pub fn with_seed_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.seed_file = path;
        }
        self
    }

    /// Override the depth used by bounded lookups that do not name one.
    pub fn with_default_max_depth(mut self, depth: Option<usize>) -> Self {
        if depth.is_some() {
            self.default_max_depth = depth;
        }
        self
    }

    /// Override the log level.
    pub fn with_log_level(mut self, level: Option<LogLevel>) -> Self {
        if level.is_some() {
            self.log_level = level;
        }
        self
    }

    /// Configuration files merged so far, in merge order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Extract, apply overrides and validate.
    ///
    /// A relative `store.seed_file` read from a configuration file is
    /// resolved against that file's directory, so a config and its
    /// dictionary can be moved together.
    pub fn load(self) -> Result<SynonymsConfig> {
        let mut config: SynonymsConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        if let Some(seed_file) = config.store.seed_file.take() {
            config.store.seed_file = Some(self.resolve_seed_file(seed_file));
        }

        if let Some(seed_file) = self.seed_file {
            config.store.seed_file = Some(seed_file);
        }
        if let Some(depth) = self.default_max_depth {
            config.store.default_max_depth = Some(depth);
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }

        validation::validate_config(&config)?;
        debug!(
            files = self.files.len(),
            seed_file = ?config.store.seed_file,
            default_max_depth = ?config.store.default_max_depth,
            "Configuration loaded"
        );

        Ok(config)
    }

    fn resolve_seed_file(&self, seed_file: PathBuf) -> PathBuf {
        if seed_file.is_absolute() || seed_file.as_os_str().is_empty() {
            return seed_file;
        }

        let origin = self
            .figment
            .find_metadata("store.seed_file")
            .and_then(|metadata| metadata.source.as_ref())
            .and_then(|source| source.file_path());

        match origin.and_then(Path::parent) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(seed_file),
            _ => seed_file,
        }
    }

    fn default_candidates() -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = CONFIG_FILE_STEMS
            .iter()
            .flat_map(|stem| {
                FileFormat::EXTENSIONS
                    .iter()
                    .map(move |ext| PathBuf::from(format!("{}.{}", stem, ext)))
            })
            .collect();

        if let Some(dirs) = directories::ProjectDirs::from("org", "synonyms", "synonyms") {
            let config_dir = dirs.config_dir();
            candidates.extend(
                FileFormat::EXTENSIONS
                    .iter()
                    .map(|ext| config_dir.join(format!("config.{}", ext))),
            );
        }

        candidates
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
