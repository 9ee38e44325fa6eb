//! Configuration file loader with multi-source merging

use super::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR: &str = "sovereign-council";

/// Project-level file names, checked in order
const PROJECT_FILES: [&str; 2] = ["council.toml", ".council.toml"];

/// Prefix for environment overrides, e.g. `COUNCIL_PROFILE__TIER=2`
const ENV_PREFIX: &str = "COUNCIL_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `COUNCIL_` environment variables (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./council.toml` or `./.council.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/sovereign-council/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
    }

    /// Load with explicit file locations; missing files are skipped.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // An explicit path must exist
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}* variables", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{} or ./{}", PROJECT_FILES[0], PROJECT_FILES[1]);
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.profile.tier, 4);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("sovereign-council"));
    }

    #[test]
    fn test_project_overrides_global_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("council.toml");
        fs::write(&global, "[profile]\nname = \"Global\"\ntier = 3\n").unwrap();
        fs::write(&project, "[profile]\nname = \"Project\"\n\n[providers.eirene]\nmodel = \"grok-4\"\n").unwrap();

        let config = ConfigLoader::load_from(Some(&global), Some(&project), None).unwrap();

        assert_eq!(config.profile.name, "Project");
        assert_eq!(config.profile.tier, 3);
        // Nested tables merge key by key
        assert_eq!(config.providers.eirene.model, "grok-4");
        assert_eq!(config.providers.eirene.base_url, "https://api.x.ai/v1");
        assert_eq!(config.grid.regions.len(), 4);
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("council.toml");
        let explicit = dir.path().join("custom.toml");
        fs::write(&project, "[execution]\ncall_timeout_secs = 20\n").unwrap();
        fs::write(&explicit, "[execution]\ncall_timeout_secs = 5\n").unwrap();

        let config = ConfigLoader::load_from(None, Some(&project), Some(&explicit)).unwrap();

        assert_eq!(config.execution.call_timeout_secs, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = ConfigLoader::load_from(None, None, Some(&missing)).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("council.toml");
        fs::write(&project, "[profile]\ntier = \"gold\"\n").unwrap();

        let err = ConfigLoader::load_from(None, Some(&project), None).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
