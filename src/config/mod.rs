use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".qmltagsrc.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub format: OutputFormat,
    pub output: PathBuf,
    pub include: Vec<String>,
    pub ignore: Vec<String>,
    pub extractors: ExtractorsConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExtractorsConfig {
    pub methods: bool,
    pub properties: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            output: PathBuf::from("qmltags"),
            include: vec!["**/*.qml".into()],
            ignore: vec![".git".into(), "node_modules".into(), "build".into()],
            extractors: ExtractorsConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

impl Default for ExtractorsConfig {
    fn default() -> Self {
        Self {
            methods: true,
            properties: true,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

impl Config {
    pub fn load(config_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(|| {
            let default = project_root.join(CONFIG_FILE_NAME);
            default.exists().then_some(default)
        });

        match path {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|e| anyhow::anyhow!("Config parse error: {e}"))
            }
            None => Ok(Config::default()),
        }
    }

    pub const fn default_toml() -> &'static str {
        r#"# qmltags configuration

# Tags file written when no --output-filepath is given.
output = "qmltags"

# Files collected when no paths are passed on the command line
# (glob patterns, case-sensitive, relative to the current directory;
# hidden files and directories are skipped).
include = ["**/*.qml"]

# Directories and files skipped while collecting
ignore = [".git", "node_modules", "build"]

[extractors]
# 'm' tags from `function name(...) {` lines
methods = true
# 'v' tags from `property <type> name` lines
properties = true

[watch]
# Quiet period after the last file change before tags are regenerated
debounce_ms = 200
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output, PathBuf::from("qmltags"));
        assert_eq!(config.include, vec!["**/*.qml"]);
        assert_eq!(config.ignore.len(), 3);
        assert!(config.extractors.methods);
        assert!(config.extractors.properties);
        assert_eq!(config.watch.debounce_ms, 200);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
output = "tags"
ignore = [".git"]

[extractors]
properties = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output, PathBuf::from("tags"));
        assert_eq!(config.ignore, vec![".git"]);
        assert!(config.extractors.methods);
        assert!(!config.extractors.properties);
    }

    #[test]
    fn test_omitted_include_gets_defaults() {
        let config: Config = toml::from_str("output = \"TAGS\"\n").unwrap();
        assert_eq!(config.include, Config::default().include);
    }

    #[test]
    fn test_parse_watch_debounce() {
        let config: Config = toml::from_str("[watch]\ndebounce_ms = 50\n").unwrap();
        assert_eq!(config.watch.debounce_ms, 50);
    }

    #[test]
    fn test_config_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "invalid toml [[[").unwrap();

        let result = Config::load(Some(&path), dir.path());
        assert!(result.is_err(), "Invalid TOML should return Err");
        assert!(
            result.unwrap_err().to_string().contains("parse error"),
            "Error should mention parse error"
        );
    }

    #[test]
    fn test_config_load_nonexistent_file() {
        let result = Config::load(
            Some(Path::new("/nonexistent/config.toml")),
            Path::new("/tmp"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_no_config_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("qmltags"));
    }

    #[test]
    fn test_config_discovered_in_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "output = \"TAGS\"\n").unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("TAGS"));
    }

    #[test]
    fn test_default_toml_template_is_parseable() {
        let config: Config = toml::from_str(Config::default_toml()).unwrap();
        assert_eq!(config.include, Config::default().include);
        assert_eq!(config.ignore, Config::default().ignore);
    }
}
