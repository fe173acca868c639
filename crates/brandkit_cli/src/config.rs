//! Brandkit configuration file handling

use anyhow::{Context, Result};
use brandkit_tokens::Brand;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Brandkit configuration (brandkit.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct BrandkitConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

/// Project metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Token source layout
#[derive(Debug, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Root holding `core/` and one directory per brand (relative to the config file)
    #[serde(default = "default_root")]
    pub root: String,
}

fn default_root() -> String {
    "src/tokens".to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// Build configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Output directory (relative to the config file)
    #[serde(default = "default_output")]
    pub output: String,
    /// Brands to build
    #[serde(default = "default_brands")]
    pub brands: Vec<Brand>,
}

fn default_output() -> String {
    "dist".to_string()
}

fn default_brands() -> Vec<Brand> {
    Brand::all().to_vec()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            brands: default_brands(),
        }
    }
}

/// A loaded configuration together with the directory relative paths resolve against
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: BrandkitConfig,
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    pub fn sources_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.sources.root)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.build.output)
    }
}

impl BrandkitConfig {
    /// Load configuration from a directory (looks for brandkit.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<LoadedConfig> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("brandkit.toml")
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No brandkit.toml found in {}. Run `brandkit init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: BrandkitConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(LoadedConfig { config, base_dir })
    }

    /// Create a new configuration with the given project name
    pub fn new(name: &str) -> Self {
        Self {
            project: ProjectConfig {
                name: name.to_string(),
                version: default_version(),
                description: None,
            },
            sources: SourcesConfig::default(),
            build: BuildConfig::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
