use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Projects JSON file. The bundled sample data is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

pub const MIN_GRID_COLUMNS: usize = 1;
pub const MAX_GRID_COLUMNS: usize = 4;

fn default_grid_columns() -> usize {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grid_columns: default_grid_columns(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn grid_columns(&self) -> usize {
        self.grid_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }
}

impl Config {
    /// Data file to load: an explicit override wins over the config file.
    pub fn data_path<'a>(&'a self, override_path: Option<&'a Path>) -> Option<&'a Path> {
        override_path.or(self.data.path.as_deref())
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "projboard")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration.
///
/// An explicitly requested file must exist. The default location is
/// optional: when nothing is there the built-in defaults apply.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!("No config at {}, using defaults", p.display());
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config = parse(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content)?;
    if config.ui.grid_columns != config.ui.grid_columns() {
        tracing::warn!(
            "ui.grid_columns = {} out of range, using {}",
            config.ui.grid_columns,
            config.ui.grid_columns()
        );
        config.ui.grid_columns = config.ui.grid_columns();
    }
    if config.ui.tick_rate_ms == 0 {
        tracing::warn!("ui.tick_rate_ms must be positive, using {}", default_tick_rate_ms());
        config.ui.tick_rate_ms = default_tick_rate_ms();
    }
    Ok(config)
}

/// Write a default config file, asking before overwriting an existing one.
pub fn init_wizard(path: Option<&Path>) -> Result<()> {
    use std::io::{self, Write};

    println!("projboard configuration");
    println!("=======================\n");

    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if config_path.exists() {
        print!("Config already exists at {}. Overwrite? [y/N] ", config_path.display());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    print!("Projects JSON file (press Enter to use the bundled sample data): ");
    io::stdout().flush()?;
    let mut data_path = String::new();
    io::stdin().read_line(&mut data_path)?;

    let config = Config {
        data: DataConfig {
            path: if data_path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(data_path.trim()))
            },
        },
        ui: UiConfig::default(),
    };

    write(&config_path, &config)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run `projboard` to start the dashboard.");

    Ok(())
}

pub fn write(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert!(config.data.path.is_none());
        assert_eq!(config.ui.grid_columns, 3);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_grid_columns_clamped() {
        let config = parse("[ui]\ngrid_columns = 9\n").unwrap();
        assert_eq!(config.ui.grid_columns, MAX_GRID_COLUMNS);
        let config = parse("[ui]\ngrid_columns = 0\n").unwrap();
        assert_eq!(config.ui.grid_columns, MIN_GRID_COLUMNS);
    }

    #[test]
    fn test_data_path_override_wins() {
        let config = parse("[data]\npath = \"/srv/projects.json\"\n").unwrap();
        assert_eq!(config.data_path(None), Some(Path::new("/srv/projects.json")));
        assert_eq!(
            config.data_path(Some(Path::new("other.json"))),
            Some(Path::new("other.json"))
        );
    }
}
