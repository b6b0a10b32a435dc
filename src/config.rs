use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use crate::messages::Language;

/// Per-rule switches.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids to skip, e.g. `["html-lang"]`.
    pub disable: Vec<String>,
}

impl RulesConfig {
    pub fn is_enabled(&self, id: &str) -> bool {
        !self.disable.iter().any(|disabled| disabled == id)
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Language of diagnostic and fix messages. Never affects rule logic.
    pub language: Language,
    pub rules: RulesConfig,
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    pub fn disable_rule(mut self, id: impl Into<String>) -> Self {
        self.config.rules.disable.push(id.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

const CANDIDATE_NAMES: &[&str] = &[".a11ymate.toml", "a11ymate.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("a11ymate").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    let p = dirs::config_dir()?.join("a11ymate").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .a11ymate.toml, a11ymate.toml
/// 3) user config: $XDG_CONFIG_HOME/a11ymate/config.toml or the platform config dir
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
