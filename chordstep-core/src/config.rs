use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::presets::Preset;
use crate::setup::StepperSource;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    stepper: StepperConfig,
    #[serde(default)]
    host: HostConfig,
}

#[derive(Deserialize, Default)]
struct StepperConfig {
    preset: Option<String>,
    table: Option<PathBuf>,
    replay_offset: Option<usize>,
}

#[derive(Deserialize, Default)]
struct HostConfig {
    format: Option<String>,
    echo: Option<bool>,
}

/// How the host adapter prints emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `out<N> v0 v1 ...`, one line per outlet message.
    #[default]
    Max,
    /// One JSON object per emission.
    Json,
}

pub struct Config {
    stepper: StepperConfig,
    host: HostConfig,
}

impl Config {
    /// Embedded defaults merged with `~/.config/chordstep/config.toml`.
    pub fn load() -> Self {
        Self::load_from(user_config_path().as_deref())
    }

    pub fn load_from(user_path: Option<&Path>) -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_path {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => {
                            merge_stepper(&mut base.stepper, user.stepper);
                            merge_host(&mut base.host, user.host);
                        }
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            stepper: base.stepper,
            host: base.host,
        }
    }

    pub fn preset(&self) -> Preset {
        match self.stepper.preset.as_deref() {
            Some(name) => Preset::from_name(name).unwrap_or_else(|| {
                log::warn!(target: "config", "unknown preset '{}', using default", name);
                Preset::default()
            }),
            None => Preset::default(),
        }
    }

    pub fn table_path(&self) -> Option<&Path> {
        self.stepper.table.as_deref()
    }

    pub fn replay_offset(&self) -> Option<usize> {
        self.stepper.replay_offset
    }

    /// Stepper description built from the `[stepper]` section.
    pub fn stepper_source(&self) -> StepperSource {
        StepperSource {
            preset: self.preset(),
            table: self.stepper.table.clone(),
            replay_offset: self.stepper.replay_offset,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.host
            .format
            .as_deref()
            .and_then(parse_format)
            .unwrap_or_default()
    }

    pub fn echo(&self) -> bool {
        self.host.echo.unwrap_or(false)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("chordstep").join("config.toml"))
}

fn merge_stepper(base: &mut StepperConfig, user: StepperConfig) {
    if user.preset.is_some() {
        base.preset = user.preset;
    }
    if user.table.is_some() {
        base.table = user.table;
    }
    if user.replay_offset.is_some() {
        base.replay_offset = user.replay_offset;
    }
}

fn merge_host(base: &mut HostConfig, user: HostConfig) {
    if user.format.is_some() {
        base.format = user.format;
    }
    if user.echo.is_some() {
        base.echo = user.echo;
    }
}

pub fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_lowercase().as_str() {
        "max" | "list" => Some(OutputFormat::Max),
        "json" | "jsonl" => Some(OutputFormat::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_config() {
        let config = Config::load_from(None);
        assert_eq!(config.preset(), Preset::Crack);
        assert!(config.table_path().is_none());
        assert_eq!(config.replay_offset(), None);
        assert_eq!(config.output_format(), OutputFormat::Max);
        assert!(!config.echo());
    }

    #[test]
    fn test_user_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[stepper]\npreset = \"ice-counted\"\nreplay_offset = 2\n\n[host]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path));
        assert_eq!(config.preset(), Preset::IceCounted);
        assert_eq!(config.replay_offset(), Some(2));
        assert_eq!(config.output_format(), OutputFormat::Json);
        // untouched keys keep their defaults
        assert!(!config.echo());

        let source = config.stepper_source();
        assert_eq!(source.preset, Preset::IceCounted);
        assert_eq!(source.replay_offset, Some(2));
    }

    #[test]
    fn test_malformed_user_config_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[stepper\npreset = ").unwrap();

        let config = Config::load_from(Some(&path));
        assert_eq!(config.preset(), Preset::Crack);
    }

    #[test]
    fn test_missing_user_config_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(&dir.path().join("nope.toml")));
        assert_eq!(config.preset(), Preset::Crack);
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[stepper]\npreset = \"glass\"\n").unwrap();
        assert_eq!(Config::load_from(Some(&path)).preset(), Preset::Crack);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("JSON"), Some(OutputFormat::Json));
        assert_eq!(parse_format("max"), Some(OutputFormat::Max));
        assert_eq!(parse_format("xml"), None);
    }
}
