//! Resolve [`Settings`] from the environment, a file, or built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use newsdeck_core::settings::Settings;

/// Env var naming a TOML or JSON settings file.
pub const CONFIG_PATH_ENV: &str = "NEWSDECK_CONFIG_PATH";
/// Env var holding the settings as inline JSON.
pub const CONFIG_JSON_ENV: &str = "NEWSDECK_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "newsdeck.toml",
    "newsdeck.json",
    "config/newsdeck.toml",
    "config/newsdeck.json",
];

/// Where a loaded [`Settings`] value came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Encoding of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Json,
    /// Unknown: TOML is tried first, then JSON.
    Detect,
}

impl SettingsFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SettingsFormat::Toml,
            Some(ext) if ext.eq_ignore_ascii_case("json") => SettingsFormat::Json,
            _ => SettingsFormat::Detect,
        }
    }

    /// Decode `contents`; `origin` names the document in errors.
    pub fn decode(self, contents: &str, origin: &str) -> anyhow::Result<Settings> {
        match self {
            SettingsFormat::Toml => toml::from_str(contents)
                .map_err(|err| anyhow!("{origin}: invalid toml: {err}")),
            SettingsFormat::Json => serde_json::from_str(contents)
                .map_err(|err| anyhow!("{origin}: invalid json: {err}")),
            SettingsFormat::Detect => SettingsFormat::Toml
                .decode(contents, origin)
                .or_else(|toml_err| {
                    SettingsFormat::Json.decode(contents, origin).map_err(|json_err| {
                        anyhow!("{toml_err}; {json_err}")
                    })
                }),
        }
    }
}

/// Loading entry points for [`Settings`].
pub trait LoadSettings: Sized {
    /// `$NEWSDECK_CONFIG_PATH`, then `$NEWSDECK_CONFIG_JSON`, then the first
    /// default file found under the working directory, then defaults.
    fn load_from_env() -> anyhow::Result<(Self, SettingsSource)>;

    /// [`LoadSettings::load_from_env`] against an arbitrary variable lookup
    /// and search root.
    fn load_with<F>(lookup: F, root: &Path) -> anyhow::Result<(Self, SettingsSource)>
    where
        F: Fn(&str) -> Option<String>;

    /// Read a file whose format follows its extension.
    fn load_from_file(path: &Path) -> anyhow::Result<Self>;
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl LoadSettings for Settings {
    fn load_from_env() -> anyhow::Result<(Self, SettingsSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    fn load_with<F>(lookup: F, root: &Path) -> anyhow::Result<(Self, SettingsSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (settings, source) =
            if let Some(path) = non_blank(lookup(CONFIG_PATH_ENV)) {
                let path = PathBuf::from(path.trim());
                (Self::load_from_file(&path)?, SettingsSource::EnvPath(path))
            } else if let Some(raw) = non_blank(lookup(CONFIG_JSON_ENV)) {
                let settings = SettingsFormat::Json.decode(&raw, CONFIG_JSON_ENV)?;
                (settings, SettingsSource::EnvInline)
            } else if let Some(path) = DEFAULT_CANDIDATES
                .iter()
                .map(|candidate| root.join(candidate))
                .find(|path| path.is_file())
            {
                (Self::load_from_file(&path)?, SettingsSource::File(path))
            } else {
                (Self::default(), SettingsSource::Default)
            };

        tracing::debug!(?source, "newsdeck settings resolved");
        Ok((settings, source))
    }

    fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read newsdeck settings from {}", path.display())
        })?;
        SettingsFormat::from_path(path).decode(&contents, &path.display().to_string())
    }
}
