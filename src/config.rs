//! bizcard runtime configuration handling

use crate::error::{Error, Result};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Divisor applied to the smaller canvas dimension to derive the font size
const FONT_SIZE_RATIO: f64 = 7.9;

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Contact fields embedded in the vCard and drawn on the card
    pub contact: ContactOptions,
    /// Rendering overrides (theme, canvas size, font, output format)
    pub render: RenderOptions,
    /// Artifact directory and viewer configuration
    pub output: OutputOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl CardConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    ///
    /// Environment variables are read once here, at the boundary; library code
    /// below this point only ever sees the resolved values.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No bizcard.toml / bizcard.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["bizcard.toml", "bizcard.yaml", "bizcard.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("bizcard");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.contact.apply_env_overrides();
        self.render.apply_env_overrides();
        self.output.apply_env_overrides();
        self.logging.apply_env_overrides();
    }

    /// Produce fully resolved card parameters ready to drive the pipeline.
    pub fn resolve(&self) -> Result<CardParams> {
        Ok(CardParams {
            contact: self.contact.resolve(),
            render: self.render.resolve()?,
        })
    }
}

/// Fully resolved inputs for a single card generation run
#[derive(Debug, Clone)]
pub struct CardParams {
    /// Contact fields with defaults substituted
    pub contact: ContactFields,
    /// Rendering configuration with defaults substituted and theme parsed
    pub render: RenderConfig,
}

/// Optional contact fields as supplied by file or environment.
///
/// Absent means "use the default"; an explicitly empty string is kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactOptions {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Role or organization line
    pub description: Option<String>,
    /// Telephone number
    pub telephone: Option<String>,
    /// Email address, drawn on the front face
    pub email: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Street address
    pub street: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Postal code
    pub postcode: Option<String>,
    /// Country
    pub country: Option<String>,
}

impl ContactOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        // These variable names are unprefixed on purpose; they match the
        // .env contract of the original card generator.
        let overrides: [(&str, &mut Option<String>); 11] = [
            ("FIRST_NAME", &mut self.first_name),
            ("LAST_NAME", &mut self.last_name),
            ("DESCRIPTION", &mut self.description),
            ("TELEPHONE", &mut self.telephone),
            ("EMAIL", &mut self.email),
            ("WEBSITE", &mut self.website),
            ("STREET", &mut self.street),
            ("CITY", &mut self.city),
            ("STATE", &mut self.state),
            ("POSTCODE", &mut self.postcode),
            ("COUNTRY", &mut self.country),
        ];
        for (name, slot) in overrides {
            if let Ok(value) = env::var(name) {
                *slot = Some(value);
            }
        }
    }

    /// Substitute defaults for every unset field.
    pub fn resolve(&self) -> ContactFields {
        let get = |field: &Option<String>| field.clone().unwrap_or_default();
        ContactFields {
            first_name: get(&self.first_name),
            last_name: get(&self.last_name),
            description: get(&self.description),
            telephone: get(&self.telephone),
            email: self.email.clone().unwrap_or_else(|| "@".to_string()),
            website: get(&self.website),
            street: get(&self.street),
            city: get(&self.city),
            state: get(&self.state),
            postcode: get(&self.postcode),
            country: get(&self.country),
        }
    }
}

/// Resolved contact fields; unset fields are empty, email defaults to `"@"`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFields {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Role or organization line
    pub description: String,
    /// Telephone number
    pub telephone: String,
    /// Email address
    pub email: String,
    /// Website URL
    pub website: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Postal code
    pub postcode: String,
    /// Country
    pub country: String,
}

/// User-friendly rendering overrides merged on top of the built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output image format (file extension), e.g. `png`
    pub format: Option<String>,
    /// Theme name: light, dark, or bitcoin
    pub theme: Option<String>,
    /// Canvas width in pixels
    pub width: Option<u32>,
    /// Canvas height in pixels
    pub height: Option<u32>,
    /// Directory holding font files
    pub font_dir: Option<PathBuf>,
    /// Font file path relative to `font_dir`
    pub font: Option<PathBuf>,
}

impl RenderOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(theme) = env::var("THEME") {
            self.theme = Some(theme);
        }
    }

    /// Merge overrides onto the default render configuration.
    pub fn resolve(&self) -> Result<RenderConfig> {
        let theme = match &self.theme {
            Some(name) => name.parse::<Theme>()?,
            None => Theme::default(),
        };
        let width = self.width.unwrap_or(850);
        let height = self.height.unwrap_or(550);

        Ok(RenderConfig {
            format: self
                .format
                .clone()
                .unwrap_or_else(|| "png".to_string())
                .to_ascii_lowercase(),
            theme,
            width,
            height,
            font_dir: self
                .font_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("font")),
            font: self
                .font
                .clone()
                .unwrap_or_else(|| PathBuf::from("ubuntu/Ubuntu-Regular.ttf")),
            font_size: font_size(width, height),
        })
    }
}

/// Resolved rendering configuration shared by both card faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output image format (file extension)
    pub format: String,
    /// Selected theme
    pub theme: Theme,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Directory holding font files
    pub font_dir: PathBuf,
    /// Font file path relative to `font_dir`
    pub font: PathBuf,
    /// Text size in pixels, derived from the canvas dimensions
    pub font_size: u32,
}

impl RenderConfig {
    /// Absolute or working-directory-relative path to the font file.
    pub fn font_path(&self) -> PathBuf {
        self.font_dir.join(&self.font)
    }
}

/// Derive the text size from the canvas dimensions.
///
/// There is no independent font-size override; the size always tracks the
/// smaller canvas dimension.
pub fn font_size(width: u32, height: u32) -> u32 {
    (f64::from(width.min(height)) / FONT_SIZE_RATIO).round() as u32
}

/// Artifact directory and viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Working directory the artifacts are written into
    pub dir: PathBuf,
    /// Viewer command launched on the finished faces with `--open`
    pub viewer: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            viewer: "xdg-open".to_string(),
        }
    }
}

impl OutputOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("BIZCARD_OUTPUT_DIR") {
            self.dir = PathBuf::from(dir);
        }
        if let Ok(viewer) = env::var("BIZCARD_VIEWER") {
            self.viewer = viewer;
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `BIZCARD_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("BIZCARD_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("BIZCARD_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("BIZCARD_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("BIZCARD_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}
