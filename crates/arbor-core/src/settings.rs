//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggest: SuggestSettings,
    pub layout: LayoutSettings,
    pub highlight: HighlightSettings,
    pub palette: PaletteSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    /// Display cap for the suggestion list.
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    /// Horizontal distance between adjacent leaf slots, world units.
    pub horizontal_spacing: f64,
    /// Vertical distance between depth rows, world units.
    pub row_height: f64,
    pub base_radius: f64,
    /// Floor so zero-weight nodes stay visible.
    pub min_radius: f64,
    /// Radius growth per selection of the node's word.
    pub size_increment_per_weight: f64,
    /// Bounding-extent padding, in multiples of `base_radius`.
    pub padding: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightSettings {
    /// Lifetime of the transient pulse emphasis, milliseconds.
    pub pulse_ms: u64,
    /// Lifetime of the held accent fill; must outlast the pulse.
    pub accent_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaletteSettings {
    pub end_fill: String,
    pub node_fill: String,
    pub edge_stroke: String,
    pub accent_fill: String,
    pub pulse_stroke: String,
    pub text: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let positive = [
        ("layout.horizontal_spacing", s.layout.horizontal_spacing),
        ("layout.row_height", s.layout.row_height),
        ("layout.base_radius", s.layout.base_radius),
        ("layout.min_radius", s.layout.min_radius),
    ];
    for (field, value) in positive {
        if value <= 0.0 {
            return Err(SettingsError::InvalidValue {
                field: field.to_string(),
                reason: "must be positive".to_string(),
            });
        }
    }
    if s.layout.size_increment_per_weight < 0.0 {
        return Err(SettingsError::InvalidValue {
            field: "layout.size_increment_per_weight".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    if s.layout.padding < 0.0 {
        return Err(SettingsError::InvalidValue {
            field: "layout.padding".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    if s.highlight.accent_ms <= s.highlight.pulse_ms {
        return Err(SettingsError::InvalidValue {
            field: "highlight.accent_ms".to_string(),
            reason: "accent must outlast the pulse".to_string(),
        });
    }
    let colors = [
        ("palette.end_fill", &s.palette.end_fill),
        ("palette.node_fill", &s.palette.node_fill),
        ("palette.edge_stroke", &s.palette.edge_stroke),
        ("palette.accent_fill", &s.palette.accent_fill),
        ("palette.pulse_stroke", &s.palette.pulse_stroke),
        ("palette.text", &s.palette.text),
    ];
    for (field, value) in colors {
        if !is_hex_color(value) {
            return Err(SettingsError::InvalidValue {
                field: field.to_string(),
                reason: "expected #rrggbb".to_string(),
            });
        }
    }
    Ok(())
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
