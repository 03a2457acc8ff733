#![forbid(unsafe_code)]

//! Theme-as-data configuration.
//!
//! A [`ThemeConfig`] captures every color slot and widget glyph of a
//! [`Theme`] in a form that can be loaded from TOML or JSON at startup.
//!
//! ```toml
//! # fkit-theme.toml
//! [palette]
//! accent = "#ff8800"
//! danger = "#cc0000"
//!
//! [glyphs]
//! checkbox_checked = "[✓]"
//! ```
//!
//! ```rust,ignore
//! let config = ThemeConfig::from_toml_file("fkit-theme.toml")?;
//! let theme = config.to_theme();
//! ```
//!
//! Every field defaults to the matching value of [`Theme::default`], so a
//! partial file only overrides what it names.

#[cfg(feature = "theme-config")]
use std::path::Path;

#[cfg(feature = "theme-config")]
use serde::{Deserialize, Serialize};

use crate::theme::{Glyphs, Theme};
use fkit_core::text_width::display_width;
use fkit_render::cell::PackedRgba;

/// Glyphs wider than this many columns are rejected by validation.
pub const MAX_GLYPH_WIDTH: usize = 8;

/// Color slots, written as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "theme-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "theme-config", serde(default))]
pub struct PaletteConfig {
    pub text: String,
    pub muted: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub disabled: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
}

/// Widget glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "theme-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "theme-config", serde(default))]
pub struct GlyphConfig {
    pub checkbox_checked: String,
    pub checkbox_unchecked: String,
    pub checkbox_indeterminate: String,
    pub toggle_on: String,
    pub toggle_off: String,
    pub dropdown_closed: String,
    pub dropdown_open: String,
    pub nav_expanded: String,
    pub nav_collapsed: String,
}

/// Top-level theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "theme-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "theme-config", serde(default))]
pub struct ThemeConfig {
    pub palette: PaletteConfig,
    pub glyphs: GlyphConfig,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let t = Theme::default();
        Self {
            text: to_hex(t.text),
            muted: to_hex(t.muted),
            accent: to_hex(t.accent),
            background: to_hex(t.background),
            surface: to_hex(t.surface),
            disabled: to_hex(t.disabled),
            info: to_hex(t.info),
            success: to_hex(t.success),
            warning: to_hex(t.warning),
            danger: to_hex(t.danger),
        }
    }
}

impl Default for GlyphConfig {
    fn default() -> Self {
        let g = Glyphs::default();
        Self {
            checkbox_checked: g.checkbox_checked,
            checkbox_unchecked: g.checkbox_unchecked,
            checkbox_indeterminate: g.checkbox_indeterminate,
            toggle_on: g.toggle_on,
            toggle_off: g.toggle_off,
            dropdown_closed: g.dropdown_closed,
            dropdown_open: g.dropdown_open,
            nav_expanded: g.nav_expanded,
            nav_collapsed: g.nav_collapsed,
        }
    }
}

impl PaletteConfig {
    fn slots(&self) -> [(&'static str, &str); 10] {
        [
            ("text", &self.text),
            ("muted", &self.muted),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("disabled", &self.disabled),
            ("info", &self.info),
            ("success", &self.success),
            ("warning", &self.warning),
            ("danger", &self.danger),
        ]
    }
}

impl GlyphConfig {
    fn slots(&self) -> [(&'static str, &str); 9] {
        [
            ("checkbox_checked", &self.checkbox_checked),
            ("checkbox_unchecked", &self.checkbox_unchecked),
            ("checkbox_indeterminate", &self.checkbox_indeterminate),
            ("toggle_on", &self.toggle_on),
            ("toggle_off", &self.toggle_off),
            ("dropdown_closed", &self.dropdown_closed),
            ("dropdown_open", &self.dropdown_open),
            ("nav_expanded", &self.nav_expanded),
            ("nav_collapsed", &self.nav_collapsed),
        ]
    }
}

impl ThemeConfig {
    /// Load from a TOML string.
    #[cfg(feature = "theme-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ThemeConfigError> {
        toml::from_str(s).map_err(ThemeConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "theme-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ThemeConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ThemeConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "theme-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ThemeConfigError> {
        serde_json::from_str(s).map_err(ThemeConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "theme-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ThemeConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ThemeConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate every field.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in self.palette.slots() {
            if let Err(e) = parse_hex_color(value) {
                errors.push(format!("palette.{name}: {e}"));
            }
        }

        for (name, value) in self.glyphs.slots() {
            let width = display_width(value);
            if width == 0 {
                errors.push(format!("glyphs.{name} must not be empty"));
            } else if width > MAX_GLYPH_WIDTH {
                errors.push(format!(
                    "glyphs.{name} must be at most {MAX_GLYPH_WIDTH} columns, got {width}"
                ));
            }
        }

        // Paired glyphs swap in place, so they must occupy the same columns.
        let g = &self.glyphs;
        let checkbox = [
            &g.checkbox_checked,
            &g.checkbox_unchecked,
            &g.checkbox_indeterminate,
        ];
        if checkbox
            .iter()
            .any(|s| display_width(s) != display_width(&g.checkbox_checked))
        {
            errors.push("glyphs.checkbox_* must all have the same width".into());
        }
        if display_width(&g.toggle_on) != display_width(&g.toggle_off) {
            errors.push("glyphs.toggle_on and glyphs.toggle_off must have the same width".into());
        }

        errors
    }

    /// Like [`validate`](Self::validate) but as a `Result`.
    pub fn validated(self) -> Result<Self, ThemeConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ThemeConfigError::Validation(errors))
        }
    }

    /// Build the runtime [`Theme`].
    ///
    /// Invalid colors and empty glyphs fall back to the default theme's value
    /// and are logged at `warn` level; call [`validate`](Self::validate)
    /// first to reject them instead.
    #[must_use]
    pub fn to_theme(&self) -> Theme {
        let d = Theme::default();
        let color = |name: &str, raw: &str, fallback: PackedRgba| match parse_hex_color(raw) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(slot = name, value = raw, error = %e, "theme color rejected");
                fallback
            }
        };
        let glyph = |name: &str, raw: &str, fallback: String| {
            if raw.is_empty() {
                tracing::warn!(slot = name, "empty theme glyph rejected");
                fallback
            } else {
                raw.to_string()
            }
        };
        let p = &self.palette;
        let g = &self.glyphs;
        let dg = d.glyphs.clone();
        Theme {
            text: color("text", &p.text, d.text),
            muted: color("muted", &p.muted, d.muted),
            accent: color("accent", &p.accent, d.accent),
            background: color("background", &p.background, d.background),
            surface: color("surface", &p.surface, d.surface),
            disabled: color("disabled", &p.disabled, d.disabled),
            info: color("info", &p.info, d.info),
            success: color("success", &p.success, d.success),
            warning: color("warning", &p.warning, d.warning),
            danger: color("danger", &p.danger, d.danger),
            glyphs: Glyphs {
                checkbox_checked: glyph("checkbox_checked", &g.checkbox_checked, dg.checkbox_checked),
                checkbox_unchecked: glyph(
                    "checkbox_unchecked",
                    &g.checkbox_unchecked,
                    dg.checkbox_unchecked,
                ),
                checkbox_indeterminate: glyph(
                    "checkbox_indeterminate",
                    &g.checkbox_indeterminate,
                    dg.checkbox_indeterminate,
                ),
                toggle_on: glyph("toggle_on", &g.toggle_on, dg.toggle_on),
                toggle_off: glyph("toggle_off", &g.toggle_off, dg.toggle_off),
                dropdown_closed: glyph("dropdown_closed", &g.dropdown_closed, dg.dropdown_closed),
                dropdown_open: glyph("dropdown_open", &g.dropdown_open, dg.dropdown_open),
                nav_expanded: glyph("nav_expanded", &g.nav_expanded, dg.nav_expanded),
                nav_collapsed: glyph("nav_collapsed", &g.nav_collapsed, dg.nav_collapsed),
            },
        }
    }
}

/// Parse `#rrggbb` (or `rrggbb`) into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<PackedRgba, String> {
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("expected #rrggbb, got {s:?}"));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
    Ok(PackedRgba::rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Format an opaque color as `#rrggbb`.
#[must_use]
pub fn to_hex(color: PackedRgba) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a theme configuration.
#[derive(Debug)]
pub enum ThemeConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "theme-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "theme-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ThemeConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "theme-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "theme-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ThemeConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "theme-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "theme-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
