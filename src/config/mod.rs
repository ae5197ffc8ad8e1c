#[cfg(feature = "cli")]
pub mod cli;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::model::{Color, CountingMode, TripleTable};
use crate::utils::error::{MatrixError, Result};
use crate::utils::validation::{
    validate_dimension, validate_non_empty, validate_search_paths, Validate,
};

/// Everything the calculation and rendering core can be tuned with. Every
/// field has a documented default; nothing hides in process-wide constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub canvas: CanvasConfig,
    pub engine: EngineConfig,
    pub contact: ContactConfig,
    pub fonts: FontConfig,
    pub palette: PaletteConfig,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            engine: EngineConfig::default(),
            contact: ContactConfig::default(),
            fonts: FontConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}

/// Canvas pixel dimensions. The defaults match the 1080×1360 card mock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1360,
        }
    }
}

/// Which historical counting variant and triple table the engine runs with.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub counting: CountingMode,
    pub triples: TripleTable,
}

/// The footer card content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub title: String,
    pub handle: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            title: "Instagram".to_string(),
            handle: "@margosha_3811".to_string(),
        }
    }
}

/// Filesystem probe list for typefaces; the first hit wins and missing paths
/// are skipped. An empty probe result degrades to system fonts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub search_paths: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string(),
                "/System/Library/Fonts/Supplemental/Arial Unicode.ttf".to_string(),
                "/Library/Fonts/Arial Unicode.ttf".to_string(),
            ],
        }
    }
}

/// Card colors. Text color per card is derived from the fill's luminance, so
/// swapping the palette keeps the contrast rule intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub accent: Color,
    pub muted: Color,
    pub background: Color,
    pub text_dark: Color,
    pub text_light: Color,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            accent: Color::new(200, 60, 56),
            muted: Color::new(245, 236, 228),
            background: Color::new(255, 255, 255),
            text_dark: Color::new(40, 40, 40),
            text_light: Color::new(255, 255, 255),
        }
    }
}

impl MatrixConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MatrixError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MatrixError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_dimension("canvas.width", self.canvas.width, 64, 8192)?;
        validate_dimension("canvas.height", self.canvas.height, 64, 8192)?;
        validate_non_empty("contact.title", &self.contact.title)?;
        validate_non_empty("contact.handle", &self.contact.handle)?;
        validate_search_paths("fonts.search_paths", &self.fonts.search_paths)?;
        Ok(())
    }
}

impl Validate for MatrixConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
