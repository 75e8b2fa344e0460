use crate::assets::{AssetLoader, BoardsSource};
use crate::error::ConfigError;
use eink_pack::{ConvertParams, Target};
use serde::{Deserialize, Serialize};

/// Board definitions loaded from boards.json (or an equivalent YAML file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardsFile {
    #[serde(default)]
    pub boards: Vec<Board>,
}

/// One display board and the modes it can be driven in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Human-readable board name, also used to select it
    pub board: String,

    pub display_width: u32,
    pub display_height: u32,

    #[serde(default)]
    pub modes: Vec<ModeConfig>,

    #[serde(default)]
    pub ui_defaults: UiDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiDefaults {
    /// How the upstream resize step should fit images to this board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize: Option<ResizeMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    Fit,
    Fill,
    Stretch,
}

/// A packed output format a board supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub id: String,

    /// 1, 2, 3, 4, or 5 together with `levels: 7` for seven-color panels
    pub bpp: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<u16>,

    #[serde(default)]
    pub defaults: ModeDefaults,
}

/// Per-mode parameter defaults; anything unset falls back to the built-in default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dither: Option<String>,
}

/// A board, one of its modes, and everything resolved from them for a request
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub board: &'a Board,
    pub mode: &'a ModeConfig,
    pub target: Target,
    pub params: ConvertParams,
}

/// Parameters given for one request; they override the mode defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamOverrides {
    pub threshold: Option<u8>,
    pub invert: Option<bool>,
    pub dither: Option<String>,
}

impl BoardsFile {
    /// Parse a board file, as JSON if it looks like JSON and as YAML otherwise
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        if text.trim_start().starts_with('{') {
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load boards through the asset loader (configured file or embedded default)
    pub fn load(loader: &AssetLoader) -> Result<(Self, BoardsSource), ConfigError> {
        let (text, source) = loader.read_boards_string()?;
        let file = Self::parse(&text)?;
        tracing::info!(
            boards = file.boards.len(),
            source = %source,
            "Loaded board definitions"
        );
        Ok((file, source))
    }

    /// Find a board by name (exact match first, then case-insensitive)
    pub fn board(&self, name: &str) -> Result<&Board, ConfigError> {
        self.boards
            .iter()
            .find(|b| b.board == name)
            .or_else(|| {
                self.boards
                    .iter()
                    .find(|b| b.board.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| ConfigError::BoardNotFound(name.to_string()))
    }

    /// Resolve board, mode, target and parameters for one request
    ///
    /// Without a board name the first board is used; without a mode id, the
    /// board's first mode.
    pub fn select(
        &self,
        board: Option<&str>,
        mode: Option<&str>,
        overrides: &ParamOverrides,
    ) -> Result<Selection<'_>, ConfigError> {
        let board = match board {
            Some(name) => self.board(name)?,
            None => self
                .boards
                .first()
                .ok_or_else(|| ConfigError::BoardNotFound("(none defined)".to_string()))?,
        };
        let mode = board.mode_or_first(mode)?;
        Ok(Selection {
            board,
            mode,
            target: mode.target()?,
            params: mode.params(overrides),
        })
    }
}

impl Board {
    pub fn mode(&self, id: &str) -> Result<&ModeConfig, ConfigError> {
        self.modes
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ConfigError::ModeNotFound {
                board: self.board.clone(),
                mode: id.to_string(),
            })
    }

    /// The requested mode, or the board's first mode when none is named
    pub fn mode_or_first(&self, id: Option<&str>) -> Result<&ModeConfig, ConfigError> {
        match id {
            Some(id) => self.mode(id),
            None => self.modes.first().ok_or_else(|| ConfigError::ModeNotFound {
                board: self.board.clone(),
                mode: "(any)".to_string(),
            }),
        }
    }
}

impl ModeConfig {
    /// Map the mode's bpp/levels pair to a conversion target
    pub fn target(&self) -> Result<Target, ConfigError> {
        let invalid = |source| ConfigError::InvalidMode {
            mode: self.id.clone(),
            source,
        };
        match (self.bpp, self.levels) {
            (1, None | Some(2)) => Ok(Target::Mono),
            (2, None | Some(3)) => Ok(Target::white_black_red()),
            (3, levels) => Target::gray(levels.unwrap_or(8), 3).map_err(invalid),
            (4, levels) => Target::gray(levels.unwrap_or(16), 4).map_err(invalid),
            (5, Some(7)) => Ok(Target::seven_color()),
            (bpp, levels) => Err(ConfigError::UnsupportedMode {
                mode: self.id.clone(),
                bpp,
                levels,
            }),
        }
    }

    /// Resolve request overrides against this mode's defaults
    pub fn params(&self, overrides: &ParamOverrides) -> ConvertParams {
        let builtin = ConvertParams::default();
        ConvertParams {
            dither: overrides
                .dither
                .clone()
                .or_else(|| self.defaults.dither.clone())
                .or(builtin.dither),
            threshold: overrides
                .threshold
                .or(self.defaults.threshold)
                .unwrap_or(builtin.threshold),
            invert: overrides
                .invert
                .or(self.defaults.invert)
                .unwrap_or(builtin.invert),
        }
    }
}
