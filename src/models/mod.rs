pub mod config;

pub use config::{
    Board, BoardsFile, ModeConfig, ModeDefaults, ParamOverrides, ResizeMode, Selection,
    UiDefaults,
};
