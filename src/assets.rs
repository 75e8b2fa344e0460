//! Board file loading with an embedded fallback
//!
//! - If `BOARDS_FILE` is NOT set: use the embedded `boards.json` only
//! - If `BOARDS_FILE` IS set and the file is missing: seed it with the embedded default
//! - If `BOARDS_FILE` IS set and the file exists: read it from disk

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the embedded default board file
pub const EMBEDDED_BOARDS: &str = "boards.json";

/// Embedded default board definitions
#[derive(RustEmbed)]
#[folder = "."]
#[include = "boards.json"]
struct EmbeddedBoards;

/// Where a board file was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardsSource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for BoardsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardsSource::File(path) => write!(f, "{}", path.display()),
            BoardsSource::Embedded => f.write_str("embedded"),
        }
    }
}

/// Outcome of extracting the embedded board file
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Board file loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External board file (from BOARDS_FILE env var or --boards)
    boards_file: Option<PathBuf>,
}

impl AssetLoader {
    /// `boards_file` should be `Some` only if a path was configured.
    pub fn new(boards_file: Option<PathBuf>) -> Self {
        Self { boards_file }
    }

    /// Loader configured from the `BOARDS_FILE` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("BOARDS_FILE").ok().map(PathBuf::from))
    }

    pub fn boards_file(&self) -> Option<&Path> {
        self.boards_file.as_deref()
    }

    /// Read the board file
    ///
    /// A configured path that exists wins; otherwise the embedded default is used.
    pub fn read_boards(&self) -> io::Result<(Cow<'static, [u8]>, BoardsSource)> {
        if let Some(ref path) = self.boards_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading boards from filesystem");
                return Ok((Cow::Owned(fs::read(path)?), BoardsSource::File(path.clone())));
            }
        }

        EmbeddedBoards::get(EMBEDDED_BOARDS)
            .map(|f| {
                tracing::trace!("Loading boards from embedded assets");
                (f.data, BoardsSource::Embedded)
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded boards.json not found")
            })
    }

    /// Read the board file as a UTF-8 string
    pub fn read_boards_string(&self) -> io::Result<(String, BoardsSource)> {
        let (bytes, source) = self.read_boards()?;
        let text = String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok((text, source))
    }

    /// Write the embedded default to the configured path if nothing is there yet
    ///
    /// Returns whether a file was written.
    pub fn seed_if_configured(&self) -> io::Result<bool> {
        let Some(ref path) = self.boards_file else {
            return Ok(false);
        };
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        match EmbeddedBoards::get(EMBEDDED_BOARDS) {
            Some(data) => {
                fs::write(path, &*data.data)?;
                tracing::info!(path = %path.display(), "Seeded board file with embedded default");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Extract the embedded board file (init command)
    ///
    /// Uses the configured path, or `./boards.json` if none is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .boards_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./boards.json"));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = EmbeddedBoards::get(EMBEDDED_BOARDS) {
            fs::write(&path, &*data.data)?;
            report.written.push(path.display().to_string());
        }
        Ok(report)
    }
}
