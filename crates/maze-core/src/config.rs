//! Solver configuration
//!
//! Configuration is read from a TOML file: the path given with `--config`
//! (or `MAZE_CONFIG`), else `maze.toml` in the working directory if present.
//! Every field is optional; command-line flags override what is loaded here.
//!
//! ```toml
//! [solve]
//! agenda = "queue"
//! step = false
//!
//! [render]
//! visited = "x"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::{MazeError, Result};
use crate::frontier::Discipline;
use crate::render::DEFAULT_VISITED_MARKER;

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "maze.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MazeConfig {
    /// Defaults for the solve command
    #[serde(default)]
    pub solve: SolveConfig,

    /// Grid rendering options
    #[serde(default)]
    pub render: RenderConfig,
}

/// Defaults for the solve command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolveConfig {
    /// Frontier discipline: "stack" or "queue" (aliases accepted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,

    /// Pause before every dequeue
    #[serde(default)]
    pub step: bool,
}

/// Grid rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Single character drawn for visited open cells
    #[serde(default = "default_visited")]
    pub visited: String,
}

fn default_visited() -> String {
    DEFAULT_VISITED_MARKER.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            visited: default_visited(),
        }
    }
}

impl MazeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MazeError::io_operation("read config", path, e))?;
        let config: MazeConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `maze.toml` in `dir` is used
    /// when present, and defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Check that every value can be used
    pub fn validate(&self) -> Result<()> {
        self.discipline()?;
        self.visited_marker()?;
        Ok(())
    }

    /// Configured default discipline, or [`Discipline::Stack`].
    pub fn discipline(&self) -> Result<Discipline> {
        match &self.solve.agenda {
            Some(agenda) => agenda.parse(),
            None => Ok(Discipline::default()),
        }
    }

    pub fn visited_marker(&self) -> Result<char> {
        let mut chars = self.render.visited.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if !ch.is_whitespace() {
                return Ok(ch);
            }
        }
        bail_invalid!(
            "render.visited (expected one character)",
            format!("{:?}", self.render.visited)
        );
    }
}
