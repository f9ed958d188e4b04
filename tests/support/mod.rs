use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for maze, isolated from any ambient config
pub fn maze() -> Command {
    let mut cmd = cargo_bin_cmd!("maze");
    cmd.env_remove("MAZE_CONFIG")
        .env_remove("MAZE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a maze file into `dir` and return its path
pub fn write_maze(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write maze file");
    path
}

/// Open path from start (0, 0) to finish (2, 0) through row 1
#[allow(dead_code)]
pub const OPEN_MAZE: &str = "3 2\no.*\n...\n";

/// Wall column separating start from finish
#[allow(dead_code)]
pub const BLOCKED_MAZE: &str = "5 3\no.#..\n..#.*\n..#..\n";
