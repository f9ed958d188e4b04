//! Integration tests for the maze CLI
//!
//! These tests run the maze binary and check its output and exit codes.

mod support;

use predicates::prelude::*;
use tempfile::tempdir;

use support::{maze, write_maze, BLOCKED_MAZE, OPEN_MAZE};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    maze()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: maze"))
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_version_flag() {
    maze()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("maze"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    maze()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `maze --help`"));
}

// ============================================================================
// solve
// ============================================================================

#[test]
fn test_solve_open_maze_both_agendas() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", OPEN_MAZE);

    for agenda in ["stack", "queue"] {
        maze()
            .current_dir(dir.path())
            .arg("solve")
            .arg(&path)
            .args(["--agenda", agenda])
            .assert()
            .success()
            .stdout("Maze solution found\n");
    }
}

#[test]
fn test_solve_blocked_maze_is_not_an_error() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "blocked.txt", BLOCKED_MAZE);

    for agenda in ["stack", "queue"] {
        maze()
            .current_dir(dir.path())
            .arg("solve")
            .arg(&path)
            .args(["-a", agenda])
            .assert()
            .code(0)
            .stdout("Maze solution does not exist\n");
    }
}

#[test]
fn test_solve_show_marks_visited_cells() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "blocked.txt", BLOCKED_MAZE);

    maze()
        .current_dir(dir.path())
        .args(["solve", "--show"])
        .arg(&path)
        .assert()
        .success()
        .stdout("ox#..\nxx#.*\nxx#..\nMaze solution does not exist\n");
}

#[test]
fn test_solve_json_report() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", OPEN_MAZE);

    let output = maze()
        .current_dir(dir.path())
        .args(["--format", "json", "solve", "--agenda", "queue"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["discipline"], "queue");
    assert!(json["expanded"].as_u64().unwrap() >= 1);
    assert!(json.get("grid").is_none());
}

#[test]
fn test_solve_step_mode_reads_stdin() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "line.txt", "3 1\no.*\n");

    maze()
        .current_dir(dir.path())
        .args(["solve", "--step", "--agenda", "queue"])
        .arg(&path)
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1: next (0, 0)"))
        .stdout(predicate::str::contains("Press enter to continue"))
        .stdout(predicate::str::ends_with("Maze solution found\n"));
}

#[test]
fn test_solve_unknown_agenda_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", OPEN_MAZE);

    maze()
        .current_dir(dir.path())
        .arg("solve")
        .arg(&path)
        .args(["--agenda", "heap"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown agenda type: heap"));
}

#[test]
fn test_unknown_argument_json_usage_error() {
    maze()
        .args(["--format", "json", "solve", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_solve_missing_file_exit_code_1() {
    let dir = tempdir().unwrap();

    maze()
        .current_dir(dir.path())
        .args(["solve", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read maze file"));
}

// ============================================================================
// Malformed input (exit code 3)
// ============================================================================

#[test]
fn test_malformed_row_reports_line() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "bad.txt", "3 2\no.*\n..\n");

    maze()
        .current_dir(dir.path())
        .arg("solve")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_malformed_json_error_envelope() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "bad.txt", "3 2\no.*\n.?.\n");

    let output = maze()
        .current_dir(dir.path())
        .args(["--format", "json", "check"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "malformed_input");
    assert_eq!(json["error"]["line"], 3);
}

#[test]
fn test_duplicate_start_rejected() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "two.txt", "3 2\no.*\no..\n");

    maze()
        .current_dir(dir.path())
        .arg("check")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("more than one start cell"));
}

#[test]
fn test_missing_finish_rejected() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "nofinish.txt", "2 1\no.\n");

    maze()
        .current_dir(dir.path())
        .arg("solve")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no finish cell"));
}

// ============================================================================
// check / render
// ============================================================================

#[test]
fn test_check_summary() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", OPEN_MAZE);

    maze()
        .current_dir(dir.path())
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout("ok: 3x2 maze, start (0, 0), finish (2, 0), 6 open cells\n");

    maze()
        .current_dir(dir.path())
        .args(["--quiet", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_render_prints_rows() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", "3 2\r\no#*\r\n...\r\n");

    maze()
        .current_dir(dir.path())
        .arg("render")
        .arg(&path)
        .assert()
        .success()
        .stdout("o#*\n...\n");
}

#[test]
fn test_render_header_output_loads_again() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", "3 2\r\n o#* \r\n...\r\n\r\n");

    let output = maze()
        .current_dir(dir.path())
        .args(["render", "--header"])
        .arg(&path)
        .assert()
        .success()
        .stdout("3 2\no#*\n...\n")
        .get_output()
        .stdout
        .clone();

    let copy = write_maze(
        dir.path(),
        "copy.txt",
        &String::from_utf8(output).unwrap(),
    );
    maze()
        .current_dir(dir.path())
        .arg("check")
        .arg(&copy)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 3x2 maze"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_in_working_dir_sets_agenda_and_marker() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "blocked.txt", BLOCKED_MAZE);
    std::fs::write(
        dir.path().join("maze.toml"),
        "[solve]\nagenda = \"queue\"\n\n[render]\nvisited = \"+\"\n",
    )
    .unwrap();

    let output = maze()
        .current_dir(dir.path())
        .args(["--format", "json", "solve", "--show"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["discipline"], "queue");
    assert_eq!(json["grid"], "o+#..\n++#.*\n++#..\n");
}

#[test]
fn test_flag_overrides_config_agenda() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", OPEN_MAZE);
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[solve]\nagenda = \"queue\"\n").unwrap();

    let output = maze()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "solve", "--agenda", "stack"])
        .arg(&path)
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["discipline"], "stack");
}

#[test]
fn test_bad_config_value_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = write_maze(dir.path(), "open.txt", OPEN_MAZE);
    std::fs::write(dir.path().join("maze.toml"), "[render]\nvisited = \"\"\n").unwrap();

    maze()
        .current_dir(dir.path())
        .arg("solve")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("render.visited"));
}
