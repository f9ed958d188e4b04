//! `maze render` - print a maze as parsed

use std::path::Path;

use maze_core::error::Result;
use maze_core::format::OutputFormat;
use maze_core::loader::load_maze;
use maze_core::render::{render_with_header, DEFAULT_VISITED_MARKER};

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, file: &Path, header: bool) -> Result<()> {
    let grid = load_maze(file)?;
    let body = grid.to_string();

    match ctx.cli.format {
        OutputFormat::Human if header => {
            print!("{}", render_with_header(&grid, DEFAULT_VISITED_MARKER));
        }
        OutputFormat::Human => print!("{body}"),
        OutputFormat::Json => {
            let rows: Vec<&str> = body.lines().collect();
            let output = serde_json::json!({
                "width": grid.width(),
                "height": grid.height(),
                "rows": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
