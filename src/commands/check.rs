//! `maze check` - validate a maze file without searching it

use std::path::Path;

use maze_core::error::Result;
use maze_core::format::OutputFormat;
use maze_core::grid::{Cell, Grid};
use maze_core::loader::load_maze;

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let grid = load_maze(file)?;

    // the loader guarantees both endpoints
    let start = grid.start_cell().map(Cell::position);
    let finish = grid.finish_cell().map(Cell::position);

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", summary(&grid));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": file.display().to_string(),
                "valid": true,
                "width": grid.width(),
                "height": grid.height(),
                "start": start,
                "finish": finish,
                "passable": grid.passable_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn summary(grid: &Grid) -> String {
    let describe = |cell: Option<&Cell>| {
        cell.map_or_else(|| "none".to_string(), |c| c.position().to_string())
    };
    format!(
        "ok: {}x{} maze, start {}, finish {}, {} open cells",
        grid.width(),
        grid.height(),
        describe(grid.start_cell()),
        describe(grid.finish_cell()),
        grid.passable_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::loader::parse_maze;

    #[test]
    fn test_summary() {
        let grid = parse_maze("3 2\no#*\n...\n").unwrap();
        assert_eq!(
            summary(&grid),
            "ok: 3x2 maze, start (0, 0), finish (2, 0), 5 open cells"
        );
    }
}
