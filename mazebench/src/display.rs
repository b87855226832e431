//! Character-grid rendering of a maze with a path overlay.

use mazegrid_core::{CellId, Maze};

/// Render the maze as a character grid with `path` overlaid.
///
/// The entry cell is marked `S`, the exit cell `E`, other path cells `*`,
/// and everything else is background `.`. One line per row, symbols
/// separated by single spaces.
pub fn render_path(maze: &Maze, path: &[CellId]) -> String {
    let mut symbols = vec!["."; maze.cell_count()];
    for &id in path {
        if let Some(symbol) = symbols.get_mut(id) {
            *symbol = "*";
        }
    }
    if symbols.is_empty() {
        return String::new();
    }
    symbols[maze.entry_id()] = "S";
    symbols[maze.exit_id()] = "E";

    let cols = maze.cols() as usize;
    let mut out = String::new();
    for line in symbols.chunks(cols) {
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_marks_endpoints_and_path() {
        let maze = Maze::new(3, 3);
        let rendered = render_path(&maze, &[0, 1, 2, 5, 8]);
        assert_eq!(rendered, "S * *\n. . *\n. . E\n");
    }

    #[test]
    fn empty_path_still_marks_endpoints() {
        let maze = Maze::new(2, 2);
        let rendered = render_path(&maze, &[]);
        assert_eq!(rendered, "S .\n. E\n");
    }

    #[test]
    fn out_of_range_path_ids_are_ignored() {
        let maze = Maze::new(2, 2);
        let rendered = render_path(&maze, &[42]);
        assert_eq!(rendered, "S .\n. E\n");
    }
}
