use core::fmt::{self, Write};

use ndarray::Array2;
use sapper_core::{Board, DisplayCell};

fn glyph(cell: DisplayCell) -> char {
    use DisplayCell::*;
    match cell {
        Hidden => '.',
        Flagged => 'F',
        Mine => '*',
        Exploded => 'X',
        Revealed(0) => ' ',
        Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// Board as text with 1-based row and column labels, preceded by the flag counter.
pub fn render(board: &Board, reveal_all: bool) -> String {
    let mut out = String::new();
    render_grid(&mut out, &board.snapshot(reveal_all), board.flagged_count(), board.mine_count())
        .map(|()| out)
        .unwrap_or_default()
}

fn render_grid(out: &mut impl Write, grid: &Array2<DisplayCell>, flags: u32, mines: u32) -> fmt::Result {
    let (rows, cols) = grid.dim();
    let row_width = rows.to_string().len();
    let col_width = cols.to_string().len();

    writeln!(out, "Flags: {}/{}", flags, mines)?;

    write!(out, "{:row_width$} ", "")?;
    for col in 1..=cols {
        write!(out, " {:>col_width$}", col)?;
    }
    writeln!(out)?;

    for (row, cells) in grid.rows().into_iter().enumerate() {
        write!(out, "{:>row_width$} ", row + 1)?;
        for &cell in cells {
            write!(out, " {:>col_width$}", glyph(cell))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
