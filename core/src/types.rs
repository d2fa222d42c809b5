/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Validated two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Player-supplied coordinates `(row, col)`, not yet checked against the board.
pub type RawCoord2 = (i32, i32);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts raw coordinates into board coordinates, `None` when outside `bounds`.
pub fn locate((row, col): RawCoord2, bounds: Coord2) -> Option<Coord2> {
    let row = Coord::try_from(row).ok()?;
    let col = Coord::try_from(col).ok()?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// The up-to-8 cells around `center`, in row-major order, skipping those past the edges of `bounds`.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    (-1i16..=1)
        .flat_map(|d_row| (-1i16..=1).map(move |d_col| (d_row, d_col)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |(d_row, d_col)| {
            let row = center.0.checked_add_signed(d_row)?;
            let col = center.1.checked_add_signed(d_col)?;
            (row < bounds.0 && col < bounds.1).then_some((row, col))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let cells: Vec<_> = neighbors((0, 0), (3, 3)).collect();

        assert_eq!(cells, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(neighbors((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn edge_of_single_row_board() {
        let cells: Vec<_> = neighbors((0, 2), (1, 4)).collect();

        assert_eq!(cells, [(0, 1), (0, 3)]);
    }

    #[test]
    fn locate_rejects_negative_and_oversized() {
        assert_eq!(locate((-1, 0), (3, 3)), None);
        assert_eq!(locate((0, 3), (3, 3)), None);
        assert_eq!(locate((i32::MAX, 0), (3, 3)), None);
        assert_eq!(locate((2, 1), (3, 3)), Some((2, 1)));
    }
}
