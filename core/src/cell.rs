use serde::{Deserialize, Serialize};

/// Per-cell state stored by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mine_count: u8,
}

impl Cell {
    /// Hidden and unflagged, the only state a reveal acts on.
    pub const fn is_hidden(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub fn display(self, reveal_all: bool, exploded: bool) -> DisplayCell {
        use DisplayCell::*;

        match (self.is_mine, self.is_revealed || reveal_all) {
            (true, true) if exploded => Exploded,
            (true, true) => Mine,
            (false, true) => Revealed(self.adjacent_mine_count),
            (_, false) if self.is_flagged => Flagged,
            (_, false) => Hidden,
        }
    }
}

/// Player-visible rendering of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCell {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    /// The mine that ended the game.
    Exploded,
}

impl DisplayCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_mine_stays_hidden_until_reveal_all() {
        let cell = Cell {
            is_mine: true,
            ..Default::default()
        };

        assert_eq!(cell.display(false, false), DisplayCell::Hidden);
        assert_eq!(cell.display(true, false), DisplayCell::Mine);
    }

    #[test]
    fn flag_is_replaced_by_true_content_when_revealing_all() {
        let cell = Cell {
            is_flagged: true,
            adjacent_mine_count: 2,
            ..Default::default()
        };

        assert_eq!(cell.display(false, false), DisplayCell::Flagged);
        assert_eq!(cell.display(true, false), DisplayCell::Revealed(2));
    }

    #[test]
    fn triggered_mine_shows_exploded() {
        let cell = Cell {
            is_mine: true,
            is_revealed: true,
            ..Default::default()
        };

        assert_eq!(cell.display(false, true), DisplayCell::Exploded);
    }
}
