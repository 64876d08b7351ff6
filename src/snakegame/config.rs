use color_eyre::{eyre::ensure, Result};

use crate::snakegame::types::Coord;

/// Length of the snake every game starts with.
pub const INITIAL_LENGTH: i64 = 3;

/// Board geometry in pixels. The playing grid is `width / block_size` by
/// `height / block_size` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    width:      i64,
    height:     i64,
    block_size: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width:      640,
            height:     480,
            block_size: 20,
        }
    }
}

impl BoardConfig {
    /// # Errors
    ///
    /// Fails if any dimension is non-positive, if `block_size` does not
    /// divide both dimensions, if the grid is too small for the starting
    /// snake and a piece of food, or if its cell count overflows.
    pub fn new(width: i64, height: i64, block_size: i64) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {width}x{height}"
        );
        ensure!(
            block_size > 0,
            "block size must be positive, got {block_size}"
        );
        ensure!(
            width % block_size == 0 && height % block_size == 0,
            "block size {block_size} does not divide board {width}x{height}"
        );

        let config = Self {
            width,
            height,
            block_size,
        };

        // the head starts in the middle column with the body trailing left
        ensure!(
            config.columns() / 2 >= INITIAL_LENGTH - 1,
            "board is {} cells wide, need at least {} for the starting snake",
            config.columns(),
            2 * (INITIAL_LENGTH - 1)
        );
        ensure!(
            config.columns().checked_mul(config.rows()).is_some(),
            "board of {}x{} cells is too large",
            config.columns(),
            config.rows()
        );

        Ok(config)
    }

    /// A board measured directly in cells.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BoardConfig::new`].
    pub fn cells(columns: i64, rows: i64) -> Result<Self> {
        Self::new(columns, rows, 1)
    }

    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i64 {
        self.height
    }

    #[must_use]
    pub const fn block_size(&self) -> i64 {
        self.block_size
    }

    #[must_use]
    pub const fn columns(&self) -> i64 {
        self.width / self.block_size
    }

    #[must_use]
    pub const fn rows(&self) -> i64 {
        self.height / self.block_size
    }

    #[must_use]
    pub const fn area(&self) -> i64 {
        self.columns() * self.rows()
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.columns()
            && coord.y < self.rows()
    }

    /// Top-left pixel of a cell, for renderers.
    #[must_use]
    pub const fn to_pixels(&self, coord: Coord) -> (i64, i64) {
        (coord.x * self.block_size, coord.y * self.block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.columns(), 32);
        assert_eq!(config.rows(), 24);
        assert_eq!(BoardConfig::new(640, 480, 20).ok(), Some(config));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(BoardConfig::new(0, 480, 20).is_err());
        assert!(BoardConfig::new(640, -20, 20).is_err());
        assert!(BoardConfig::new(640, 480, 0).is_err());
    }

    #[test]
    fn test_rejects_block_size_not_dividing_board() {
        assert!(BoardConfig::new(650, 480, 20).is_err());
        assert!(BoardConfig::new(640, 490, 20).is_err());
    }

    #[test]
    fn test_rejects_board_too_narrow_for_snake() {
        assert!(BoardConfig::cells(3, 10).is_err());
        assert!(BoardConfig::cells(4, 1).is_ok());
    }

    #[test]
    fn test_rejects_board_with_too_many_cells() {
        assert!(BoardConfig::new(1 << 32, 1 << 32, 1).is_err());
        assert!(BoardConfig::cells(i64::MAX, 2).is_err());

        let config = BoardConfig::new(1 << 31, 1 << 31, 1).unwrap();
        assert_eq!(config.area(), 1 << 62);
    }

    #[test]
    fn test_contains_and_pixels() {
        let config = BoardConfig::default();
        assert!(config.contains(Coord::new(0, 0)));
        assert!(config.contains(Coord::new(31, 23)));
        assert!(!config.contains(Coord::new(32, 0)));
        assert!(!config.contains(Coord::new(0, -1)));
        assert_eq!(config.to_pixels(Coord::new(2, 3)), (40, 60));
    }
}
