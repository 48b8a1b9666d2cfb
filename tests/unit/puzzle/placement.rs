//! Tests for placement attempts and candidate enumeration

#[cfg(test)]
mod tests {
    use wordsearch::puzzle::placement::Placement;
    use wordsearch::spatial::direction::Direction;

    // Tests covered cells follow the direction from the start
    // Verified by starting the offset at one
    #[test]
    fn test_cells_cover_word_span() {
        let placement = Placement::new(3, 1, Direction::DiagonalUp);
        let cells: Vec<[usize; 2]> = placement.cells(3).collect();
        assert_eq!(cells, vec![[3, 1], [2, 2], [1, 3]]);
    }

    // Tests bounds delegate to the direction
    // Verified by ignoring the direction in within_bounds
    #[test]
    fn test_within_bounds() {
        assert!(Placement::new(0, 0, Direction::Vertical).within_bounds(4, 4, 1));
        assert!(!Placement::new(0, 0, Direction::Horizontal).within_bounds(4, 4, 1));
    }

    // Tests enumeration yields exactly the in-bounds starts
    // Verified by enumerating one column too many
    #[test]
    fn test_enumerate_counts() {
        assert_eq!(Placement::enumerate(Direction::Horizontal, 3, 4, 5).count(), 4 * 3);
        assert_eq!(Placement::enumerate(Direction::Vertical, 3, 4, 5).count(), 2 * 5);
        assert_eq!(Placement::enumerate(Direction::DiagonalDown, 3, 4, 5).count(), 2 * 3);
        assert_eq!(Placement::enumerate(Direction::DiagonalUp, 3, 4, 5).count(), 2 * 3);
        assert_eq!(Placement::enumerate(Direction::Horizontal, 6, 4, 5).count(), 0);
    }

    // Tests every enumerated placement keeps its cells inside the grid
    // Verified by skipping the bounds filter
    #[test]
    fn test_enumerated_cells_in_grid() {
        for direction in Direction::ALL {
            for placement in Placement::enumerate(direction, 3, 4, 4) {
                assert_eq!(placement.direction, direction);
                let cells: Vec<[usize; 2]> = placement.cells(3).collect();
                assert_eq!(cells.len(), 3);
                assert!(cells.iter().all(|&[r, c]| r < 4 && c < 4));
            }
        }
    }
}
