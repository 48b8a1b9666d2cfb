//! Tests for PNG page rendering and export

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use tempfile::TempDir;
    use wordsearch::PuzzleError;
    use wordsearch::io::image::{
        GLYPH_HEIGHT, GLYPH_WIDTH, PageLayout, export_puzzle_as_png, glyph, render_page,
    };
    use wordsearch::puzzle::word::Word;
    use wordsearch::puzzle::word_search::WordSearch;

    fn sample() -> WordSearch {
        let letters = array![['G', 'O', 'X'], ['A', 'B', 'C']];
        WordSearch::new(letters, vec![Word::new("go").unwrap()])
    }

    // Tests glyphs exist for every capital letter only
    // Verified by offsetting the font index
    #[test]
    fn test_glyph_lookup() {
        for letter in 'A'..='Z' {
            let rows = glyph(letter).unwrap();
            assert!(rows.iter().any(|&bits| bits != 0), "{letter} is blank");
            assert!(rows.iter().all(|&bits| bits < 1 << GLYPH_WIDTH));
        }
        assert_eq!(glyph('a'), None);
        assert_eq!(glyph('.'), None);
        assert_ne!(glyph('O'), glyph('Q'));
    }

    // Tests the default layout matches an A4 page at 4 px/mm
    // Verified by ignoring the page size
    #[test]
    fn test_default_layout_sizes() {
        let layout = PageLayout::default();
        assert_eq!(layout.cell_pixels(), 40);
        assert_eq!(layout.glyph_scale(), 2);
        assert_eq!(layout.page_pixels(&sample()).unwrap(), (840, 1188));
    }

    // Tests large grids grow the page instead of being clipped
    // Verified by always using the A4 size
    #[test]
    fn test_page_grows_for_large_grids() {
        let puzzle = WordSearch::new(Array2::from_elem((40, 30), 'A'), Vec::new());
        let (width, height) = PageLayout::default().page_pixels(&puzzle).unwrap();
        assert_eq!(width, 30 * 40);
        assert_eq!(height, 40 * 40);
    }

    // Tests a page wider than the pixel range is rejected instead of wrapping
    // Verified by multiplying the column count unchecked
    #[test]
    fn test_oversized_page_rejected() {
        let layout = PageLayout {
            cell_size_mm: 1.0e12,
            ..PageLayout::default()
        };
        assert_eq!(layout.cell_pixels(), u32::MAX);

        let error = layout.page_pixels(&sample()).unwrap_err();
        assert!(matches!(
            error,
            PuzzleError::InvalidInput {
                parameter: "width",
                ..
            }
        ));
        assert!(render_page(&sample(), &layout).is_err());

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("huge.png");
        assert!(export_puzzle_as_png(&sample(), &layout, &output).is_err());
        assert!(!output.exists());
    }

    // Tests letters are drawn centred in their cells
    // Verified by dropping the cell inset
    #[test]
    fn test_render_page_draws_letters() {
        let layout = PageLayout::default();
        let page = render_page(&sample(), &layout).unwrap();
        let scale = layout.glyph_scale();
        let inset_x = (layout.cell_pixels() - GLYPH_WIDTH * scale) / 2;
        let inset_y = (layout.cell_pixels() - GLYPH_HEIGHT * scale) / 2;

        // Top row of G is 01110, so its second dot is inked
        let ink = page.get_pixel(inset_x + scale, inset_y);
        assert_eq!(ink.0, [0, 0, 0, 255]);

        // ...and its first dot is not
        let paper = page.get_pixel(inset_x, inset_y);
        assert_eq!(paper.0, [255, 255, 255, 255]);
        assert_eq!(page.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    // Tests the legend is drawn below the grid
    // Verified by skipping legend rendering
    #[test]
    fn test_render_page_draws_legend() {
        let layout = PageLayout::default();
        let puzzle = sample();
        let page = render_page(&puzzle, &layout).unwrap();
        let legend_top = (puzzle.rows() as u32 + 1) * layout.cell_pixels();

        let inked = (legend_top..legend_top + layout.cell_pixels())
            .flat_map(|y| (0..page.width()).map(move |x| (x, y)))
            .any(|(x, y)| page.get_pixel(x, y).0 == [0, 0, 0, 255]);
        assert!(inked, "legend should contain ink");
    }

    // Tests PNG export writes a decodable page of the expected size
    // Verified by disabling file save operation
    #[test]
    fn test_export_puzzle_as_png_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("pages").join("puzzle.png");

        export_puzzle_as_png(&sample(), &PageLayout::default(), &output).unwrap();

        let decoded = image::open(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (840, 1188));
    }

    // Tests export failures surface as errors
    // Verified by ignoring the save result
    #[test]
    fn test_export_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = export_puzzle_as_png(
            &sample(),
            &PageLayout::default(),
            &blocker.join("puzzle.png"),
        );
        assert!(result.is_err());
    }
}
