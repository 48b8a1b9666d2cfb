//! Page layout constants and runtime configuration defaults

// Page geometry, in millimetres unless noted
/// Width of the printed page (A4)
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// Height of the printed page (A4)
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Edge length of one grid cell
pub const CELL_SIZE_MM: f64 = 10.0;
/// Letter height in typographic points
pub const FONT_SIZE_PT: f64 = 8.0;
/// Millimetres per typographic point
pub const MM_PER_POINT: f64 = 25.4 / 72.0;
/// Raster resolution used for PNG pages
pub const PIXELS_PER_MM: u32 = 4;

/// Words per line in the legend under the grid
pub const WORDS_PER_ROW: usize = 10;

/// Grid dimension for a page: whole cells that fit across it
pub const fn grid_dimension(page_size_mm: f64, cell_size_mm: f64) -> usize {
    if page_size_mm <= 0.0 || cell_size_mm <= 0.0 {
        return 0;
    }
    (page_size_mm / cell_size_mm) as usize
}

/// Default grid width and height derived from the page and cell size
pub const DEFAULT_GRID_DIMENSION: usize = grid_dimension(PAGE_WIDTH_MM, CELL_SIZE_MM);

// Placement search
/// Random start cells tried per word before scanning the whole grid
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Shown for cells that hold no letter yet
pub const EMPTY_CELL_MARKER: char = '.';

/// Words used when none are supplied
pub const DEFAULT_WORDS: [&str; 9] = [
    "HELLO",
    "WORLD",
    "GO",
    "PROGRAMMING",
    "WORDSEARCH",
    "ACTIVITY",
    "TAVITO",
    "RUST",
    "JAVASCRIPT",
];

// Output settings
/// Extension selecting the PNG renderer
pub const PNG_EXTENSION: &str = "png";
/// Lines starting with this are ignored in word-list files
pub const WORD_LIST_COMMENT: char = '#';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
