//! PNG page rendering with a built-in 5x7 bitmap font
//!
//! Cells are laid out from the top-left corner of the page at `(col * cell,
//! row * cell)`, one letter centred per cell, with the word legend below the
//! grid. The page keeps its A4 proportions unless the puzzle needs more room.

use image::{ImageBuffer, ImageFormat, Rgba};
use std::path::Path;

use crate::io::configuration::{
    CELL_SIZE_MM, FONT_SIZE_PT, MM_PER_POINT, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PIXELS_PER_MM,
    WORDS_PER_ROW,
};
use crate::io::error::{PuzzleError, Result, WithContext, invalid_input};
use crate::puzzle::word_search::WordSearch;

/// Glyph width in font pixels
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rows of each capital letter, most significant of the low five bits leftmost
const FONT: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

/// Bitmap rows for an uppercase ASCII letter
pub fn glyph(letter: char) -> Option<[u8; 7]> {
    if !letter.is_ascii_uppercase() {
        return None;
    }
    FONT.get((letter as u8 - b'A') as usize).copied()
}

/// Physical page and typography settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Page width in millimetres
    pub page_width_mm: f64,
    /// Page height in millimetres
    pub page_height_mm: f64,
    /// Cell edge length in millimetres
    pub cell_size_mm: f64,
    /// Letter height in points
    pub font_size_pt: f64,
    /// Raster resolution
    pub pixels_per_mm: u32,
    /// Legend words per line
    pub words_per_row: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            cell_size_mm: CELL_SIZE_MM,
            font_size_pt: FONT_SIZE_PT,
            pixels_per_mm: PIXELS_PER_MM,
            words_per_row: WORDS_PER_ROW,
        }
    }
}

impl PageLayout {
    fn mm_to_px(&self, mm: f64) -> u32 {
        (mm * f64::from(self.pixels_per_mm)).round().max(0.0) as u32
    }

    /// Cell edge length in pixels, never below one glyph
    pub fn cell_pixels(&self) -> u32 {
        self.mm_to_px(self.cell_size_mm)
            .max((GLYPH_HEIGHT + 1).saturating_mul(self.glyph_scale()))
    }

    /// Pixel size of one font dot
    pub fn glyph_scale(&self) -> u32 {
        let letter_px = self.font_size_pt * MM_PER_POINT * f64::from(self.pixels_per_mm);
        ((letter_px / f64::from(GLYPH_HEIGHT)).round() as u32).max(1)
    }

    fn advance(&self) -> u32 {
        (GLYPH_WIDTH + 1).saturating_mul(self.glyph_scale())
    }

    fn line_height(&self) -> u32 {
        (GLYPH_HEIGHT + 3).saturating_mul(self.glyph_scale())
    }

    fn legend_columns(&self, word_count: usize) -> usize {
        if self.words_per_row == 0 {
            word_count
        } else {
            self.words_per_row.min(word_count)
        }
    }

    fn legend_column_width(&self, puzzle: &WordSearch) -> u32 {
        let longest = puzzle.words().iter().map(|w| w.len()).max().unwrap_or(0);
        u32::try_from(longest)
            .unwrap_or(u32::MAX)
            .saturating_add(2)
            .saturating_mul(self.advance())
    }

    /// Page size in pixels (width, height) for `puzzle`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the grid or legend does not fit in a `u32`
    /// pixel extent
    pub fn page_pixels(&self, puzzle: &WordSearch) -> Result<(u32, u32)> {
        let cell = self.cell_pixels();
        let grid_width = scaled_extent("width", puzzle.cols(), cell)?;
        let grid_height = scaled_extent("height", puzzle.rows(), cell)?;

        let word_count = puzzle.words().len();
        let columns = self.legend_columns(word_count);
        let legend_width = scaled_extent("words", columns, self.legend_column_width(puzzle))?;
        let legend_lines = if columns == 0 {
            0
        } else {
            word_count.div_ceil(columns)
        };
        let legend_height = if legend_lines == 0 {
            0
        } else {
            scaled_extent("words", legend_lines, self.line_height())?
                .checked_add(cell)
                .ok_or_else(|| too_large("words", word_count))?
        };
        let content_height = grid_height
            .checked_add(legend_height)
            .ok_or_else(|| too_large("height", puzzle.rows()))?;

        let width = self
            .mm_to_px(self.page_width_mm)
            .max(grid_width)
            .max(legend_width);
        let height = self.mm_to_px(self.page_height_mm).max(content_height);
        Ok((width.max(1), height.max(1)))
    }
}

fn too_large(parameter: &'static str, count: usize) -> PuzzleError {
    invalid_input(parameter, &count, &"page would exceed the largest image size")
}

/// `count` items of `size` pixels each, if that fits in a `u32`
fn scaled_extent(parameter: &'static str, count: usize, size: u32) -> Result<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|count_px| count_px.checked_mul(size))
        .ok_or_else(|| too_large(parameter, count))
}

/// RGBA page buffer
pub type Page = ImageBuffer<Rgba<u8>, Vec<u8>>;

fn draw_glyph(page: &mut Page, x: u32, y: u32, scale: u32, rows: [u8; 7]) {
    for (dy, bits) in (0u32..).zip(rows) {
        for dx in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - dx)) == 0 {
                continue;
            }
            for py in 0..scale {
                for px in 0..scale {
                    if let Some(pixel) = page.get_pixel_mut_checked(
                        x.saturating_add(dx.saturating_mul(scale)).saturating_add(px),
                        y.saturating_add(dy.saturating_mul(scale)).saturating_add(py),
                    ) {
                        *pixel = INK;
                    }
                }
            }
        }
    }
}

fn draw_text(page: &mut Page, x: u32, y: u32, layout: &PageLayout, text: &str) {
    let scale = layout.glyph_scale();
    for (index, letter) in (0u32..).zip(text.chars()) {
        if let Some(rows) = glyph(letter) {
            let offset = index.saturating_mul(layout.advance());
            draw_glyph(page, x.saturating_add(offset), y, scale, rows);
        }
    }
}

/// Draw the puzzle onto a fresh page
///
/// # Errors
///
/// Returns `InvalidInput` if the puzzle is too large for a single image
pub fn render_page(puzzle: &WordSearch, layout: &PageLayout) -> Result<Page> {
    let (width, height) = layout.page_pixels(puzzle)?;
    let mut page = ImageBuffer::from_pixel(width, height, PAPER);

    let cell = layout.cell_pixels();
    let scale = layout.glyph_scale();
    let inset_x = cell.saturating_sub(GLYPH_WIDTH.saturating_mul(scale)) / 2;
    let inset_y = cell.saturating_sub(GLYPH_HEIGHT.saturating_mul(scale)) / 2;

    for ((row, col), &letter) in puzzle.letters().indexed_iter() {
        if let Some(rows) = glyph(letter) {
            draw_glyph(
                &mut page,
                (col as u32 * cell).saturating_add(inset_x),
                (row as u32 * cell).saturating_add(inset_y),
                scale,
                rows,
            );
        }
    }

    let columns = layout.legend_columns(puzzle.words().len());
    if columns > 0 {
        let legend_top = puzzle.rows() as u32 * cell + cell;
        let column_width = layout.legend_column_width(puzzle);
        for (index, word) in puzzle.words().iter().enumerate() {
            let x = ((index % columns) as u32 * column_width).saturating_add(inset_x);
            let y = legend_top + (index / columns) as u32 * layout.line_height();
            draw_text(&mut page, x, y, layout, word.as_str());
        }
    }

    Ok(page)
}

/// Render `puzzle` and save it as a PNG page
///
/// # Errors
///
/// Returns:
/// - `FileSystem` if the parent directory cannot be created
/// - `InvalidInput` if the page would be too large
/// - `ImageExport` if the image cannot be encoded or written
pub fn export_puzzle_as_png(
    puzzle: &WordSearch,
    layout: &PageLayout,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_file(parent, "create directory")?;
    }

    render_page(puzzle, layout)?
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
