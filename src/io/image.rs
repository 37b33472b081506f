//! PNG worksheet export using a built-in 3×5 dot font

use crate::io::configuration::{CELL_PADDING_GLYPHS, GLYPH_SCALE};
use crate::io::error::{Result, WorksheetError, file_system_error};
use crate::io::text::cell_lines;
use crate::presentation::layout::WorksheetGrid;
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

/// Dots per glyph horizontally, including one column of spacing
const GLYPH_ADVANCE: u32 = 4;
/// Dots per text line vertically, including one row of spacing
const LINE_ADVANCE: u32 = 6;
/// Dots reserved for the answer rule under each problem
const RULE_ADVANCE: u32 = 3;

const PAPER: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([0]);

/// Dot rows of a glyph, three bits each, most significant bit leftmost
fn glyph(ch: char) -> [u8; 5] {
    match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '×' => [0b000, 0b101, 0b010, 0b101, 0b000],
        '÷' => [0b010, 0b000, 0b111, 0b000, 0b010],
        _ => [0; 5],
    }
}

/// Paint one font dot as a `GLYPH_SCALE` square, clipping at the image edge
fn fill_dot(img: &mut GrayImage, dot_x: u32, dot_y: u32) {
    for dy in 0..GLYPH_SCALE {
        for dx in 0..GLYPH_SCALE {
            if let Some(pixel) =
                img.get_pixel_mut_checked(dot_x * GLYPH_SCALE + dx, dot_y * GLYPH_SCALE + dy)
            {
                *pixel = INK;
            }
        }
    }
}

fn draw_text(img: &mut GrayImage, text: &str, dot_x: u32, dot_y: u32) {
    for (index, ch) in text.chars().enumerate() {
        let origin_x = dot_x + index as u32 * GLYPH_ADVANCE;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..3u32 {
                if bits & (0b100 >> col) != 0 {
                    fill_dot(img, origin_x + col, dot_y + row as u32);
                }
            }
        }
    }
}

/// Rasterize the grid on white paper with black ink
pub fn render_png(grid: &WorksheetGrid) -> GrayImage {
    let number_width = grid.number_width();
    let chars = (number_width + 2) as u32;
    let pad = CELL_PADDING_GLYPHS;

    let cell_width = (chars + 2 * pad) * GLYPH_ADVANCE;
    let cell_height = 2 * pad * LINE_ADVANCE + 2 * LINE_ADVANCE + RULE_ADVANCE;

    let width = cell_width * grid.columns() as u32 * GLYPH_SCALE;
    let height = cell_height * grid.rows() as u32 * GLYPH_SCALE;
    let mut img = GrayImage::from_pixel(width.max(1), height.max(1), PAPER);

    for row in 0..grid.rows() {
        for (column, cell) in grid.row(row).enumerate() {
            let x = column as u32 * cell_width + pad * GLYPH_ADVANCE;
            let y = row as u32 * cell_height + pad * LINE_ADVANCE;
            let [top, bottom, _] = cell_lines(cell, number_width);

            draw_text(&mut img, &top, x, y);
            draw_text(&mut img, &bottom, x, y + LINE_ADVANCE);

            let rule_y = y + 2 * LINE_ADVANCE;
            for dot in 0..chars * GLYPH_ADVANCE - 1 {
                fill_dot(&mut img, x + dot, rule_y);
            }
        }
    }

    img
}

/// Render the grid and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(grid: &WorksheetGrid, output_path: &Path) -> Result<()> {
    let img = render_png(grid);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| WorksheetError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
