//! Tests for PNG worksheet export

#[cfg(test)]
mod tests {
    use factsheet::io::image::{export_png, render_png};
    use factsheet::presentation::layout::WorksheetGrid;
    use factsheet::presentation::orientation::DisplayPair;

    fn sample_grid() -> WorksheetGrid {
        let cells = vec![
            DisplayPair {
                top: 14,
                bottom: 7,
                symbol: '÷',
            },
            DisplayPair {
                top: 9,
                bottom: 3,
                symbol: '-',
            },
        ];
        let Ok(grid) = WorksheetGrid::from_cells(1, 2, cells) else {
            unreachable!("two cells fit a 1x2 grid");
        };
        grid
    }

    // Tests rendered image is paper-white with some ink
    // Verified by skipping glyph drawing
    #[test]
    fn test_render_png_has_ink() {
        let img = render_png(&sample_grid());

        assert!(img.width() > 0 && img.height() > 0);
        assert!(img.width() > img.height(), "two cells side by side");
        assert!(img.pixels().any(|p| p.0[0] == 0), "expected ink");
        assert!(img.pixels().any(|p| p.0[0] == 255), "expected paper");
    }

    // Tests wider numbers produce wider images
    // Verified by ignoring number width in cell size
    #[test]
    fn test_render_png_scales_with_width() {
        let narrow = render_png(&sample_grid());
        let cells = vec![
            DisplayPair {
                top: 12_345,
                bottom: 7,
                symbol: '+',
            },
            DisplayPair {
                top: 1,
                bottom: 2,
                symbol: '+',
            },
        ];
        let Ok(wide_grid) = WorksheetGrid::from_cells(1, 2, cells) else {
            unreachable!("two cells fit a 1x2 grid");
        };

        assert!(render_png(&wide_grid).width() > narrow.width());
    }

    // Tests PNG file creation in a fresh directory
    // Verified by disabling file save operation
    #[test]
    fn test_export_png_creates_file() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("out").join("sheet.png");

        let result = export_png(&sample_grid(), &path);

        assert!(result.is_ok(), "PNG export should succeed: {result:?}");
        assert!(path.exists(), "PNG file should be created");
        let decoded = image::open(&path);
        assert!(decoded.is_ok(), "exported file should decode as an image");
    }
}
