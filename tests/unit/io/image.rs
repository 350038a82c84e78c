//! Tests for palette generation and PNG rendering

#[cfg(test)]
mod tests {
    use hopgrid::io::configuration::CELL_PIXELS;
    use hopgrid::io::image::{EMPTY_COLOR, color_ramp, export_board_as_png, render_board};
    use hopgrid::solver::Board;

    // Tests the ramp spans deep blue to warm yellow, fully opaque
    // Verified by reversing the ramp direction
    #[test]
    fn test_color_ramp_endpoints() {
        let ramp = color_ramp(100);

        assert_eq!(ramp.len(), 100);
        assert_eq!(ramp.first().copied(), Some([28, 60, 138, 255]));
        assert_eq!(ramp.last().copied(), Some([253, 231, 37, 255]));
        assert!(ramp.iter().all(|color| color[3] == 255));
    }

    // Tests a single-entry ramp lands on the terminal color
    // Verified by dividing by zero progress steps
    #[test]
    fn test_color_ramp_single_entry() {
        assert_eq!(color_ramp(1), vec![[253, 231, 37, 255]]);
        assert!(color_ramp(0).is_empty());
    }

    // Tests cell rasterization scale and per-cell coloring
    // Verified by swapping row and column when blitting
    #[test]
    fn test_render_board_pixels() {
        let mut board = Board::new(2).unwrap();
        board.place([0, 0], 1);
        board.place([1, 1], 4);
        let ramp = color_ramp(4);

        let img = render_board(&board, &ramp);
        assert_eq!(img.dimensions(), (2 * CELL_PIXELS, 2 * CELL_PIXELS));

        // (0, 0) holds number 1, the first ramp entry
        assert_eq!(img.get_pixel(0, 0).0, [28, 60, 138, 255]);
        // (0, 1) is open
        assert_eq!(img.get_pixel(CELL_PIXELS, 0).0, EMPTY_COLOR);
        // (1, 1) holds number 4, the last ramp entry
        assert_eq!(
            img.get_pixel(2 * CELL_PIXELS - 1, 2 * CELL_PIXELS - 1).0,
            [253, 231, 37, 255]
        );
    }

    // Tests numbers beyond the palette fall back to the empty color
    // Verified by panicking on missing palette entries
    #[test]
    fn test_render_board_palette_overflow() {
        let mut board = Board::new(2).unwrap();
        board.place([0, 0], 9);

        let img = render_board(&board, &color_ramp(4));
        assert_eq!(img.get_pixel(0, 0).0, EMPTY_COLOR);
    }

    // Tests PNG export writes a file and creates parent directories
    // Verified by skipping directory creation
    #[test]
    fn test_export_writes_png() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested/board.png");
        let path_str = path.to_str().unwrap();

        let mut board = Board::new(3).unwrap();
        board.place([0, 0], 1);
        board.place([2, 2], 2);

        export_board_as_png(&board, &color_ramp(9), path_str).unwrap();
        assert!(path.exists());
    }

    // Tests export failure surfaces as an error
    // Verified by ignoring the save result
    #[test]
    fn test_export_to_invalid_path_fails() {
        let board = Board::new(2).unwrap();
        let result = export_board_as_png(&board, &color_ramp(4), "/dev/null/board.png");
        assert!(result.is_err());
    }
}
