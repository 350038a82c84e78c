//! PNG export of boards with placement-order coloring

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::CELL_PIXELS;
use crate::io::error::{Result, SolverError};
use crate::solver::board::Board;

/// Fill color for unoccupied cells
pub const EMPTY_COLOR: [u8; 4] = [24, 24, 28, 255];

/// Build the palette mapping placement order to color
///
/// Index `number - 1` holds the color for `number`. The ramp runs from
/// deep blue for early placements to warm yellow for late ones, so the
/// direction of the path reads at a glance.
pub fn color_ramp(max_number: u32) -> Vec<[u8; 4]> {
    (1..=max_number)
        .map(|number| ramp_color(number, max_number))
        .collect()
}

fn ramp_color(number: u32, max_number: u32) -> [u8; 4] {
    let progress = if max_number <= 1 {
        1.0
    } else {
        f64::from(number - 1) / f64::from(max_number - 1)
    };
    let lerp = |from: f64, to: f64| (to - from).mul_add(progress, from).round() as u8;
    [lerp(28.0, 253.0), lerp(60.0, 231.0), lerp(138.0, 37.0), 255]
}

/// Rasterize a board, one `CELL_PIXELS` square per cell
///
/// Occupied cells take their placement-order color from the palette;
/// numbers past the end of the palette fall back to the empty color.
pub fn render_board(board: &Board, color_mapping: &[[u8; 4]]) -> RgbaImage {
    let side = board.size() as u32 * CELL_PIXELS;
    let mut img = ImageBuffer::new(side, side);

    for ((row, col), &value) in board.cells().indexed_iter() {
        let rgba = if value == 0 {
            EMPTY_COLOR
        } else {
            color_mapping
                .get((value - 1) as usize)
                .copied()
                .unwrap_or(EMPTY_COLOR)
        };
        let color = Rgba(rgba);

        let base_x = col as u32 * CELL_PIXELS;
        let base_y = row as u32 * CELL_PIXELS;
        for offset_y in 0..CELL_PIXELS {
            for offset_x in 0..CELL_PIXELS {
                img.put_pixel(base_x + offset_x, base_y + offset_y, color);
            }
        }
    }

    img
}

/// Export a board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    board: &Board,
    color_mapping: &[[u8; 4]],
    output_path: &str,
) -> Result<()> {
    let img = render_board(board, color_mapping);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
