use std::io::Write;

use crate::{controller::Snapshot, error::Error, face::FACE_SIZE, Result};

const NO_FACE_MESSAGE: &str = "(no face inside the pixel grid)";
const NO_GRID_MESSAGE: &str = "(no image loaded)";

pub fn progress_label(snapshot: &Snapshot) -> String {
    if snapshot.face_count == 0 {
        return String::from("Face 0 / 0");
    }
    format!(
        "Face {} / {}",
        snapshot.face_index + 1,
        snapshot.face_count
    )
}

/// The current face as three lines of three palette symbols.
pub fn render_face(snapshot: &Snapshot) -> String {
    let Some(labels) = snapshot.active_labels() else {
        return String::from(NO_FACE_MESSAGE);
    };
    labels
        .chunks(FACE_SIZE)
        .map(|row| {
            row.iter()
                .map(|label| label.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The whole grid, wrapped at the layout's row width so every face shows as a
/// 3x3 block. Cells of the active face are uppercase, all others lowercase.
pub fn render_pattern(snapshot: &Snapshot) -> String {
    let Some(grid) = &snapshot.pixel_grid else {
        return String::from(NO_GRID_MESSAGE);
    };
    let line_width = match snapshot.row_width {
        0 => grid.width().max(1),
        row_width => row_width,
    };
    let mut pattern = String::with_capacity(grid.len() + grid.len() / line_width);
    for (index, label) in grid.labels().iter().enumerate() {
        if index > 0 && index % line_width == 0 {
            pattern.push('\n');
        }
        let symbol = label.symbol();
        if snapshot.is_active(index) {
            pattern.push(symbol);
        } else {
            pattern.push(symbol.to_ascii_lowercase());
        }
    }
    pattern
}

pub fn write_report<W: Write>(
    writer: &mut W,
    snapshot: &Snapshot,
    with_pattern: bool,
) -> Result<()> {
    writeln!(writer, "{}", progress_label(snapshot)).map_err(Error::FailedToWriteOutput)?;
    writeln!(writer, "{}", render_face(snapshot)).map_err(Error::FailedToWriteOutput)?;
    if with_pattern {
        writeln!(writer).map_err(Error::FailedToWriteOutput)?;
        writeln!(writer, "{}", render_pattern(snapshot)).map_err(Error::FailedToWriteOutput)?;
    }
    writer.flush().map_err(Error::FailedToWriteOutput)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::{progress_label, render_face, render_pattern, write_report};
    use crate::{
        color::RGBAColorFormat,
        controller::{GridController, Snapshot},
        face::{FaceLayout, LayoutPolicy},
        image::grid::PixelGrid,
        image::Image,
    };

    /// 6x3 grid: left half red, right half green, two faces.
    fn two_face_snapshot(face_index: usize) -> Snapshot {
        let dots = (0..18)
            .map(|index| {
                if index % 6 < 3 {
                    RGBAColorFormat::opaque(255, 0, 0)
                } else {
                    RGBAColorFormat::opaque(0, 255, 0)
                }
            })
            .collect();
        let image = Image::new(6, 3, dots).unwrap();
        let layout = FaceLayout::derived(6, 3);
        Snapshot {
            pixel_grid: Some(Arc::new(PixelGrid::from_image(&image))),
            face_index,
            face_count: layout.face_count(),
            row_width: layout.row_width(),
            active_indices: layout.pixel_indices(face_index).ok(),
        }
    }

    #[test]
    fn label_is_one_based() {
        assert_eq!(progress_label(&two_face_snapshot(0)), "Face 1 / 2");
        assert_eq!(progress_label(&two_face_snapshot(1)), "Face 2 / 2");
    }

    #[test]
    fn label_without_faces() {
        let snapshot = Snapshot {
            pixel_grid: None,
            face_index: 0,
            face_count: 0,
            row_width: 0,
            active_indices: None,
        };
        assert_eq!(progress_label(&snapshot), "Face 0 / 0");
        assert_eq!(render_pattern(&snapshot), "(no image loaded)");
        assert_eq!(render_face(&snapshot), "(no face inside the pixel grid)");
    }

    #[test]
    fn face_as_symbols() {
        assert_eq!(render_face(&two_face_snapshot(1)), "G G G\nG G G\nG G G");
    }

    #[test]
    fn pattern_highlights_active_face() {
        assert_eq!(
            render_pattern(&two_face_snapshot(0)),
            "RRRggg\nRRRggg\nRRRggg"
        );
        assert_eq!(
            render_pattern(&two_face_snapshot(1)),
            "rrrGGG\nrrrGGG\nrrrGGG"
        );
    }

    #[test]
    fn report_with_pattern() {
        let mut output = Vec::new();
        write_report(&mut output, &two_face_snapshot(0), true).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Face 1 / 2\nR R R\nR R R\nR R R\n\nRRRggg\nRRRggg\nRRRggg\n"
        );
    }

    #[test]
    fn pattern_wraps_oversized_cube_net_at_row_width() {
        let dots = vec![RGBAColorFormat::opaque(255, 255, 255); 60 * 78];
        let image = Image::new(60, 78, dots).unwrap();
        let mut controller = GridController::new(LayoutPolicy::CubeNet);
        let snapshot = controller.load_decoded(&image).unwrap();
        assert_eq!(snapshot.row_width, 57);

        let pattern = render_pattern(&snapshot);
        let lines: Vec<&str> = pattern.lines().collect();
        assert_eq!(lines.len(), (60 * 78usize).div_ceil(57));
        assert!(lines[..lines.len() - 1].iter().all(|line| line.len() == 57));

        let mut active_cells = Vec::new();
        for (row_index, line) in lines.iter().enumerate() {
            for (column_index, symbol) in line.chars().enumerate() {
                if symbol.is_ascii_uppercase() {
                    active_cells.push((row_index, column_index));
                }
            }
        }
        let expected: Vec<(usize, usize)> = (75..78)
            .flat_map(|row_index| (0..3).map(move |column_index| (row_index, column_index)))
            .collect();
        assert_eq!(active_cells, expected);
    }

    #[test]
    fn pattern_block_follows_navigation_on_oversized_cube_net() {
        let dots = vec![RGBAColorFormat::opaque(255, 0, 0); 60 * 78];
        let image = Image::new(60, 78, dots).unwrap();
        let mut controller = GridController::new(LayoutPolicy::CubeNet);
        controller.load_decoded(&image).unwrap();
        let pattern = render_pattern(&controller.set_face(493));
        let lines: Vec<&str> = pattern.lines().collect();
        for line in &lines[..3] {
            assert_eq!(&line[51..], "rrrRRR");
        }
        assert!(lines[3..].iter().all(|line| !line.contains('R')));
    }
}
