//! Relates logical cube faces to positions in the row-major pixel grid.
//!
//! Faces are numbered from the bottom row of the grid upward and left to right
//! within a row. Each face covers a 3x3 block of pixels.

use clap::{builder::PossibleValue, ValueEnum};

use crate::{error::Error, Result};

pub const FACE_SIZE: usize = 3;
pub const PIXELS_PER_FACE: usize = FACE_SIZE * FACE_SIZE;
pub const CUBE_NET_ROWS: usize = 26;
pub const CUBE_NET_COLUMNS: usize = 19;
pub const CUBE_NET_ROW_WIDTH: usize = CUBE_NET_COLUMNS * FACE_SIZE;

/// Computes the nine grid positions of a face, top-left first, row by row.
///
/// `face_index` must be smaller than `total_rows * total_cols`.
/// [`FaceLayout::pixel_indices`] is the checked variant.
pub fn face_pixel_indices(
    face_index: usize,
    total_rows: usize,
    total_cols: usize,
    row_width: usize,
) -> [usize; PIXELS_PER_FACE] {
    let row_index = total_rows - 1 - face_index / total_cols;
    let column_index = face_index % total_cols;
    let start_index = row_index * FACE_SIZE * row_width + column_index * FACE_SIZE;
    let mut indices = [0; PIXELS_PER_FACE];
    for (position, index) in indices.iter_mut().enumerate() {
        *index = start_index + (position / FACE_SIZE) * row_width + position % FACE_SIZE;
    }
    indices
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceLayout {
    total_rows: usize,
    total_cols: usize,
    row_width: usize,
}

impl FaceLayout {
    /// The fixed 26 by 19 cube net, read from a grid 57 pixels wide.
    pub const CUBE_NET: FaceLayout =
        FaceLayout::new(CUBE_NET_ROWS, CUBE_NET_COLUMNS, CUBE_NET_ROW_WIDTH);

    pub const EMPTY: FaceLayout = FaceLayout::new(0, 0, 0);

    pub const fn new(total_rows: usize, total_cols: usize, row_width: usize) -> Self {
        FaceLayout {
            total_rows,
            total_cols,
            row_width,
        }
    }

    /// Layout covering as many whole faces as fit into an image of the given size.
    pub fn derived(width: usize, height: usize) -> Self {
        FaceLayout::new(height / FACE_SIZE, width / FACE_SIZE, width)
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn total_cols(&self) -> usize {
        self.total_cols
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn face_count(&self) -> usize {
        self.total_rows * self.total_cols
    }

    pub fn last_face(&self) -> usize {
        self.face_count().saturating_sub(1)
    }

    pub fn required_width(&self) -> usize {
        self.total_cols * FACE_SIZE
    }

    pub fn required_height(&self) -> usize {
        self.total_rows * FACE_SIZE
    }

    pub fn required_pixel_count(&self) -> usize {
        self.total_rows * FACE_SIZE * self.row_width
    }

    /// Whether every face of this layout indexes inside a grid of `pixel_count` pixels.
    pub fn fits(&self, pixel_count: usize) -> bool {
        if self.face_count() == 0 {
            return true;
        }
        // the bottom-right face of the first face row reaches the highest position
        let farthest = face_pixel_indices(
            self.total_cols - 1,
            self.total_rows,
            self.total_cols,
            self.row_width,
        );
        farthest[PIXELS_PER_FACE - 1] < pixel_count
    }

    pub fn pixel_indices(&self, face_index: usize) -> Result<[usize; PIXELS_PER_FACE]> {
        if face_index >= self.face_count() {
            return Err(Error::FaceIndexOutOfRange {
                face_index,
                face_count: self.face_count(),
            });
        }
        Ok(face_pixel_indices(
            face_index,
            self.total_rows,
            self.total_cols,
            self.row_width,
        ))
    }

    pub fn clamp_face(&self, face_index: usize) -> usize {
        face_index.min(self.last_face())
    }

    pub fn next_face(&self, face_index: usize) -> usize {
        self.clamp_face(face_index.saturating_add(1))
    }

    pub fn previous_face(&self, face_index: usize) -> usize {
        self.clamp_face(face_index.saturating_sub(1))
    }
}

/// How the face layout is chosen for a decoded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Always use [`FaceLayout::CUBE_NET`] and reject images it does not cover.
    #[default]
    CubeNet,
    /// Derive rows, columns and row width from the decoded image size.
    Derived,
}

impl ValueEnum for LayoutPolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::CubeNet, Self::Derived]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::CubeNet => Some(PossibleValue::new("cube-net")),
            Self::Derived => Some(PossibleValue::new("derived")),
        }
    }
}

impl LayoutPolicy {
    /// Layout in effect before any image has been loaded.
    pub fn initial_layout(&self) -> FaceLayout {
        match self {
            LayoutPolicy::CubeNet => FaceLayout::CUBE_NET,
            LayoutPolicy::Derived => FaceLayout::EMPTY,
        }
    }

    pub fn layout_for(&self, width: usize, height: usize) -> Result<FaceLayout> {
        match self {
            LayoutPolicy::CubeNet => Self::cube_net_layout_for(width, height),
            LayoutPolicy::Derived => Ok(FaceLayout::derived(width, height)),
        }
    }

    fn cube_net_layout_for(width: usize, height: usize) -> Result<FaceLayout> {
        let layout = FaceLayout::CUBE_NET;
        let required_width = layout.required_width();
        let required_height = layout.required_height();
        if width < required_width || height < required_height {
            return Err(Error::ImageTooSmall {
                width,
                height,
                required_width,
                required_height,
            });
        }
        if width != required_width || height != required_height {
            log::warn!(
                "Image of {}x{} pixels is larger than the {}x{} cube net, faces are read {} pixels per row",
                width,
                height,
                required_width,
                required_height,
                layout.row_width()
            );
        }
        Ok(layout)
    }
}
