//! Owns the loaded pixel grid and the face currently being browsed.
//!
//! Every operation returns an immutable [`Snapshot`]. A load builds the new grid
//! completely before swapping it in, so a failed load leaves the previous
//! state untouched.

use std::{path::Path, sync::Arc};

use threadpool::ThreadPool;

use crate::{
    face::{FaceLayout, LayoutPolicy, PIXELS_PER_FACE},
    image::{grid::PixelGrid, reader::DecodedImageReader, Image, ImageReader},
    logger,
    palette::PaletteLabel,
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub pixel_grid: Option<Arc<PixelGrid>>,
    pub face_index: usize,
    pub face_count: usize,
    /// Cells per grid row as the face layout reads them, 0 when no layout applies.
    pub row_width: usize,
    /// Grid positions of the current face, absent when no face lies inside the grid.
    pub active_indices: Option<[usize; PIXELS_PER_FACE]>,
}

impl Snapshot {
    pub fn active_labels(&self) -> Option<[PaletteLabel; PIXELS_PER_FACE]> {
        let grid = self.pixel_grid.as_ref()?;
        grid.face_labels(self.active_indices.as_ref()?)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_indices
            .is_some_and(|indices| indices.contains(&index))
    }
}

pub struct GridController {
    policy: LayoutPolicy,
    layout: FaceLayout,
    pixel_grid: Option<Arc<PixelGrid>>,
    face_index: usize,
    threadpool: Option<ThreadPool>,
}

impl GridController {
    pub fn new(policy: LayoutPolicy) -> Self {
        GridController {
            policy,
            layout: policy.initial_layout(),
            pixel_grid: None,
            face_index: 0,
            threadpool: None,
        }
    }

    /// Quantizes on a thread pool when more than one thread is requested.
    pub fn with_threads(policy: LayoutPolicy, number_of_threads: usize) -> Self {
        let mut controller = Self::new(policy);
        if number_of_threads > 1 {
            controller.threadpool = Some(ThreadPool::new(number_of_threads));
        }
        controller
    }

    pub fn load_image(&mut self, bytes: &[u8]) -> Result<Snapshot> {
        let mut reader = DecodedImageReader::from_bytes(bytes);
        self.load_from_reader(&mut reader)
    }

    pub fn load_image_file(&mut self, file_path: &Path) -> Result<Snapshot> {
        let mut reader = DecodedImageReader::open(file_path)?;
        self.load_from_reader(&mut reader)
    }

    pub fn load_from_reader<R: ImageReader>(&mut self, reader: &mut R) -> Result<Snapshot> {
        let image = reader.read_image()?;
        self.load_decoded(&image)
    }

    pub fn load_decoded(&mut self, image: &Image) -> Result<Snapshot> {
        let layout = self
            .policy
            .layout_for(image.width(), image.height())
            .inspect_err(|e| log::warn!("Rejected image: {}", e))?;
        let pixel_grid = match &self.threadpool {
            Some(threadpool) => PixelGrid::from_image_with_pool(image, threadpool)?,
            None => PixelGrid::from_image(image),
        };
        log::info!(
            "Loaded {}x{} pixel grid with {} faces",
            pixel_grid.width(),
            pixel_grid.height(),
            layout.face_count()
        );
        self.layout = layout;
        self.pixel_grid = Some(Arc::new(pixel_grid));
        self.face_index = 0;
        Ok(self.snapshot())
    }

    pub fn set_face(&mut self, face_index: usize) -> Snapshot {
        self.face_index = self.layout.clamp_face(face_index);
        self.navigated()
    }

    pub fn next_face(&mut self) -> Snapshot {
        self.face_index = self.layout.next_face(self.face_index);
        self.navigated()
    }

    pub fn previous_face(&mut self) -> Snapshot {
        self.face_index = self.layout.previous_face(self.face_index);
        self.navigated()
    }

    fn navigated(&self) -> Snapshot {
        let snapshot = self.snapshot();
        if let Some(indices) = &snapshot.active_indices {
            logger::log_face(snapshot.face_index, snapshot.face_count, indices);
        }
        snapshot
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixel_grid: self.pixel_grid.clone(),
            face_index: self.face_index,
            face_count: self.layout.face_count(),
            row_width: self.layout.row_width(),
            active_indices: self.active_indices(),
        }
    }

    fn active_indices(&self) -> Option<[usize; PIXELS_PER_FACE]> {
        let grid = self.pixel_grid.as_ref()?;
        if !self.layout.fits(grid.len()) {
            return None;
        }
        self.layout.pixel_indices(self.face_index).ok()
    }
}
