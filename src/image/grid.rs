use std::sync::mpsc;

use threadpool::ThreadPool;

use super::Image;
use crate::{
    color::RGBAColorFormat,
    error::Error,
    face::PIXELS_PER_FACE,
    palette::{quantize, PaletteLabel},
    Result,
};

/// The quantized image: one palette label per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    labels: Vec<PaletteLabel>,
}

impl PixelGrid {
    pub fn from_image(image: &Image) -> Self {
        PixelGrid {
            width: image.width(),
            height: image.height(),
            labels: quantize_dots(image.dots()),
        }
    }

    /// Quantizes the image in bands of whole rows on the given pool.
    /// The result is identical to [`PixelGrid::from_image`].
    pub fn from_image_with_pool(image: &Image, threadpool: &ThreadPool) -> Result<Self> {
        let band_length = Self::rows_per_band(image, threadpool) * image.width();
        if band_length == 0 {
            return Ok(Self::from_image(image));
        }
        let bands: Vec<Vec<RGBAColorFormat>> = image
            .dots()
            .chunks(band_length)
            .map(|band| band.to_vec())
            .collect();
        let band_count = bands.len();
        log::debug!(
            "Quantizing {} bands of up to {} pixels on {} threads",
            band_count,
            band_length,
            threadpool.max_count()
        );

        let (sender, receiver) = mpsc::channel();
        for (band_index, band) in bands.into_iter().enumerate() {
            let sender = sender.clone();
            threadpool.execute(move || {
                let labels = quantize_dots(&band);
                // the receiver only hangs up after an earlier failure
                let _ = sender.send((band_index, labels));
            });
        }
        drop(sender);

        let mut quantized_bands: Vec<(usize, Vec<PaletteLabel>)> =
            receiver.iter().take(band_count).collect();
        if quantized_bands.len() != band_count {
            return Err(Error::QuantizationWorkerFailed);
        }
        quantized_bands.sort_by_key(|(band_index, _)| *band_index);
        let labels = quantized_bands
            .into_iter()
            .flat_map(|(_, labels)| labels)
            .collect();
        Ok(PixelGrid {
            width: image.width(),
            height: image.height(),
            labels,
        })
    }

    fn rows_per_band(image: &Image, threadpool: &ThreadPool) -> usize {
        let workers = threadpool.max_count().max(1);
        image.height().div_ceil(workers)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[PaletteLabel] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<PaletteLabel> {
        self.labels.get(index).copied()
    }

    pub fn face_labels(
        &self,
        indices: &[usize; PIXELS_PER_FACE],
    ) -> Option<[PaletteLabel; PIXELS_PER_FACE]> {
        let mut labels = [PaletteLabel::Orange; PIXELS_PER_FACE];
        for (label, &index) in labels.iter_mut().zip(indices) {
            *label = self.label(index)?;
        }
        Some(labels)
    }
}

fn quantize_dots(dots: &[RGBAColorFormat]) -> Vec<PaletteLabel> {
    dots.iter().map(quantize).collect()
}
