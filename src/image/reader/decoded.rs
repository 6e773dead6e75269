use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor, Seek},
    path::Path,
};

use super::super::{Image, ImageReader};
use crate::{color::RGBAColorFormat, error::Error};

const IN_MEMORY_SOURCE_NAME: &str = "<memory>";

/// Reads any format the `image` crate recognizes from its content and
/// flattens it to row-major RGBA samples.
pub struct DecodedImageReader<R: BufRead + Seek> {
    reader: R,
    source: String,
}

impl<R: BufRead + Seek> DecodedImageReader<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
        }
    }

    fn decoding_failed(&self, reason: impl std::fmt::Display) -> Error {
        Error::ImageDecodingFailed(format!("{}: {}", self.source, reason))
    }
}

impl DecodedImageReader<BufReader<File>> {
    pub fn open(file_path: &Path) -> crate::Result<Self> {
        let source = file_path.to_string_lossy().into_owned();
        let file = File::open(file_path)
            .map_err(|e| Error::UnableToOpenInputFileForReading(source.clone(), e))?;
        Ok(Self::new(BufReader::new(file), source))
    }
}

impl<'a> DecodedImageReader<Cursor<&'a [u8]>> {
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(Cursor::new(bytes), IN_MEMORY_SOURCE_NAME)
    }
}

impl<R: BufRead + Seek> ImageReader for DecodedImageReader<R> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let format_guess = ::image::ImageReader::new(&mut self.reader).with_guessed_format();
        let decoded = match format_guess {
            Ok(reader) => reader.decode(),
            Err(e) => return Err(self.decoding_failed(e)),
        };
        let decoded = decoded.map_err(|e| self.decoding_failed(e))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("Decoded {} with {}x{} pixels", self.source, width, height);
        let dots = rgba.pixels().map(RGBAColorFormat::from).collect();
        Image::new(width as usize, height as usize, dots)
    }
}
