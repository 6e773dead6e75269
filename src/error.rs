use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToOpenInputFileForReading(String, std::io::Error),
    ImageDecodingFailed(String),
    PixelCountMismatch {
        expected: usize,
        actual: usize,
    },
    ImageTooSmall {
        width: usize,
        height: usize,
        required_width: usize,
        required_height: usize,
    },
    FaceIndexOutOfRange {
        face_index: usize,
        face_count: usize,
    },
    InvalidPaletteCode(u8),
    QuantizationWorkerFailed,
    FailedToReadInput(std::io::Error),
    FailedToWriteOutput(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::ImageDecodingFailed(reason) => {
                write!(f, "Unable to decode image: {}", reason)
            }
            Self::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Number of pixels does not match the image size. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::ImageTooSmall {
                width,
                height,
                required_width,
                required_height,
            } => {
                write!(
                    f,
                    "Image of {}x{} pixels is smaller than the required {}x{} pixels",
                    width, height, required_width, required_height
                )
            }
            Self::FaceIndexOutOfRange {
                face_index,
                face_count,
            } => {
                write!(
                    f,
                    "Face index {} is out of range, layout has {} faces",
                    face_index, face_count
                )
            }
            Self::InvalidPaletteCode(code) => {
                write!(f, "Palette code '{}' does not name a cube color", code)
            }
            Self::QuantizationWorkerFailed => {
                write!(f, "A quantization worker stopped before delivering its band")
            }
            Self::FailedToReadInput(error) => {
                write!(f, "Failed to read input: {}", error)
            }
            Self::FailedToWriteOutput(error) => {
                write!(f, "Failed to write output: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
