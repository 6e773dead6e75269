use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

pub use cli::CLIParser;
pub use color::RGBAColorFormat;
pub use controller::{GridController, Snapshot};
pub use error::Error;
pub use face::{face_pixel_indices, FaceLayout, LayoutPolicy};
pub use crate::image::grid::PixelGrid;
pub use palette::{quantize, PaletteLabel};

mod cli;
mod color;
pub mod controller;
mod error;
pub mod face;
pub mod image;
mod logger;
pub mod palette;
pub mod render;
mod session;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    layout_policy: LayoutPolicy,
    start_face: usize,
    number_of_threads: usize,
    show_pattern: bool,
    interactive: bool,
}

/// Loads the input image, prints the starting face and, when asked for,
/// hands the controller to an interactive session on `input`.
pub fn browse_faces<R: BufRead, W: Write>(
    arguments: &Arguments,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut controller =
        GridController::with_threads(arguments.layout_policy, arguments.number_of_threads);
    controller.load_image_file(&arguments.input_file)?;
    let snapshot = controller.set_face(arguments.start_face);
    render::write_report(output, &snapshot, arguments.show_pattern)?;
    if arguments.interactive {
        session::run_session(&mut controller, input, output)?;
    }
    Ok(())
}
