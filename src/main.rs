use std::{env::args_os, io, process::ExitCode};

use cube_face_mosaic::{browse_faces, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match browse_faces(&arguments, stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Browsing failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
