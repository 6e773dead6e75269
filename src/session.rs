use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{
    controller::GridController,
    error::Error,
    render::{render_pattern, write_report},
    Result,
};

const PROMPT: &str = "> ";
const HELP_TEXT: &str = "\
Commands:
  n, next            show the next face
  p, prev, previous  show the previous face
  g, goto <N>        show face N as numbered in 'Face N / M'
  o, open <FILE>     load another image
  s, show            print the full pattern
  h, help            print this help
  q, quit            leave the session";

#[derive(Debug, PartialEq)]
enum Command {
    Next,
    Previous,
    Goto(usize),
    Open(PathBuf),
    Show,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, argument)) => (keyword, argument.trim()),
            None => (line, ""),
        };
        match (keyword, argument) {
            ("", _) => Command::Empty,
            ("n" | "next", "") => Command::Next,
            ("p" | "prev" | "previous", "") => Command::Previous,
            ("s" | "show", "") => Command::Show,
            ("h" | "help", "") => Command::Help,
            ("q" | "quit", "") => Command::Quit,
            ("g" | "goto", number) => match number.parse::<usize>() {
                Ok(face_number) => Command::Goto(face_number),
                Err(_) => Command::Invalid(format!("'{}' is not a face number", number)),
            },
            ("o" | "open", "") => Command::Invalid(String::from("open needs a file path")),
            ("o" | "open", file_path) => Command::Open(PathBuf::from(file_path)),
            _ => Command::Invalid(format!("unknown command '{}'", line)),
        }
    }
}

/// Reads one command per line and prints the face after every navigation.
/// Failed loads are reported and leave the current grid in place.
pub fn run_session<R: BufRead, W: Write>(
    controller: &mut GridController,
    input: R,
    output: &mut W,
) -> Result<()> {
    write_prompt(output)?;
    for line in input.lines() {
        let line = line.map_err(Error::FailedToReadInput)?;
        let command = Command::parse(&line);
        log::debug!("session command {:?}", command);
        match command {
            Command::Next => write_report(output, &controller.next_face(), false)?,
            Command::Previous => write_report(output, &controller.previous_face(), false)?,
            Command::Goto(face_number) => {
                let snapshot = controller.set_face(face_number.saturating_sub(1));
                write_report(output, &snapshot, false)?
            }
            Command::Open(file_path) => match controller.load_image_file(&file_path) {
                Ok(snapshot) => write_report(output, &snapshot, false)?,
                Err(e) => write_line(output, &format!("Load failed because of: {}", e))?,
            },
            Command::Show => write_line(output, &render_pattern(&controller.snapshot()))?,
            Command::Help => write_line(output, HELP_TEXT)?,
            Command::Quit => return Ok(()),
            Command::Empty => {}
            Command::Invalid(reason) => {
                write_line(output, &format!("{}, type 'help' for commands", reason))?
            }
        }
        write_prompt(output)?;
    }
    Ok(())
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{}", text).map_err(Error::FailedToWriteOutput)
}

fn write_prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "{}", PROMPT).map_err(Error::FailedToWriteOutput)?;
    output.flush().map_err(Error::FailedToWriteOutput)
}
