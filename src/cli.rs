use crate::face::LayoutPolicy;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_layout_policy_argument(command);
        let command = Self::register_face_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_pattern_argument(command);
        Self::register_interactive_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_layout_policy_argument(command: Command) -> Command {
        command.arg(Self::create_layout_policy_argument())
    }

    fn register_face_argument(command: Command) -> Command {
        command.arg(Self::create_face_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_pattern_argument(command: Command) -> Command {
        command.arg(Self::create_pattern_argument())
    }

    fn register_interactive_argument(command: Command) -> Command {
        command.arg(Self::create_interactive_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the image to quantize")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_layout_policy_argument() -> Arg {
        arg!(layout_policy: -l --layout <LAYOUT> "How faces are laid out over the image")
            .default_value("cube-net")
            .value_parser(value_parser!(LayoutPolicy))
    }

    fn create_face_argument() -> Arg {
        arg!(-f --face <FACE> "Face to show first, numbered as in 'Face N / M'")
            .default_value("1")
            .value_parser(value_parser!(usize))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_pattern_argument() -> Arg {
        arg!(-p --pattern "Also print the full pattern with the face highlighted")
    }

    fn create_interactive_argument() -> Arg {
        arg!(-i --interactive "Browse faces with commands read from stdin")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            layout_policy: Self::extract_layout_policy_argument(matches),
            start_face: Self::extract_face_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            show_pattern: Self::extract_pattern_argument(matches),
            interactive: Self::extract_interactive_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_layout_policy_argument(matches: &ArgMatches) -> LayoutPolicy {
        matches
            .get_one::<LayoutPolicy>("layout_policy")
            .expect("Layout policy must be provided, but was unset.")
            .to_owned()
    }

    /// Converts the displayed face number into a face index.
    fn extract_face_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("face")
            .expect("Face must be provided, but was unset.")
            .saturating_sub(1)
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_pattern_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("pattern")
    }

    fn extract_interactive_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("interactive")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
