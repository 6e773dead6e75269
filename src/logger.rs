use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const CONFIG_FILE_PATH: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE_PATH, Default::default()).is_ok() {
        return;
    }
    if let Some(config) = fallback_config() {
        if let Err(e) = log4rs::init_config(config) {
            eprintln!("Unable to initialize logging: {}", e);
        }
    }
}

fn fallback_config() -> Option<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )
        .ok()
}

pub fn log_face(face_index: usize, face_count: usize, indices: &[usize]) {
    log::debug!(
        "face {} of {} covers pixels {:?}",
        face_index + 1,
        face_count,
        indices
    );
}
