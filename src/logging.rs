// src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;

fn level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise stderr logging. `RUST_LOG` wins over `-v` when set.
pub fn init(verbosity: u8) {
    let mut builder = Builder::new();
    builder.filter_level(level(verbosity));
    builder.parse_env(Env::default());
    // A second initialisation (e.g. from tests) is harmless.
    let _ = builder.format_timestamp(None).try_init();
}
