use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Installs an `env_logger` that prints `[level] message` lines to stderr. The level
/// may be overridden with the `RUST_LOG` environment variable. Calling this function
/// more than once (e.g. from several tests) is harmless.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "[{:<5}] {}", record.level(), record.args()))
        .is_test(cfg!(test))
        .try_init();
}

/// Same as [`build_logger_for_level`] but raises `base` by one level for each
/// occurrence of `-v` on the command line.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let level = LevelFilter::iter()
        .skip_while(|&l| l != base)
        .nth(verbosity)
        .unwrap_or(LevelFilter::Trace);

    build_logger_for_level(level);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn repeated_initialization() {
        build_logger_for_level(LevelFilter::Info);
        build_logger_for_verbosity(LevelFilter::Warn, 2);
        log::info!("logger still usable");
    }
}
