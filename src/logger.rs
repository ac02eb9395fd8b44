use simplelog::{Config, LevelFilter, SimpleLogger};

/// Initialize logging. Errors are presented to the user directly, so
/// the log level stays quiet unless `--verbose` is given.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let _ = SimpleLogger::init(level, Config::default());
}
