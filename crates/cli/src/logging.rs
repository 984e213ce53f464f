use std::ops::Deref;
use std::panic;
use std::path::Path;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Log to `log_file`. Merge progress of the library is only logged in debug
/// mode.
pub fn setup(debug: bool, log_file: &Path) -> anyhow::Result<()> {
    set_panic_hook(debug);

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{l} {d(%H:%M:%S.%3f)} {M} {m}{n}",
        )))
        .build(log_file)?;

    let (level, merge_level) = levels(debug);
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .logger(Logger::builder().build("rankmerge", merge_level))
        .build(Root::builder().appender("file").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Root level and the level of the merge library
fn levels(debug: bool) -> (LevelFilter, LevelFilter) {
    if debug {
        (LevelFilter::Debug, LevelFilter::Trace)
    } else {
        (LevelFilter::Info, LevelFilter::Warn)
    }
}

/// Out of range merger access ends up here, report it to the log and the user
fn set_panic_hook(debug: bool) {
    panic::set_hook(Box::new(move |info| {
        if debug {
            let backtrace = std::backtrace::Backtrace::force_capture();
            log::error!("{backtrace}");
        }

        let (filename, line) = info
            .location()
            .map(|loc| (loc.file(), loc.line()))
            .unwrap_or(("<unknown>", 0));

        let cause = info
            .payload()
            .downcast_ref::<String>()
            .map(String::deref)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("<cause unknown>");

        log::error!("Panic at {filename}:{line}: {cause}");
        eprintln!("rmerge: {cause}");
    }));
}
