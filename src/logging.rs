//! Log output setup.

use std::path::Path;

/// Routes `log` records to stdout and, if given, to `file`.
pub fn init(level: log::LevelFilter, file: Option<&Path>) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = file {
        let log_file = fern::log_file(path)
            .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
        dispatch = dispatch.chain(log_file);
    }

    dispatch.apply().map_err(|e| e.to_string())
}
