use crate::error::{DashboardError, Result as DashboardErrorResult};

use std::panic::Location;
use std::path::PathBuf;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::Dispatch;

/// Route diagnostics to stderr or `log_file`, keeping stdout for the view.
#[track_caller]
pub fn initialize(
    log_level: ud_config::LogLevel,
    log_file: Option<PathBuf>,
) -> DashboardErrorResult<()> {
    let dispatch = Dispatch::new()
        .level(log_level.0)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}]",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                message,
                record.target(),
            ))
        });

    let dispatch = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|source| DashboardError::LogFile { path, source })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().map_err(|e| DashboardError::Logger {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
