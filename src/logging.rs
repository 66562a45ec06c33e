use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

const LEVEL_VAR: &str = "PAYMENT_SYNC_LOG_LEVEL";
const DIR_VAR: &str = "PAYMENT_SYNC_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub dir: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        let level = std::env::var(LEVEL_VAR)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        Self::resolve(level.as_deref(), std::env::var(DIR_VAR).ok().as_deref())
    }

    fn resolve(level: Option<&str>, dir: Option<&str>) -> Self {
        let level = level
            .and_then(|value| value.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        let dir = match dir.map(str::trim) {
            Some("off") | Some("none") | Some("") => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from("logs")),
        };
        Self { level, dir }
    }
}

/// Installs the global logger once; later calls are no-ops.
pub fn init_logging(app_name: &str, settings: &LogSettings) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = init_logging_inner(app_name, settings) {
            init_result = Err(err);
        }
    });
    init_result
}

fn init_logging_inner(app_name: &str, settings: &LogSettings) -> Result<(), String> {
    // stdout is reserved for JSON documents written by the CLI.
    let mut dispatch = fern::Dispatch::new()
        .level(settings.level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let Some(dir) = &settings.dir {
        std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
        let date = Local::now().format("%Y_%m_%d");
        let file_path = dir.join(format!("{app_name}-{date}.log"));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_and_logs_dir() {
        let settings = LogSettings::resolve(None, None);
        assert_eq!(settings.level, LevelFilter::Info);
        assert_eq!(settings.dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let settings = LogSettings::resolve(Some("chatty"), Some("/tmp/sync-logs"));
        assert_eq!(settings.level, LevelFilter::Info);
        assert_eq!(settings.dir, Some(PathBuf::from("/tmp/sync-logs")));
    }

    #[test]
    fn file_logging_can_be_switched_off() {
        for value in ["off", "none", ""] {
            let settings = LogSettings::resolve(Some("debug"), Some(value));
            assert_eq!(settings.level, LevelFilter::Debug);
            assert!(settings.dir.is_none());
        }
    }
}
