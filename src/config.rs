use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Kinfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment override for the data directory (tests, portable installs).
pub const DATA_DIR_ENV: &str = "KINFOLIO_DATA_DIR";

/// File holding the client-side login flag.
pub const AUTH_FLAG_FILE: &str = "session.flag";

/// Member preselected in a fresh event form.
pub const DEFAULT_FORM_MEMBER_ID: u32 = 1;

/// Locator prefix for attachments picked in a form.
pub const ATTACHMENT_LOCATOR_PREFIX: &str = "uploads";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "kinfolio=debug,kinfolio_lib=debug,info"
    } else {
        "kinfolio=info,kinfolio_lib=info,warn"
    }
}

/// Get the application data directory.
/// `~/Kinfolio/` unless `KINFOLIO_DATA_DIR` is set. Falls back to the
/// working directory when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Path of the persisted login flag.
pub fn auth_flag_path() -> PathBuf {
    app_data_dir().join(AUTH_FLAG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_flag_under_app_data() {
        let flag = auth_flag_path();
        assert!(flag.starts_with(app_data_dir()));
        assert!(flag.ends_with(AUTH_FLAG_FILE));
    }

    #[test]
    fn app_name_is_kinfolio() {
        assert_eq!(APP_NAME, "Kinfolio");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn log_filter_names_both_targets() {
        let filter = default_log_filter();
        assert!(filter.contains("kinfolio="));
        assert!(filter.contains("kinfolio_lib="));
    }
}
