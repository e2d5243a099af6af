use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the run mode. `"development"` picks the
/// live dev server; unset or any other value means production.
pub const MODE_ENV_VAR: &str = "LANTERN_ENV";

/// Address the Vite dev server is assumed to be listening on in development.
pub const DEV_SERVER_URL: &str = "http://localhost:5173";

/// Bundled document loaded in production, relative to the app's content root.
pub const BUNDLED_INDEX: &str = "index.html";

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Classify the raw mode flag. Only the exact string `"development"`
    /// selects development; everything else (including unset) is production.
    pub fn classify(flag: Option<&str>) -> Self {
        match flag {
            Some("development") => Mode::Development,
            _ => Mode::Production,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        match env::consts::OS {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }

    /// macOS apps conventionally stay in the dock with zero open windows
    /// until the user quits explicitly; everywhere else the process exits.
    pub fn stays_resident_without_windows(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

/// Immutable per-process configuration, resolved once at startup and
/// injected into the controller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShellConfig {
    pub mode: Mode,
    pub platform: Platform,
}

impl ShellConfig {
    pub fn new(mode: Mode, platform: Platform) -> Self {
        Self { mode, platform }
    }

    pub fn from_env() -> Self {
        Self {
            mode: Mode::classify(env::var(MODE_ENV_VAR).ok().as_deref()),
            platform: Platform::current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_flag_selects_development() {
        assert_eq!(Mode::classify(Some("development")), Mode::Development);
    }

    #[test]
    fn anything_else_is_production() {
        assert_eq!(Mode::classify(None), Mode::Production);
        assert_eq!(Mode::classify(Some("")), Mode::Production);
        assert_eq!(Mode::classify(Some("production")), Mode::Production);
        assert_eq!(Mode::classify(Some("Development")), Mode::Production);
        assert_eq!(Mode::classify(Some("dev")), Mode::Production);
    }

    #[test]
    fn only_macos_stays_resident() {
        assert!(Platform::MacOs.stays_resident_without_windows());
        assert!(!Platform::Windows.stays_resident_without_windows());
        assert!(!Platform::Linux.stays_resident_without_windows());
        assert!(!Platform::Other.stays_resident_without_windows());
    }

    #[test]
    fn from_env_reads_the_mode_flag() {
        env::set_var(MODE_ENV_VAR, "development");
        assert_eq!(ShellConfig::from_env().mode, Mode::Development);
        env::set_var(MODE_ENV_VAR, "release");
        assert_eq!(ShellConfig::from_env().mode, Mode::Production);
        env::remove_var(MODE_ENV_VAR);
        assert_eq!(ShellConfig::from_env().mode, Mode::Production);
    }
}
