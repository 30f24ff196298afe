//! Shared configuration paths for Orderbot.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.orderbot/
//! ├── config/       # .env.local with the bot token and TTS credentials
//! └── menus/        # Menu images, one PNG per supported menu
//! ```
//!
//! Orders themselves are never written to disk.
//!
//! # Environment Variables
//!
//! - `ORDERBOT_STATE_DIR`: Override the base state directory
//! - `ORDERBOT_CONFIG_DIR`: Override the config directory
//! - `ORDERBOT_MENU_DIR`: Override the menu image directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "ORDERBOT_STATE_DIR";

/// Environment variable for custom config directory.
pub const CONFIG_DIR_ENV: &str = "ORDERBOT_CONFIG_DIR";

/// Environment variable for custom menu image directory.
pub const MENU_DIR_ENV: &str = "ORDERBOT_MENU_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".orderbot";

const CONFIG_SUBDIR: &str = "config";
const MENUS_SUBDIR: &str = "menus";

/// Extension of menu image files.
const MENU_IMAGE_EXT: &str = "png";

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the Orderbot state directory.
///
/// The state directory is determined by:
/// 1. `ORDERBOT_STATE_DIR` environment variable if set
/// 2. `~/.orderbot` if home directory is available
/// 3. `.orderbot` in current directory as fallback
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Get the config directory.
///
/// Defaults to `~/.orderbot/config/` or `ORDERBOT_CONFIG_DIR` env var.
pub fn config_dir() -> PathBuf {
    std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| state_dir().join(CONFIG_SUBDIR))
}

/// Get the menu image directory.
///
/// Defaults to `~/.orderbot/menus/` or `ORDERBOT_MENU_DIR` env var.
pub fn menu_dir() -> PathBuf {
    std::env::var(MENU_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| state_dir().join(MENUS_SUBDIR))
}

/// Get the .env.local file path.
pub fn env_file() -> PathBuf {
    config_dir().join(".env.local")
}

/// File stem for a menu: lower-cased, spaces replaced with `-`.
///
/// `"Shake Shack"` becomes `"shake-shack"`.
pub fn menu_slug(menu_key: &str) -> String {
    menu_key
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Image path for a menu inside `dir`.
pub fn menu_image_path_in(dir: &Path, menu_key: &str) -> PathBuf {
    dir.join(format!("{}.{}", menu_slug(menu_key), MENU_IMAGE_EXT))
}

/// Image path for a menu inside [`menu_dir`].
pub fn menu_image_path(menu_key: &str) -> PathBuf {
    menu_image_path_in(&menu_dir(), menu_key)
}

/// Ensure the config and menu directories exist.
///
/// # Errors
/// Returns an error if any directory cannot be created.
pub fn ensure_all_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(config_dir())?;
    std::fs::create_dir_all(menu_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables can't be isolated between parallel tests, so
    // these check path shapes rather than full paths.

    #[test]
    fn test_state_dir_shape() {
        let dir = state_dir();
        assert!(dir.is_absolute() || dir.ends_with(".orderbot"));
    }

    #[test]
    fn test_env_file_name() {
        assert!(env_file().ends_with(".env.local"));
    }

    #[test]
    fn test_menu_slug() {
        assert_eq!(menu_slug("Shake Shack"), "shake-shack");
        assert_eq!(menu_slug("  Five   Guys "), "five-guys");
        assert_eq!(menu_slug("Nandos"), "nandos");
    }

    #[test]
    fn test_menu_image_path_in() {
        let tmp = tempfile::tempdir().unwrap();
        let path = menu_image_path_in(tmp.path(), "Shake Shack");

        assert_eq!(path, tmp.path().join("shake-shack.png"));
        assert!(!path.exists());

        std::fs::write(&path, b"png").unwrap();
        assert!(menu_image_path_in(tmp.path(), "Shake Shack").exists());
    }

    #[test]
    fn test_menu_image_path_name() {
        assert!(menu_image_path("Shake Shack").ends_with("shake-shack.png"));
    }
}
