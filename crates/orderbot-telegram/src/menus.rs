//! Menu image lookup.

use std::path::{Path, PathBuf};

use orderbot_core::config::menu_image_path_in;
use tracing::debug;

use crate::error::{BotError, Result};

/// Resolves the image for `menu_key` inside `menu_dir`.
///
/// Fails with [`BotError::MenuAssetMissing`] if no file is there.
pub fn resolve_menu_image(menu_dir: &Path, menu_key: &str) -> Result<PathBuf> {
    let path = menu_image_path_in(menu_dir, menu_key);
    if !path.is_file() {
        return Err(BotError::MenuAssetMissing(path));
    }
    debug!(menu = %menu_key, path = %path.display(), "Resolved menu image");
    Ok(path)
}
