pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;

use std::path::Path;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, override_file: Option<&Path>) -> AppResult<Settings> {
    match override_file {
        Some(path) => settings::load(path),
        None => settings::load(&paths.settings_file()),
    }
}
