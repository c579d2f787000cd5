use crate::core::error::PlaygroundError;
use std::path::PathBuf;

const APP_DIR: &str = "git-playground";

pub fn get_config_directory() -> Result<PathBuf, PlaygroundError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| PlaygroundError::directory_not_found("config"))
}

pub fn get_data_directory() -> Result<PathBuf, PlaygroundError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local/share"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::data_dir(),
    };

    base.map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| PlaygroundError::directory_not_found("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_end_with_app_name() {
        if let Ok(dir) = get_config_directory() {
            assert!(dir.ends_with(APP_DIR));
        }
        if let Ok(dir) = get_data_directory() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
