use std::{fs, path::PathBuf};

/// A settings file path under the temp dir, unique per test and process.
/// The file is deleted when this is dropped.
pub struct SettingsFile {
    pub path: PathBuf,
}

impl SettingsFile {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "user_settings_it_{}_{name}.dat",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        SettingsFile { path }
    }
}

impl Drop for SettingsFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
