use byteorder::{ReadBytesExt, WriteBytesExt};
use log::{debug, trace};
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use crate::{
    error::SettingsError, flag_bit::FlagBits, flag_index, setting::UserSetting, Result,
    FLAG_COUNT,
};

/// Persists the flags as a single byte file. Every call opens the file
/// afresh; nothing is cached between calls.
pub struct UserSettingsManager;
impl UserSettingsManager {
    /// Replaces the file contents with the packed byte, creating the file
    /// if needed.
    pub fn write_settings(settings: &[bool], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if settings.len() != FLAG_COUNT {
            return Err(SettingsError::invalid_argument(format!(
                "settings must contain exactly {FLAG_COUNT} values, got {}",
                settings.len()
            )));
        }

        let byte = FlagBits::pack(settings);
        let mut file = File::create(path)?;
        file.write_u8(byte)?;
        file.flush()?;
        debug!("wrote settings byte {byte:#010b} to {}", path.display());
        Ok(())
    }

    /// Anything other than a regular file at `path` counts as not found.
    pub fn read_settings(path: impl AsRef<Path>) -> Result<[bool; FLAG_COUNT]> {
        let path = path.as_ref();
        let mut file = load_file(path)?;

        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(SettingsError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let len = metadata.len();
        if len != 1 {
            return Err(SettingsError::InvalidData {
                path: path.to_path_buf(),
                len,
            });
        }

        let byte = file.read_u8()?;
        trace!("read settings byte {byte:#010b} from {}", path.display());
        Ok(FlagBits::unpack(byte))
    }

    /// The setting number is checked before the file is touched.
    pub fn is_feature_enabled(setting_number: i32, path: impl AsRef<Path>) -> Result<bool> {
        let index = flag_index(setting_number, "setting number")?;
        let settings = Self::read_settings(path)?;
        Ok(settings[index])
    }

    pub fn is_enabled(setting: UserSetting, path: impl AsRef<Path>) -> Result<bool> {
        Self::is_feature_enabled(setting.number(), path)
    }
}

fn load_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SettingsError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SettingsError::Io(e),
    })
}
