use crate::{error::SettingsError, flag_index, setting::UserSetting, Result, FLAG_COUNT};

/// Answers flag queries against the 8-character string form, where
/// character `i - 1` holds flag `i`. Characters are counted as UTF-16 code
/// units, so a character outside the BMP takes two positions.
pub struct UserSettingsChecker;
impl UserSettingsChecker {
    /// Only an exact `'1'` counts as enabled. Other characters, valid or not,
    /// read as disabled.
    pub fn is_feature_enabled(settings: &str, setting: i32) -> Result<bool> {
        if settings.is_empty() || settings.encode_utf16().count() != FLAG_COUNT {
            return Err(SettingsError::invalid_argument(format!(
                "settings string must be exactly {FLAG_COUNT} characters long"
            )));
        }
        let index = flag_index(setting, "setting")?;

        Ok(settings.encode_utf16().nth(index) == Some(u16::from(b'1')))
    }

    /// Same as [`Self::is_feature_enabled`], with a missing string rejected
    /// like an empty one.
    pub fn is_feature_enabled_opt(settings: Option<&str>, setting: i32) -> Result<bool> {
        Self::is_feature_enabled(settings.unwrap_or_default(), setting)
    }

    pub fn is_enabled(settings: &str, setting: UserSetting) -> Result<bool> {
        Self::is_feature_enabled(settings, setting.number())
    }
}
