use strum_macros::{Display, EnumIter, EnumString};

use crate::{error::SettingsError, FLAG_COUNT};

/// The eight feature toggles, numbered by their 1-based flag index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum UserSetting {
    SmsNotifications = 1,
    PushNotifications = 2,
    Biometrics = 3,
    Camera = 4,
    Location = 5,
    Nfc = 6,
    Vouchers = 7,
    Loyalty = 8,
}

impl UserSetting {
    pub fn number(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for UserSetting {
    type Error = SettingsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        use UserSetting::*;
        Ok(match value {
            1 => SmsNotifications,
            2 => PushNotifications,
            3 => Biometrics,
            4 => Camera,
            5 => Location,
            6 => Nfc,
            7 => Vouchers,
            8 => Loyalty,
            _ => {
                return Err(SettingsError::invalid_argument(format!(
                    "setting must be between 1 and {FLAG_COUNT}, got {value}"
                )))
            }
        })
    }
}
