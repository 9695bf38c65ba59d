//! Eight boolean feature toggles, stored either as an 8-character `'0'`/`'1'`
//! string or as a single packed byte in a file.
//!
//! Flags are addressed by a 1-based index in `1..=8`. In the packed byte,
//! flag 1 is the least significant bit.

pub mod checker;
pub mod error;
pub mod flag_bit;
pub mod setting;
pub mod store;

pub use checker::UserSettingsChecker;
pub use error::{ErrorKind, Result, SettingsError};
pub use flag_bit::FlagBits;
pub use setting::UserSetting;
pub use store::UserSettingsManager;

/// Number of flags in a settings value.
pub const FLAG_COUNT: usize = 8;

/// Converts a 1-based setting number into a 0-based flag index.
pub(crate) fn flag_index(setting: i32, what: &str) -> Result<usize> {
    if !(1..=FLAG_COUNT as i32).contains(&setting) {
        return Err(SettingsError::invalid_argument(format!(
            "{what} must be between 1 and {FLAG_COUNT}, got {setting}"
        )));
    }
    Ok(setting as usize - 1)
}
