mod config;

use anyhow::{bail, Context};
use log::info;
use std::str::FromStr;
use strum::IntoEnumIterator;
use user_settings::{UserSetting, UserSettingsChecker, UserSettingsManager, FLAG_COUNT};

use crate::config::{Command, Config};

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let config = Config::load();

    match config.command {
        Command::Check { settings, setting } => {
            let number = parse_setting(&setting)?;
            let enabled = UserSettingsChecker::is_feature_enabled(&settings, number)?;
            println!("{enabled}");
        }
        Command::Write { bits } => {
            let flags = parse_bits(&bits)?;
            UserSettingsManager::write_settings(&flags, &config.settings_path)
                .with_context(|| format!("writing {}", config.settings_path))?;
            info!("stored {bits} in {}", config.settings_path);
        }
        Command::Read => {
            let flags = UserSettingsManager::read_settings(&config.settings_path)
                .with_context(|| format!("reading {}", config.settings_path))?;
            for (setting, enabled) in UserSetting::iter().zip(flags) {
                println!("{setting}: {enabled}");
            }
        }
        Command::Enabled { setting } => {
            let number = parse_setting(&setting)?;
            let enabled = UserSettingsManager::is_feature_enabled(number, &config.settings_path)
                .with_context(|| format!("reading {}", config.settings_path))?;
            println!("{enabled}");
        }
    }

    Ok(())
}

/// Accepts a setting number or a setting name. Numbers are passed through
/// unchecked so the library reports the range error.
fn parse_setting(arg: &str) -> Result<i32, anyhow::Error> {
    if let Ok(number) = arg.parse::<i32>() {
        return Ok(number);
    }
    let setting = UserSetting::from_str(arg)
        .with_context(|| format!("unknown setting `{arg}`"))?;
    Ok(setting.number())
}

fn parse_bits(bits: &str) -> Result<Vec<bool>, anyhow::Error> {
    if bits.chars().count() != FLAG_COUNT {
        bail!("expected {FLAG_COUNT} flags, got `{bits}`");
    }
    bits.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => bail!("flag must be '0' or '1', got `{other}`"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setting() {
        assert_eq!(3, parse_setting("3").unwrap());
        assert_eq!(9, parse_setting("9").unwrap());
        assert_eq!(6, parse_setting("nfc").unwrap());
        assert_eq!(1, parse_setting("sms-notifications").unwrap());
        assert!(parse_setting("wifi").is_err());
    }

    #[test]
    fn test_parse_bits() {
        assert_eq!(
            vec![true, false, true, true, false, false, true, false],
            parse_bits("10110010").unwrap()
        );
        assert!(parse_bits("1011001").is_err());
        assert!(parse_bits("1011001x").is_err());
    }
}
