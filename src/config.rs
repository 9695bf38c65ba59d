use clap::{Parser, Subcommand};

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Query and store the eight user feature flags", long_about = None)]
pub struct Config {
    /// The file holding the packed settings byte.
    #[clap(long, env, default_value = "user_settings.dat")]
    pub settings_path: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one flag of an 8-character '0'/'1' settings string
    Check {
        settings: String,
        /// Setting number (1-8) or name, e.g. `camera`
        setting: String,
    },
    /// Store eight flags, given as a '0'/'1' string with flag 1 first
    Write { bits: String },
    /// Print every stored flag
    Read,
    /// Check one stored flag
    Enabled {
        /// Setting number (1-8) or name, e.g. `camera`
        setting: String,
    },
}

impl Config {
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Config::parse()
    }
}
