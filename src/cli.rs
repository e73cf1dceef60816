use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "combobot")]
#[command(author, version, about = "Telegram bot serving daily crypto-game combos with Telebirr receipt verification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Validate the configuration files and exit
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
