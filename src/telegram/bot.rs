//! Bot initialization and command registration
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command menu registration (bilingual Amharic/English descriptions)

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "እነዚህ ትዕዛዞች ይደገፋሉ | These commands are supported:")]
pub enum Command {
    #[command(description = "ይሄንን ቦት ለመጀመር | Starts this bot")]
    Start,
    #[command(description = "Combos አሳይ | Display available combos")]
    Combos,
    #[command(description = "ስለ ግላዊ መረጃ አሰባሰብ ያሳይዎታል | Privacy policy")]
    Privacy,
    #[command(description = "ስለ አጠቃቀም ግዴታዎችና መብቶችን ያሳይዎታል | Terms of use")]
    Terms,
}

/// Creates a Bot instance from the configured token
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - BOT_TOKEN/TELOXIDE_TOKEN is not set
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        return Err(anyhow::anyhow!("BOT_TOKEN environment variable not set"));
    }
    Ok(Bot::new(token))
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_list() {
        let commands = Command::bot_commands();

        assert_eq!(commands.len(), 4);
        for expected in ["start", "combos", "privacy", "terms"] {
            assert!(
                commands.iter().any(|c| c.command.contains(expected)),
                "missing command: {}",
                expected
            );
        }
    }

    #[test]
    fn test_command_descriptions_are_bilingual() {
        for command in Command::bot_commands() {
            assert!(command.description.contains('|'), "{} lacks bilingual description", command.command);
        }
    }
}
