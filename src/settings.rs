//! Static bot data loaded once at startup
//!
//! UI strings and the referral table come from two YAML files and are passed
//! into the handlers as one immutable [`Settings`] object — no ambient
//! globals, so handlers stay constructible and testable with zero I/O.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::config;
use crate::core::error::AppResult;
use crate::referrals::Referral;

/// Keyed lookup of localized UI texts (`ui_strings.yml`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct UiStrings(HashMap<String, String>);

impl UiStrings {
    /// Returns the text for `key`, or the key itself when the table has no
    /// entry for it. A visible raw key in chat beats a silent empty message.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[derive(Debug, Deserialize)]
struct ReferralsFile {
    referrals: Vec<Referral>,
}

/// Immutable static data shared by all handlers.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub ui: UiStrings,
    pub referrals: Vec<Referral>,
}

impl Settings {
    /// Loads settings from the configured YAML paths.
    ///
    /// A missing or malformed file is logged and replaced with an empty
    /// table; the bot keeps running with degraded responses rather than
    /// refusing to start.
    pub fn load() -> Self {
        Self::load_from(
            Path::new(config::UI_STRINGS_PATH.as_str()),
            Path::new(config::REFERRALS_PATH.as_str()),
        )
    }

    /// Loads settings from explicit paths (used by tests and `check-config`).
    pub fn load_from(ui_path: &Path, referrals_path: &Path) -> Self {
        let ui = match read_yaml::<UiStrings>(ui_path) {
            Ok(ui) => ui,
            Err(e) => {
                log::warn!("Failed to load UI strings from {}: {}", ui_path.display(), e);
                UiStrings::default()
            }
        };

        let referrals = match read_yaml::<ReferralsFile>(referrals_path) {
            Ok(file) => file.referrals,
            Err(e) => {
                log::warn!("Failed to load referrals from {}: {}", referrals_path.display(), e);
                Vec::new()
            }
        };

        Settings { ui, referrals }
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_ui_strings_and_referrals() {
        let ui = yaml_file("help_message: Try /combos\nterms_of_use: Be nice\n");
        let referrals = yaml_file(concat!(
            "referrals:\n",
            "  - bot: SomeBot\n",
            "    url: https://t.me/SomeBot\n",
            "  - bot: OtherBot\n",
            "    url: https://t.me/OtherBot\n",
        ));

        let settings = Settings::load_from(ui.path(), referrals.path());

        assert_eq!(settings.ui.get("help_message"), "Try /combos");
        assert_eq!(settings.referrals.len(), 2);
        assert_eq!(settings.referrals[0].bot, "SomeBot");
        assert_eq!(settings.referrals[1].url, "https://t.me/OtherBot");
    }

    #[test]
    fn missing_files_degrade_to_empty_tables() {
        let settings = Settings::load_from(Path::new("does/not/exist.yml"), Path::new("also/missing.yml"));

        assert!(settings.referrals.is_empty());
        // lookup falls back to the key itself
        assert_eq!(settings.ui.get("help_message"), "help_message");
    }

    #[test]
    fn unknown_ui_key_falls_back_to_key() {
        let ui = yaml_file("known: value\n");
        let referrals = yaml_file("referrals: []\n");
        let settings = Settings::load_from(ui.path(), referrals.path());

        assert_eq!(settings.ui.get("known"), "value");
        assert_eq!(settings.ui.get("unknown"), "unknown");
    }
}
