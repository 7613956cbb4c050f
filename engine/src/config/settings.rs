use serde::{Deserialize, Serialize};

use crate::bot_controller::Difficulty;
use crate::error::ConfigError;
use super::config_serializer::ConfigSerializer;
use super::configuration::{Configuration, DEFAULT_TIMER_SECONDS, GameMode};
use super::validate::Validate;

/// The persisted settings record shared with the presentation layer. Colors
/// and theme are carried through untouched; the engine never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    pub size: usize,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub player1_symbol: String,
    pub player2_symbol: String,
    pub player1_color: String,
    pub player2_color: String,
    pub theme: String,
    pub ai_starts: bool,
    pub timer_enabled: bool,
    pub timer_seconds: u32,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            size: 3,
            mode: GameMode::PvP,
            difficulty: Difficulty::Medium,
            player1_symbol: "X".to_string(),
            player2_symbol: "O".to_string(),
            player1_color: "#e74c3c".to_string(),
            player2_color: "#3498db".to_string(),
            theme: "dark".to_string(),
            ai_starts: false,
            timer_enabled: false,
            timer_seconds: DEFAULT_TIMER_SECONDS,
        }
    }
}

impl Validate for SettingsRecord {
    fn validate(&self) -> Result<(), ConfigError> {
        Configuration::try_from(self).map(|_| ())
    }
}

impl TryFrom<&SettingsRecord> for Configuration {
    type Error = ConfigError;

    fn try_from(record: &SettingsRecord) -> Result<Self, Self::Error> {
        Configuration::new(
            record.size,
            record.mode,
            record.difficulty,
            &record.player1_symbol,
            &record.player2_symbol,
        )?
        .with_timer(record.timer_enabled, record.timer_seconds)
        .map(|config| config.with_ai_starts(record.ai_starts))
    }
}

/// Parses stored settings. Missing content falls back to the defaults;
/// present but invalid content is an error, never silently replaced.
pub fn load_configuration<S>(
    serializer: &S,
    content: Option<&str>,
) -> Result<(SettingsRecord, Configuration), ConfigError>
where
    S: ConfigSerializer<SettingsRecord>,
{
    let record = match content {
        Some(content) => serializer.deserialize(content)?,
        None => SettingsRecord::default(),
    };
    let config = Configuration::try_from(&record)?;
    Ok((record, config))
}
