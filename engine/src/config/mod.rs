mod config_serializer;
mod configuration;
mod settings;
mod validate;

pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use configuration::{Configuration, GameMode, MAX_TIMER_SECONDS, MIN_TIMER_SECONDS};
pub use settings::{SettingsRecord, load_configuration};
pub use validate::Validate;
