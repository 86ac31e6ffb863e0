mod loader;
mod model;

pub use loader::{
    CONFIG_FILE_NAME, LoadedConfig, STARTER_CONFIG, build_validator_config, load_config,
};
pub use model::{
    Config, CorpusConfig, IgnoreEntry, MappingConfig, OptionsConfig, RulesConfig, VocabularyConfig,
};
