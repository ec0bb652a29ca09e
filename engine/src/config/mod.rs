mod serializer;
mod settings_file;

pub use serializer::{ConfigSerializer, YamlConfigSerializer};
pub use settings_file::SettingsFile;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
