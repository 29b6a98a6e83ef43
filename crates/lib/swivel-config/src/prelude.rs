pub use crate::builder::SettingsBuilder;
pub use crate::error::*;
pub use crate::settings::GenerationSettings;
pub use url::Url;
