use crate::builder::SettingsBuilder;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use url::Url;

/// Validated settings handed to the generation pipeline.
///
/// Only obtainable through [`SettingsBuilder::build`], so every instance
/// already satisfies the required-field checks. Fields cannot change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    pub(crate) input_base: Url,
    pub(crate) inputs: BTreeSet<Url>,
    pub(crate) output_folder: PathBuf,
    pub(crate) override_package: Option<String>,
    pub(crate) default_package: Option<String>,
    pub(crate) add_thrift_exceptions: bool,
    pub(crate) generate_included_code: bool,
    pub(crate) code_flavor: String,
}

impl GenerationSettings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Base location used to load IDL files and their includes.
    pub fn input_base(&self) -> &Url {
        &self.input_base
    }

    /// Entry-point IDL files. Any non-absolute reference is resolved against
    /// [`Self::input_base`] by the consumer.
    pub fn inputs(&self) -> &BTreeSet<Url> {
        &self.inputs
    }

    /// Folder that will contain the generated sources.
    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// When present, replaces the namespace declared in every IDL unit.
    pub fn override_package(&self) -> Option<&str> {
        self.override_package.as_deref()
    }

    /// Namespace for IDL units that do not declare one.
    pub fn default_package(&self) -> Option<&str> {
        self.default_package.as_deref()
    }

    /// Whether generated service methods declare the transport exception
    /// type in their signature.
    pub fn is_add_thrift_exceptions(&self) -> bool {
        self.add_thrift_exceptions
    }

    /// Whether included IDL units are generated in full instead of only
    /// being referenced.
    pub fn is_generate_included_code(&self) -> bool {
        self.generate_included_code
    }

    /// Template family used to generate source code.
    pub fn code_flavor(&self) -> &str {
        &self.code_flavor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(value: &str) -> Url {
        Url::parse(value).unwrap()
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_settings_are_send_and_sync() {
        assert_send_sync::<GenerationSettings>();
    }

    #[test]
    fn test_accessors_echo_supplied_values() {
        let settings = GenerationSettings::builder()
            .input_base(url("file:///idl/"))
            .add_input(url("file:///idl/a.thrift"))
            .output_folder("/tmp/out")
            .override_package("com.example.forced")
            .default_package("com.example.fallback")
            .add_thrift_exceptions(false)
            .generate_included_code(true)
            .code_flavor("java-immutable")
            .build()
            .unwrap();

        assert_eq!(settings.input_base(), &url("file:///idl/"));
        assert_eq!(
            settings.inputs(),
            &BTreeSet::from([url("file:///idl/a.thrift")])
        );
        assert_eq!(settings.output_folder(), Path::new("/tmp/out"));
        assert_eq!(settings.override_package(), Some("com.example.forced"));
        assert_eq!(settings.default_package(), Some("com.example.fallback"));
        assert!(!settings.is_add_thrift_exceptions());
        assert!(settings.is_generate_included_code());
        assert_eq!(settings.code_flavor(), "java-immutable");
    }

    #[test]
    fn test_clone_is_equal_and_shareable_across_threads() {
        let settings = GenerationSettings::builder()
            .input_base(url("file:///idl/"))
            .add_input(url("file:///idl/a.thrift"))
            .output_folder("/tmp/out")
            .code_flavor("java")
            .build()
            .unwrap();

        let shared = std::sync::Arc::new(settings.clone());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.inputs().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        assert_eq!(*shared, settings);
    }
}
