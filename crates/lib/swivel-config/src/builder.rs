use crate::error::{MissingField, SettingsError, SettingsResult};
use crate::settings::GenerationSettings;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, error, info};
use url::Url;

/// Accumulates generation settings before they are frozen by [`Self::build`].
///
/// Setters can be called in any order and any number of times. Nothing is
/// checked until `build`, so incomplete intermediate states are fine.
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    input_base: Option<Url>,
    inputs: BTreeSet<Url>,
    output_folder: Option<PathBuf>,
    override_package: Option<String>,
    default_package: Option<String>,
    add_thrift_exceptions: bool,
    generate_included_code: bool,
    code_flavor: Option<String>,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            input_base: None,
            inputs: BTreeSet::new(),
            output_folder: None,
            override_package: None,
            default_package: None,
            add_thrift_exceptions: true,
            generate_included_code: false,
            code_flavor: None,
        }
    }
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_base(&mut self, input_base: Url) -> &mut Self {
        self.input_base = Some(input_base);
        self
    }

    /// Adds a single input location. Adding a location twice has no effect.
    pub fn add_input(&mut self, input: Url) -> &mut Self {
        self.inputs.insert(input);
        self
    }

    pub fn add_inputs<I>(&mut self, inputs: I) -> &mut Self
    where
        I: IntoIterator<Item = Url>,
    {
        self.inputs.extend(inputs);
        self
    }

    pub fn output_folder(&mut self, output_folder: impl Into<PathBuf>) -> &mut Self {
        self.output_folder = Some(output_folder.into());
        self
    }

    /// Forces a namespace onto every generated unit. An empty string clears it.
    pub fn override_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.override_package = non_empty(package.into());
        self
    }

    pub fn clear_override_package(&mut self) -> &mut Self {
        self.override_package = None;
        self
    }

    /// Namespace for units that declare none. An empty string clears it.
    pub fn default_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.default_package = non_empty(package.into());
        self
    }

    pub fn clear_default_package(&mut self) -> &mut Self {
        self.default_package = None;
        self
    }

    pub fn add_thrift_exceptions(&mut self, add_thrift_exceptions: bool) -> &mut Self {
        self.add_thrift_exceptions = add_thrift_exceptions;
        self
    }

    pub fn clear_add_thrift_exceptions(&mut self) -> &mut Self {
        self.add_thrift_exceptions(false)
    }

    pub fn generate_included_code(&mut self, generate_included_code: bool) -> &mut Self {
        self.generate_included_code = generate_included_code;
        self
    }

    pub fn set_generate_included_code(&mut self) -> &mut Self {
        self.generate_included_code(true)
    }

    /// Selects the template family. The tag is opaque here and only
    /// interpreted by the generator.
    pub fn code_flavor(&mut self, code_flavor: impl Into<String>) -> &mut Self {
        self.code_flavor = Some(code_flavor.into());
        self
    }

    /// Validates the required fields and freezes the current state.
    ///
    /// Checks run in the order output folder, inputs, input base, code flavor,
    /// and the first unmet one is reported. The returned settings own copies
    /// of everything, so the builder can keep being mutated afterwards
    /// without affecting them.
    #[tracing::instrument(skip_all)]
    pub fn build(&self) -> SettingsResult<GenerationSettings> {
        debug!(inputs = self.inputs.len(), "Validating generation settings");

        let output_folder = require(self.output_folder.as_ref(), MissingField::OutputFolder)?;
        if self.inputs.is_empty() {
            return Err(missing(MissingField::Inputs));
        }
        let input_base = require(self.input_base.as_ref(), MissingField::InputBase)?;
        let code_flavor = require(self.code_flavor.as_ref(), MissingField::CodeFlavor)?;

        let settings = GenerationSettings {
            input_base: input_base.clone(),
            inputs: self.inputs.clone(),
            output_folder: output_folder.clone(),
            override_package: self.override_package.clone(),
            default_package: self.default_package.clone(),
            add_thrift_exceptions: self.add_thrift_exceptions,
            generate_included_code: self.generate_included_code,
            code_flavor: code_flavor.clone(),
        };

        info!(
            inputs = settings.inputs.len(),
            code_flavor = %settings.code_flavor,
            output_folder = ?settings.output_folder,
            "Generation settings built"
        );

        Ok(settings)
    }
}

fn require<T>(value: Option<&T>, field: MissingField) -> SettingsResult<&T> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: MissingField) -> SettingsError {
    error!(field = field.field_name(), "Required generation setting is missing");
    SettingsError::InvalidConfiguration(field)
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
