use crate::error::CliError;
use clap::Parser;
use std::path::{Path, PathBuf};
use swivel_config::prelude::*;
use tracing::debug;
use url::ParseError;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base location used to resolve relative inputs and includes.
    ///
    /// Accepts a URL or a directory path. Defaults to the current directory.
    #[arg(long, value_name = "URL")]
    pub input_base: Option<String>,

    /// IDL files to generate code for, as URLs or paths relative to the input base
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Path to a directory where generated sources will be written
    #[arg(short, long)]
    pub output: PathBuf,

    /// Namespace forced onto every generated unit, ignoring the one declared in the IDL
    #[arg(long, value_name = "NAMESPACE")]
    pub override_package: Option<String>,

    /// Namespace used for IDL units that do not declare one
    #[arg(long, value_name = "NAMESPACE")]
    pub default_package: Option<String>,

    /// Do not declare the transport exception on generated service methods
    #[arg(long)]
    pub no_thrift_exceptions: bool,

    /// Generate code for included IDL files instead of only referencing them
    #[arg(long)]
    pub generate_included_code: bool,

    /// Template family used by the generator (e.g. java-regular, java-immutable, java-ctor)
    #[arg(short, long, default_value = "java-regular")]
    pub flavor: String,
}

impl Cli {
    /// Maps every flag onto a [`SettingsBuilder`] and freezes the result.
    pub fn into_settings(self) -> Result<GenerationSettings, CliError> {
        let input_base = match &self.input_base {
            Some(input_base) => parse_base(input_base)?,
            None => directory_url(&std::env::current_dir()?)?,
        };
        debug!(%input_base, "Resolved input base");

        let inputs = self
            .inputs
            .iter()
            .map(|input| resolve_input(&input_base, input))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = GenerationSettings::builder();
        builder
            .input_base(input_base)
            .add_inputs(inputs)
            .output_folder(self.output)
            .add_thrift_exceptions(!self.no_thrift_exceptions)
            .generate_included_code(self.generate_included_code)
            .code_flavor(self.flavor);

        if let Some(package) = self.override_package {
            builder.override_package(package);
        }
        if let Some(package) = self.default_package {
            builder.default_package(package);
        }

        Ok(builder.build()?)
    }
}

/// Parses an input location, joining it onto `base` when it is relative.
pub fn resolve_input(base: &Url, input: &str) -> Result<Url, CliError> {
    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            base.join(input).map_err(|error| invalid_location(input, error))
        }
        Err(error) => Err(invalid_location(input, error)),
    }
}

/// Accepts either a URL or a local directory for the input base.
fn parse_base(input_base: &str) -> Result<Url, CliError> {
    match Url::parse(input_base) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let path = std::path::absolute(input_base)?;
            directory_url(&path)
        }
        Err(error) => Err(invalid_location(input_base, error)),
    }
}

fn directory_url(path: &Path) -> Result<Url, CliError> {
    Url::from_directory_path(path)
        .map_err(|()| CliError::InvalidWorkingDirectory(path.to_string_lossy().to_string()))
}

fn invalid_location(location: &str, error: ParseError) -> CliError {
    CliError::InvalidLocation {
        location: location.to_owned(),
        reason: error.to_string(),
    }
}

/// Human-readable summary of the frozen settings.
pub fn describe(settings: &GenerationSettings) -> String {
    let mut lines = vec![
        format!("input base:             {}", settings.input_base()),
        format!("output folder:          {}", settings.output_folder().display()),
        format!("code flavor:            {}", settings.code_flavor()),
        format!(
            "override package:       {}",
            settings.override_package().unwrap_or("-")
        ),
        format!(
            "default package:        {}",
            settings.default_package().unwrap_or("-")
        ),
        format!(
            "thrift exceptions:      {}",
            settings.is_add_thrift_exceptions()
        ),
        format!(
            "generate included code: {}",
            settings.is_generate_included_code()
        ),
        format!("inputs ({}):", settings.inputs().len()),
    ];
    lines.extend(settings.inputs().iter().map(|input| format!("  {input}")));

    lines.join("\n")
}
