//! CLI support for generating values from the command line.
//!
//! This module provides parsing and rendering helpers for the
//! `factory-helper` binary. The binary delegates to these functions so they
//! can be exercised in tests without spawning a subprocess.

mod error;

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use ortho_config::OrthoConfig;

pub use self::error::CliError;
use crate::config::GeneratorSettings;
use crate::generator::Generator;

const DEFAULT_COUNT: usize = 1;
const PROGRAM_NAME: &str = "factory-helper";

/// Usage text printed for `--help`.
pub const USAGE: &str = concat!(
    "Usage: factory-helper [options] <target>...\n",
    "\n",
    "Targets:\n",
    "  Category.operation   Run a category operation, e.g. Name.first_name\n",
    "  key                  Render a template key, e.g. address.street_name\n",
    "\n",
    "Options:\n",
    "  --locale <id>        Locale to generate for (defaults to en)\n",
    "  --seed <n>           RNG seed value (defaults to random)\n",
    "  --locales <path>     Directory of <locale>.json bundles\n",
    "  --count <n>          Values per target (defaults to 1)\n",
    "  -h, --help           Print this help output\n",
);

/// What to generate for one command-line target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A category operation such as `Name.first_name`.
    Operation {
        /// Category namespace.
        category: String,
        /// Operation name.
        name: String,
    },
    /// A template key such as `address.street_name`.
    Template {
        /// Dotted key below `factory_helper`.
        key: String,
    },
}

impl Target {
    /// Classifies a raw argument.
    ///
    /// Arguments whose first segment starts with an uppercase letter name a
    /// category operation; everything else is a template key.
    ///
    /// # Example
    ///
    /// ```
    /// use factory_helper::cli::Target;
    ///
    /// assert!(matches!(Target::parse("Name.first_name"), Target::Operation { .. }));
    /// assert!(matches!(Target::parse("name.name"), Target::Template { .. }));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('.') {
            Some((category, name)) if is_namespace(category) && !name.is_empty() => {
                Self::Operation {
                    category: category.to_owned(),
                    name: name.to_owned(),
                }
            }
            _ => Self::Template {
                key: raw.to_owned(),
            },
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operation { category, name } => write!(f, "{category}.{name}"),
            Self::Template { key } => f.write_str(key),
        }
    }
}

/// Parsed options for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    locale: Option<String>,
    seed: Option<u64>,
    locales_path: Option<PathBuf>,
    count: Option<usize>,
    targets: Vec<Target>,
}

impl Options {
    /// Returns the targets in command-line order.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Returns how many values to generate per target.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Layers these options over settings loaded from the environment.
    #[must_use]
    pub fn merge_into(&self, settings: &GeneratorSettings) -> GeneratorSettings {
        GeneratorSettings {
            locale: self
                .locale
                .clone()
                .unwrap_or_else(|| settings.locale.clone()),
            seed: self.seed.or(settings.seed),
            locales_path: self
                .locales_path
                .clone()
                .or_else(|| settings.locales_path.clone()),
        }
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments.
///
/// # Errors
///
/// Returns [`CliError`] when flags are unknown, values are missing or cannot
/// be parsed, or no target is given.
///
/// # Example
///
/// ```
/// use factory_helper::cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--seed".to_string(),
///     "42".to_string(),
///     "Name.first_name".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut locale: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut locales_path: Option<PathBuf> = None;
    let mut count: Option<usize> = None;
    let mut targets = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--locale" => locale = Some(next_value(&mut args, "--locale")?),
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--locales" => {
                let value = next_value(&mut args, "--locales")?;
                locales_path = Some(PathBuf::from(value));
            }
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                count = Some(parse_number(&value, "--count")?);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownArgument {
                    value: flag.to_owned(),
                });
            }
            _ => targets.push(Target::parse(&arg)),
        }
    }

    if targets.is_empty() {
        return Err(CliError::MissingTarget);
    }
    Ok(ParseOutcome::Options(Options {
        locale,
        seed,
        locales_path,
        count,
        targets,
    }))
}

/// Loads generator settings from `FACTORY_HELPER_*` variables and config
/// files.
///
/// # Errors
///
/// Returns [`CliError::Config`] if the settings cannot be loaded.
pub fn load_settings() -> Result<GeneratorSettings, CliError> {
    GeneratorSettings::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| {
        CliError::Config {
            message: err.to_string(),
        }
    })
}

/// Builds the generator described by the options layered over `settings`.
///
/// # Errors
///
/// Returns [`CliError::Locale`] if the locale bundles cannot be loaded.
pub fn build_generator(
    options: &Options,
    settings: &GeneratorSettings,
) -> Result<Generator, CliError> {
    Ok(Generator::from_settings(&options.merge_into(settings))?)
}

/// Generates `count` values for each target, in order.
///
/// # Errors
///
/// Returns [`CliError::Generation`] for the first target that fails.
///
/// # Example
///
/// ```
/// use factory_helper::GeneratorSettings;
/// use factory_helper::cli::{ParseOutcome, build_generator, parse_args, render};
///
/// let args = ["--seed", "7", "--count", "2", "PhoneNumber.phone_number"]
///     .into_iter()
///     .map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args).expect("parse") else {
///     panic!("expected options");
/// };
/// let settings = GeneratorSettings {
///     locale: "en".to_owned(),
///     seed: None,
///     locales_path: None,
/// };
/// let mut generator = build_generator(&options, &settings).expect("generator");
///
/// assert_eq!(render(&mut generator, &options).expect("render").len(), 2);
/// ```
pub fn render(generator: &mut Generator, options: &Options) -> Result<Vec<String>, CliError> {
    let mut lines = Vec::with_capacity(options.targets().len() * options.count());
    for target in options.targets() {
        for _ in 0..options.count() {
            let value = match target {
                Target::Operation { category, name } => generator.call(category, name)?,
                Target::Template { key } => generator.parse(key)?,
            };
            lines.push(value);
        }
    }
    Ok(lines)
}

fn is_namespace(segment: &str) -> bool {
    segment.starts_with(|c: char| c.is_ascii_uppercase())
        && segment.chars().all(|c| c.is_ascii_alphabetic())
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
