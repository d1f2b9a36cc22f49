//! Clap adapter for envstruct.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`EnvArgs`]
//! is a clap derive struct you flatten into your own `#[derive(Parser)]` to
//! give users `--env-strict` and `--env-report[=table|json]` flags. It only
//! bridges to the core: [`EnvArgs::binder()`] builds a [`Binder`], and
//! [`EnvArgs::report()`] writes the report if one was requested.

use std::io::Write;

use clap::Args;

use crate::binder::Binder;
use crate::error::EnvstructError;
use crate::record::Envstruct;
use crate::report::Report;
use crate::types::ReportFormat;

/// Clap-derived flags controlling environment binding.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     env: EnvArgs,
/// }
/// ```
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Fail when a set variable targets a field type with no conversion rule.
    #[arg(long = "env-strict")]
    pub strict: bool,

    /// Print the bound environment configuration.
    #[arg(
        long = "env-report",
        value_enum,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "table"
    )]
    pub report: Option<ReportFormat>,
}

impl EnvArgs {
    /// A [`Binder`] over the process environment with these flags applied.
    pub fn binder(&self) -> Binder {
        Binder::new().strict(self.strict)
    }

    /// Write a report of `record` to `sink` if `--env-report` was given.
    ///
    /// Returns whether anything was written.
    pub fn report<T: Envstruct, W: Write>(&self, record: &T, sink: W) -> Result<bool, EnvstructError> {
        let Some(format) = self.report else {
            return Ok(false);
        };
        Report::of(record).write_to(format, sink)?;
        Ok(true)
    }
}
