//! Bind environment variables to struct fields, driven by field tags.
//!
//! Tag each field with the variable it reads, derive [`Envstruct`], and call
//! [`load`]:
//!
//! ```ignore
//! use std::time::Duration;
//! use envstruct::Envstruct;
//!
//! #[derive(Envstruct, Debug, Default)]
//! struct AppConfig {
//!     #[env("database_url,required")]
//!     database_url: String,
//!
//!     #[env("port")]
//!     port: u16,
//!
//!     #[env("timeout")]
//!     timeout: Duration,
//!
//!     #[env("allowed_hosts")]
//!     allowed_hosts: Vec<String>,
//! }
//!
//! let mut config = AppConfig { port: 8080, ..AppConfig::default() };
//! envstruct::load(&mut config)?;
//! envstruct::print_report(&config)?;
//! ```
//!
//! The struct is the whole schema. Defaults are whatever the caller puts in
//! the record before loading; a variable that is unset or empty leaves its
//! field alone.
//!
//! # Tags
//!
//! ```text
//! #[env("<KEY>[,required][,noreport]")]
//! ```
//!
//! Segments are split on `,` and trimmed. The key is uppercased before the
//! lookup, so `#[env("port")]` reads `PORT`. Matching against the environment
//! is exact: no prefixes, no namespaces.
//!
//! - **`required`** (second segment): an unset or empty variable fails the
//!   whole load with [`EnvstructError::MissingRequired`].
//! - **`noreport`** (third segment): the field's value is shown as
//!   `<redacted>` in reports. Binding ignores it.
//!
//! Tag parsing never fails. A field without `#[env]` has an empty key and is
//! never bound.
//!
//! # Conversions
//!
//! | Field type | Accepted input |
//! |------------|----------------|
//! | `String` | anything, verbatim |
//! | `bool` | `true` or `1` is true; anything else is false |
//! | `i8`..`i128`, `isize` | base-10 integer within the type's range |
//! | `u8`..`u128`, `usize` | base-10 integer within the type's range |
//! | `Duration` | humantime grammar: `5s`, `2h30m`, `1h 15m` |
//! | `Url` | absolute URL |
//! | `Vec<T>` | comma-separated, each element trimmed and converted as `T` |
//! | `Option<T>` | as `T`, stored as `Some` |
//!
//! The rule is picked by the field's type, not by how it is spelled: an alias
//! such as `type Port = u16` binds as `u16`, and only `std::time::Duration`
//! and `url::Url` get the duration and URL rules. Implementing [`Bindable`]
//! marks a type as convertible. Fields of any other type are left untouched
//! and render as their `Debug` output in reports, or `<unsupported>` without
//! one. That is permissive by
//! default; [`Binder::strict`] turns a set variable on such a field into
//! [`EnvstructError::UnsupportedType`].
//!
//! # Errors
//!
//! Loading stops at the first error, in field order. Fields bound before the
//! error keep their new values, so a record that failed to load is partially
//! bound and should be discarded. See [`EnvstructError`].
//!
//! # Reports
//!
//! [`Report::of`] lists field name, declared type, variable, required flag,
//! and current value. [`write_report`] writes it as an aligned table to any
//! [`std::io::Write`]; [`print_report`] writes to stdout. JSON output is
//! available through [`Report::write_to`] with [`ReportFormat::Json`].
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`EnvArgs`] adds `--env-strict`
//! and `--env-report` flags to your own parser.

// Lets the derive's `::envstruct::` paths resolve inside this crate.
extern crate self as envstruct;

pub mod error;
pub mod types;

#[doc(hidden)]
pub mod __private;

mod binder;
#[cfg(feature = "clap")]
mod cli;
mod convert;
mod env;
mod record;
mod report;
mod tag;

#[cfg(test)]
mod fixtures;

pub use binder::{Binder, load};
#[cfg(feature = "clap")]
pub use cli::EnvArgs;
pub use convert::{FromValue, Value, convert};
pub use envstruct_derive::Envstruct;
pub use error::{ConversionError, EnvstructError};
pub use record::{Bindable, Envstruct, Render};
pub use report::{Report, ReportRow, print_report, write_report};
pub use tag::{Directive, segments};
pub use types::{FieldDescriptor, Kind, ReportFormat, SpecialType};
