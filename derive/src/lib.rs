//! Derive macro for [envstruct](https://docs.rs/envstruct).
//!
//! `#[derive(Envstruct)]` builds the static field table of a struct: one
//! descriptor per named field (name, declared type, raw tag, conversion
//! kind), an index-addressed slot writer, and a value renderer for reports.
//!
//! ```ignore
//! use envstruct::Envstruct;
//!
//! #[derive(Envstruct, Default)]
//! struct Config {
//!     #[env("database_url,required")]
//!     database_url: String,
//!
//!     #[env("port")]
//!     port: u16,
//! }
//! ```
//!
//! The macro never inspects how a field's type is spelled. Kinds, slot writes
//! and report rendering are resolved by the compiler through
//! `envstruct::Bindable`, so aliases bind like the type they name. A type
//! without a `Bindable` impl is recorded as `Kind::Other`, is never written by
//! the binder, and is rendered through `Debug` when it has one and as
//! `<unsupported>` otherwise. No bounds are added to the generated impl.

#![forbid(unsafe_code)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod envstruct;
mod support;

/// Derive the `Envstruct` field table.
///
/// # Field attributes
///
/// - `#[env("KEY")]` or `#[env = "KEY"]` - read variable `KEY` (uppercased)
/// - `#[env("KEY,required")]` - fail when the variable is unset or empty
/// - `#[env("KEY,required,noreport")]` - hide the value in reports
///
/// Fields without `#[env]` get an empty tag and are never bound.
#[proc_macro_derive(Envstruct, attributes(env))]
pub fn derive_envstruct(input: TokenStream) -> TokenStream {
    envstruct::derive(input)
}
