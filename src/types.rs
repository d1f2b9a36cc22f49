//! Field metadata shared by the binder, the conversion table, and reports.
//!
//! A record's shape is described by a static slice of [`FieldDescriptor`]s,
//! one per field in declaration order. `#[derive(Envstruct)]` generates the
//! slice; nothing is inspected at runtime.
//!
//! The declared type of each field is reduced to a [`Kind`], which is what the
//! conversion table dispatches on. Dispatch is two-tier:
//!
//! 1. **Named special types** ([`SpecialType`]) are recognized by exact type
//!    identity (`Duration`, `Url`) and get a dedicated parser.
//! 2. Everything else goes by **structural kind**: text, boolean, signed or
//!    unsigned integer, sequence, optional.
//!
//! A type's kind comes from its [`Bindable`](crate::Bindable) impl. Types
//! without one are [`Kind::Other`] and are left alone by the binder (or
//! rejected, in strict mode).

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub name: &'static str,
    /// The declared type as written in the struct.
    pub type_name: &'static str,
    /// Raw tag string from `#[env("...")]`, empty when absent.
    pub tag: &'static str,
    /// Conversion category of the declared type.
    pub kind: Kind,
}

/// Conversion category of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Matched by exact type identity, ahead of structural dispatch.
    Special(SpecialType),
    /// `String`
    Text,
    /// `bool`
    Bool,
    /// `i8` through `i128`, `isize`
    Signed,
    /// `u8` through `u128`, `usize`
    Unsigned,
    /// `Vec<T>`: comma-separated, each element converted as `T`.
    Seq(&'static Kind),
    /// `Option<T>`: converted as `T` and stored as `Some`.
    Optional(&'static Kind),
    /// No conversion rule.
    Other,
}

/// Types with a dedicated parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialType {
    /// `std::time::Duration`, parsed with `humantime` (`"5s"`, `"2h30m"`).
    Duration,
    /// `url::Url`, parsed as an absolute URL.
    Url,
}

impl Kind {
    /// Whether the conversion table has a rule for this kind, all the way down.
    pub fn is_supported(&self) -> bool {
        match self {
            Kind::Seq(inner) | Kind::Optional(inner) => inner.is_supported(),
            Kind::Other => false,
            _ => true,
        }
    }
}

/// Output format for a [`Report`](crate::Report).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    /// Aligned, human-readable table.
    #[default]
    Table,
    /// One JSON array of rows.
    Json,
}
