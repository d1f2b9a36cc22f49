//! The field table a record exposes to the binder and the report.

use std::time::Duration;

use url::Url;

use crate::convert::{FromValue, Value};
use crate::error::ConversionError;
use crate::types::{FieldDescriptor, Kind, SpecialType};

/// A struct whose fields can be bound from the environment.
///
/// Implemented by `#[derive(Envstruct)]`. Field indices are positions in
/// [`FIELDS`](Self::FIELDS), which lists fields in declaration order.
pub trait Envstruct {
    const FIELDS: &'static [FieldDescriptor];

    /// Write a converted value into the field at `index`.
    ///
    /// Fields of [`Kind::Other`](crate::Kind::Other) and out-of-range indices
    /// are left untouched.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), ConversionError>;

    /// The current value of the field at `index`, formatted for a report.
    fn render_field(&self, index: usize) -> String;
}

/// A field type with a conversion rule.
///
/// The derive reads [`KIND`](Self::KIND) through the type itself, so aliases
/// such as `type Port = u16` bind like the type they name, and a foreign type
/// that happens to be called `Duration` is not mistaken for
/// [`std::time::Duration`]. Field types without an impl are
/// [`Kind::Other`].
pub trait Bindable: FromValue + Render {
    const KIND: Kind;
}

macro_rules! bindable {
    ($kind:expr => $($ty:ty),+) => {
        $(
            impl Bindable for $ty {
                const KIND: Kind = $kind;
            }
        )+
    };
}

bindable!(Kind::Text => String);
bindable!(Kind::Bool => bool);
bindable!(Kind::Signed => i8, i16, i32, i64, i128, isize);
bindable!(Kind::Unsigned => u8, u16, u32, u64, u128, usize);
bindable!(Kind::Special(SpecialType::Duration) => Duration);
bindable!(Kind::Special(SpecialType::Url) => Url);

impl<T: Bindable> Bindable for Vec<T> {
    const KIND: Kind = Kind::Seq(&T::KIND);
}

impl<T: Bindable> Bindable for Option<T> {
    const KIND: Kind = Kind::Optional(&T::KIND);
}

/// Report formatting for bindable field types.
pub trait Render {
    fn render(&self) -> String;
}

macro_rules! render_display {
    ($($ty:ty),+) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

render_display!(String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Render for Duration {
    fn render(&self) -> String {
        humantime::format_duration(*self).to_string()
    }
}

impl Render for Url {
    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Render::render).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(v) => v.render(),
            None => "<not set>".to_string(),
        }
    }
}
