//! Support for `#[derive(Envstruct)]` output. Not a public API.
//!
//! A field's type decides its kind, slot writer and renderer. [`Field`] has
//! inherent items for [`Bindable`] types; every other type falls through to
//! the defaults of [`Unsupported`], which the derive brings into scope. Path
//! resolution prefers an applicable inherent item, so `<Field<T>>::KIND` is
//! `T::KIND` when `T: Bindable` and `Kind::Other` otherwise.
//!
//! Rendering uses autoref dispatch on [`Shown`]: `(&&&Shown(&v)).shown()`
//! picks [`Render`] if implemented, else `Debug`, else `<unsupported>`.

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::convert::Value;
use crate::error::ConversionError;
use crate::record::{Bindable, Render};
use crate::types::Kind;

pub struct Field<T>(PhantomData<T>);

impl<T: Bindable> Field<T> {
    pub const KIND: Kind = T::KIND;

    pub fn assign(slot: &mut T, value: Value) -> Result<(), ConversionError> {
        *slot = T::from_value(value)?;
        Ok(())
    }
}

pub trait Unsupported<T> {
    const KIND: Kind = Kind::Other;

    fn assign(_slot: &mut T, _value: Value) -> Result<(), ConversionError> {
        Ok(())
    }
}

impl<T> Unsupported<T> for Field<T> {}

pub struct Shown<'a, T>(pub &'a T);

pub trait ShowRender {
    fn shown(&self) -> String;
}

impl<T: Render> ShowRender for &&Shown<'_, T> {
    fn shown(&self) -> String {
        self.0.render()
    }
}

pub trait ShowDebug {
    fn shown(&self) -> String;
}

impl<T: Debug> ShowDebug for &Shown<'_, T> {
    fn shown(&self) -> String {
        format!("{:?}", self.0)
    }
}

pub trait ShowOpaque {
    fn shown(&self) -> String;
}

impl<T> ShowOpaque for Shown<'_, T> {
    fn shown(&self) -> String {
        "<unsupported>".to_string()
    }
}
