use tracing::debug;

use crate::convert;
use crate::env::Environment;
use crate::error::EnvstructError;
use crate::record::Envstruct;
use crate::tag::Directive;

/// Bind environment variables into `record` using the process environment.
///
/// Shorthand for `Binder::new().load(record)`.
pub fn load<T: Envstruct>(record: &mut T) -> Result<(), EnvstructError> {
    Binder::new().load(record)
}

/// Configurable bind pass.
///
/// ```ignore
/// let mut config = AppConfig::default();
/// Binder::new().strict(true).load(&mut config)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binder {
    env: Environment,
    strict: bool,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict mode (default: `false`).
    ///
    /// In strict mode a present variable whose field type has no conversion
    /// rule fails with [`EnvstructError::UnsupportedType`]. Otherwise such
    /// fields are silently left unmodified.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Read from a fixed set of variables instead of the process environment.
    pub fn vars(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        self.env = Environment::from_vars(vars);
        self
    }

    /// Bind every field of `record`, in declaration order.
    ///
    /// Stops at the first error. Fields bound before the failing one keep
    /// their new values, so on error the record is partially bound and should
    /// be discarded. A single field is only written once its whole value has
    /// converted.
    pub fn load<T: Envstruct>(&self, record: &mut T) -> Result<(), EnvstructError> {
        for (index, field) in T::FIELDS.iter().enumerate() {
            let directive = Directive::parse(field.tag);
            let key = directive.lookup_key;
            let raw = self.env.lookup(&key);

            if raw.is_empty() {
                if directive.required {
                    return Err(EnvstructError::MissingRequired { key });
                }
                debug!(field = field.name, key = %key, "variable not set, keeping default");
                continue;
            }

            let converted = convert::convert(&field.kind, &raw).map_err(|source| {
                EnvstructError::Conversion {
                    field: field.name,
                    key: key.clone(),
                    source,
                }
            })?;

            let Some(value) = converted else {
                if self.strict {
                    return Err(EnvstructError::UnsupportedType {
                        field: field.name,
                        type_name: field.type_name,
                    });
                }
                debug!(field = field.name, type_name = field.type_name, "no conversion rule, skipping");
                continue;
            };

            record
                .assign(index, value)
                .map_err(|source| EnvstructError::Conversion {
                    field: field.name,
                    key: key.clone(),
                    source,
                })?;
            debug!(field = field.name, key = %key, "bound");
        }

        Ok(())
    }
}
