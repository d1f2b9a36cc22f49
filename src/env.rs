use std::collections::HashMap;

/// Where the binder reads variables from.
#[derive(Debug, Clone, Default)]
pub(crate) enum Environment {
    /// The process environment.
    #[default]
    Process,
    /// A fixed set of variables, so tests can pass synthetic data instead of
    /// `std::env::vars()`.
    Vars(HashMap<String, String>),
}

impl Environment {
    pub(crate) fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Environment::Vars(vars.into_iter().collect())
    }

    /// Resolve `key` by exact match. Absence reads as `""`.
    ///
    /// An empty key resolves to `""` without consulting the environment.
    /// Values that are not valid Unicode are converted lossily.
    pub(crate) fn lookup(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        match self {
            Environment::Process => std::env::var_os(key)
                .map(|v| v.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Environment::Vars(vars) => vars.get(key).cloned().unwrap_or_default(),
        }
    }
}
