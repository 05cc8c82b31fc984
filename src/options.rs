use crate::specifier::SpecifierError;
use crate::util::split_list;
use thiserror::Error;

/// Raw configuration accepted by [`Cors::new`](crate::Cors::new).
///
/// The configuration surface mirrors the overloaded shapes the system
/// accepts: a bare `bool`, a single specifier string or a list of them all
/// convert into a `CorsOptions` acting as the `origins` shorthand, while the
/// struct form exposes every field. Defaults: `credentials` enabled, every
/// other field absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsOptions {
    pub origins: Origins,
    pub methods: Option<ValueList>,
    pub headers: Option<ValueList>,
    pub credentials: bool,
    pub max_age: Option<u64>,
    pub expose_headers: Option<ValueList>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: Origins::None,
            methods: None,
            headers: None,
            credentials: true,
            max_age: None,
            expose_headers: None,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<O: Into<Origins>>(mut self, origins: O) -> Self {
        self.origins = origins.into();
        self
    }

    pub fn methods<V: Into<ValueList>>(mut self, methods: V) -> Self {
        self.methods = Some(methods.into());
        self
    }

    pub fn headers<V: Into<ValueList>>(mut self, headers: V) -> Self {
        self.headers = Some(headers.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn expose_headers<V: Into<ValueList>>(mut self, headers: V) -> Self {
        self.expose_headers = Some(headers.into());
        self
    }
}

/// The `origins` field before resolution.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Origins {
    /// Cross-origin requests are refused outright.
    #[default]
    None,
    /// Every origin is acceptable.
    Any,
    /// A single specifier string.
    One(String),
    /// An ordered list of specifier strings.
    List(Vec<String>),
}

impl From<bool> for Origins {
    fn from(value: bool) -> Self {
        if value { Origins::Any } else { Origins::None }
    }
}

impl From<&str> for Origins {
    fn from(value: &str) -> Self {
        Origins::One(value.to_string())
    }
}

impl From<String> for Origins {
    fn from(value: String) -> Self {
        Origins::One(value)
    }
}

impl From<Vec<String>> for Origins {
    fn from(values: Vec<String>) -> Self {
        Origins::List(values)
    }
}

impl From<Vec<&str>> for Origins {
    fn from(values: Vec<&str>) -> Self {
        Origins::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Origins {
    fn from(values: [&str; N]) -> Self {
        Origins::List(values.iter().map(|value| value.to_string()).collect())
    }
}

/// A field that accepts either one comma-separated string or an explicit
/// list, matching the `string | string[]` overloads of the configuration
/// surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueList {
    One(String),
    Many(Vec<String>),
}

impl ValueList {
    /// Collapses into a plain list; the single-string form is split on
    /// commas with surrounding whitespace trimmed.
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            ValueList::One(value) => split_list(&value).map(str::to_string).collect(),
            ValueList::Many(values) => values,
        }
    }
}

impl From<&str> for ValueList {
    fn from(value: &str) -> Self {
        ValueList::One(value.to_string())
    }
}

impl From<String> for ValueList {
    fn from(value: String) -> Self {
        ValueList::One(value)
    }
}

impl From<Vec<String>> for ValueList {
    fn from(values: Vec<String>) -> Self {
        ValueList::Many(values)
    }
}

impl From<Vec<&str>> for ValueList {
    fn from(values: Vec<&str>) -> Self {
        ValueList::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ValueList {
    fn from(values: [&str; N]) -> Self {
        ValueList::Many(values.iter().map(|value| value.to_string()).collect())
    }
}

impl From<Origins> for CorsOptions {
    fn from(origins: Origins) -> Self {
        Self {
            origins,
            ..Self::default()
        }
    }
}

impl From<bool> for CorsOptions {
    fn from(value: bool) -> Self {
        Origins::from(value).into()
    }
}

impl From<&str> for CorsOptions {
    fn from(value: &str) -> Self {
        Origins::from(value).into()
    }
}

impl From<String> for CorsOptions {
    fn from(value: String) -> Self {
        Origins::from(value).into()
    }
}

impl From<Vec<String>> for CorsOptions {
    fn from(values: Vec<String>) -> Self {
        Origins::from(values).into()
    }
}

impl From<Vec<&str>> for CorsOptions {
    fn from(values: Vec<&str>) -> Self {
        Origins::from(values).into()
    }
}

impl<const N: usize> From<[&str; N]> for CorsOptions {
    fn from(values: [&str; N]) -> Self {
        Origins::from(values).into()
    }
}

/// Structurally invalid configuration, raised once at setup and never per
/// request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("origin specifier `{specifier}` is invalid: {reason}")]
    InvalidSpecifier {
        specifier: String,
        reason: SpecifierError,
    },
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
