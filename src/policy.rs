use crate::options::{CorsOptions, Origins, ValidationError, ValueList};
use crate::origin::OriginPolicy;
use crate::specifier::OriginSpecifier;

/// Canonical per-route policy, built once and reused for every request.
///
/// `methods`/`headers` left at `None` mean "mirror the request": a preflight
/// then answers with the single requested method and the requested header
/// list verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub origins: OriginPolicy,
    pub methods: Option<Vec<String>>,
    pub headers: Option<Vec<String>>,
    pub credentials: bool,
    pub max_age: Option<u64>,
    pub expose_headers: Option<Vec<String>>,
}

impl Policy {
    /// Normalizes raw options into a canonical policy.
    ///
    /// Origins coercion: `false`/absent/empty ⇒ [`OriginPolicy::Disabled`],
    /// `true` or the literal `"*"` ⇒ [`OriginPolicy::AllowAny`], a single
    /// string ⇒ a one-entry allow list, a list ⇒ the allow list as given.
    /// Every allow-list entry must parse as a specifier; a malformed entry
    /// is a setup-time error.
    pub fn resolve(options: CorsOptions) -> Result<Self, ValidationError> {
        let origins = match options.origins {
            Origins::None => OriginPolicy::Disabled,
            Origins::Any => OriginPolicy::AllowAny,
            Origins::One(value) if value.is_empty() => OriginPolicy::Disabled,
            Origins::One(value) if value == "*" => OriginPolicy::AllowAny,
            Origins::One(value) => OriginPolicy::AllowList(vec![value]),
            Origins::List(values) if values.is_empty() => OriginPolicy::Disabled,
            Origins::List(values) => OriginPolicy::AllowList(values),
        };

        if let OriginPolicy::AllowList(entries) = &origins {
            for entry in entries {
                if let Err(reason) = OriginSpecifier::parse(entry) {
                    return Err(ValidationError::InvalidSpecifier {
                        specifier: entry.clone(),
                        reason,
                    });
                }
            }
        }

        Ok(Self {
            origins,
            methods: options.methods.map(ValueList::into_vec),
            headers: options.headers.map(ValueList::into_vec),
            credentials: options.credentials,
            max_age: options.max_age,
            expose_headers: options.expose_headers.map(ValueList::into_vec),
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
