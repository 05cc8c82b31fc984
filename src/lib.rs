pub mod constants;
mod context;
mod cors;
mod headers;
mod options;
mod origin;
mod policy;
mod result;
mod specifier;
mod util;

pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use options::{CorsOptions, Origins, ValidationError, ValueList};
pub use origin::{OriginPolicy, RequestOrigin};
pub use policy::Policy;
pub use result::Decision;
pub use specifier::{OriginSpecifier, SpecifierError};
