//! Value objects nested inside an API record. The same types are used at the
//! presentation, domain and data boundaries because none of them adds or
//! derives anything for these parts of a record.

pub mod dependencies;
pub mod environments;
pub mod other_documentation;
pub mod status;

pub use dependencies::{Dependencies, DependencyApi, DependencyDatabase, DependencyScript, Endpoint};
pub use environments::Environments;
pub use other_documentation::OtherDocumentation;
pub use status::ApiStatus;
