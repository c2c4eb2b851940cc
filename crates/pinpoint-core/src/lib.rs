pub mod alias;
pub mod config;
pub mod error;
pub mod field;
pub mod resolver;
pub mod selector;
pub mod session;

pub use alias::AliasTable;
pub use config::{ConfigError, ConfigLoader, ResolverConfig};
pub use error::ResolveError;
pub use field::{FieldKind, Target};
pub use resolver::{FieldResolver, Resolver};
pub use selector::{DEFAULT_PREFIX, Scope};
pub use session::{Element, Locator, Session, SessionError};
