pub mod error;
pub mod preprocess;
pub mod projection;
pub mod query;
pub mod store;

pub use error::{LoadError, QueryError};
pub use projection::{DisplayEntry, DisplayExample, project_example, project_headword};
pub use query::{DEFAULT_SEARCH_LIMIT, by_first_letter, search, sort_by_headword};
pub use store::EntryStore;
