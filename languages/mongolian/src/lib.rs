pub mod alphabet;
pub mod loader;
pub mod seed;

pub use alphabet::{CYRILLIC_ALPHABET, TRADITIONAL_ALPHABET, alphabet};
pub use loader::EntryLoader;
pub use seed::{load_additional, seed_store};
