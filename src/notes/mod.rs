pub mod seed;
pub mod store;
pub mod title;
pub mod types;

pub use seed::{default_seeds, SeedNote};
pub use store::NoteStore;
pub use title::derive_title;
pub use types::{Note, NoteSummary};
