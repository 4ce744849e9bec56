// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod record;
pub mod identity;
pub mod collection;
pub mod store;
pub mod derive;
pub mod heuristics;
pub mod compare;
pub mod csv;
pub mod export;
pub mod file;
pub mod fetch;
pub mod progress;
pub mod app;

#[cfg(feature = "cli")]
pub mod cli;

pub use app::App;
pub use collection::SavedCollection;
pub use identity::IdentityKey;
pub use record::CollegeRecord;
