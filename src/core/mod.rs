//! Catalog state and the operations that change it.
//!
//! - Store: ordered documents and the id counter
//! - Commands: validated add/rename/remove on top of the store

pub mod commands;
pub mod store;

pub use commands::{
    AddRequest, CommandError, RemoveOutcome, RenameOutcome, ValidationError,
};
pub use store::{DocumentStore, StoreError};
