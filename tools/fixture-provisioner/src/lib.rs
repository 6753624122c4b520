//! # Fixture Provisioner
//!
//! Creates the DynamoDB rooms table the hotel application reads during
//! acceptance runs. Intended for DynamoDB Local; real endpoints work with real
//! credentials.

pub mod config;
pub mod table;

pub use config::Cli;
pub use table::{create_table, provision, Outcome, ProvisionError, TableDescriptor};
