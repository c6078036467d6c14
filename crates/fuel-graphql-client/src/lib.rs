//! A typed GraphQL client for Fuel nodes.
//!
//! Queries are generated from the declared types: each request selects every field of the
//! returned type except those removed by a [`Suppression`](graphql_selection::Suppression)
//! built from the call options.
//!
//! ```no_run
//! # async fn run() -> Result<(), fuel_graphql_client::Error> {
//! use fuel_graphql_client::{Client, GetBlockOptions, QueryBlockParams};
//!
//! let client = Client::new("https://beta-5.fuel.network/graphql".parse().unwrap())?;
//! let options = GetBlockOptions {
//!     with_transactions: true,
//!     transaction_only_id: true,
//!     ..Default::default()
//! };
//!
//! if let Some(block) = client.get_block(&QueryBlockParams::by_height(9758550), options).await? {
//!     println!("{} has {} transactions", block.id, block.transactions.len());
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod block;
mod chain;
mod client;
mod config;
mod error;
pub mod scalars;
mod transaction;
pub mod types;

pub use block::GetBlockOptions;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, QueryError, QueryErrorLocation, QueryErrors, ScalarError};
pub use graphql_selection;
pub use transaction::GetTransactionOptions;
pub use types::{QueryBlockParams, QueryTransactionParams};
