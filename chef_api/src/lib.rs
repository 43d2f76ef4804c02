//! A small, blocking client for the parts of the Chef Server API needed to
//! build inventories: configuration discovery, request signing and search.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod api_client;
pub mod authentication;
pub mod credentials;
pub mod errors;
pub mod search;
pub mod utils;

pub use crate::api_client::ApiClient;
pub use crate::credentials::Config;
pub use crate::errors::ChefError;
