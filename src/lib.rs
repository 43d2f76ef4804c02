//! Ansible dynamic inventory built from Chef Server search results.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;

pub mod errors;
pub mod inventory;
pub mod models;
pub mod registry;

pub use crate::errors::InventoryError;
pub use crate::inventory::{Group, Inventory, Role};
pub use crate::registry::Registry;
