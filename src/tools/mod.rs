//! MCP tool implementations.
//!
//! This module contains the handlers behind the exposed tools and resources:
//! - `get_customer_by_name`: Look up customers in MySQL by exact name
//! - `add`: Sum two integers
//! - `calculate_magic_amount`: Product of a list of integers
//! - `greeting://{name}`: Templated greeting resource

pub mod arithmetic;
pub mod customer;
pub mod greeting;

pub use arithmetic::{AddInput, MagicAmountInput};
pub use customer::{CustomerLookupInput, CustomerToolHandler};
