//! Response handling module.
//!
//! [`RawResponse`] is the transport-neutral view of a completed HTTP exchange;
//! [`parse_success`] turns a 2xx response into a validated value.

mod raw;
mod success;

pub use raw::RawResponse;
pub use success::{parse_success, parse_success_untyped};
