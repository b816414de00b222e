//! Service layer for the web log.
//! - `wlog` holds the domain messages and the `TopicStore` seam.
//! - `storage` holds the in-memory store behind that seam.
//! - `errors` holds the error kinds the HTTP layer maps to status codes.

pub mod errors;
pub mod storage;
pub mod wlog;
