//! End-to-end suite against a mock Affinity server.
//!
//! Run with:
//!   cargo test --test integration

#[path = "integration/common.rs"]
mod common;
#[path = "integration/lists.rs"]
mod lists;
#[path = "integration/records.rs"]
mod records;
#[path = "integration/errors.rs"]
mod errors;
