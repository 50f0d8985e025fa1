//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL product and category stores using Diesel.
//! - **storage**: the upload directory behind a capability handle.

pub mod persistence;
pub mod storage;
