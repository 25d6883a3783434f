//! Library exports for todotron, shared between the binary and tests.

pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod utils;
pub mod validation;
