// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod logging;
pub mod server;
pub mod session;
pub mod storage;
pub mod types;

pub use logging::*;
pub use server::*;
pub use session::*;
pub use storage::*;
pub use types::*;
