pub mod credentials;
pub mod session;
pub mod task;
pub mod token;

pub use credentials::Credentials;
pub use session::{AuthStatus, SessionState};
pub use task::{Task, TaskId, TaskText};
pub use token::Token;
