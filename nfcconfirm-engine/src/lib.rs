pub mod engine;
pub mod progress;
pub mod session;
pub mod traits;

pub use engine::{LoginTask, SessionController};
pub use progress::ProgressSignal;
pub use session::{SessionStage, SessionState, SessionStatus};
pub use traits::{LocalIdentityProvider, RecordSource};
