pub mod bank;
pub mod session;
pub mod store;
pub mod summary;

pub use bank::{resolve, QuestionRecord};
pub use session::{QuizSession, SessionError};
pub use store::SessionStore;
pub use summary::{summarize, ResultSummary};
