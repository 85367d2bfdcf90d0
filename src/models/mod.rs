pub mod domain;
pub mod session;
pub mod ui_state;

pub use domain::{
    Assignment, AssignmentStatus, Child, Quest, QuestSummary, Reward, SubscriptionStatus,
};
pub use session::{Identity, Role, Session, SessionStore};
pub use ui_state::UiState;
