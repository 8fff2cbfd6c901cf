mod intent;
mod reducer;
mod state;

pub use intent::PasswordIntent;
pub use reducer::PasswordReducer;
pub use state::{Feedback, FeedbackField, PasswordWidgetState};
