use crate::ui::mvi::Intent;
use crate::ui::password::state::FeedbackField;

#[derive(Debug, Clone)]
pub enum PasswordIntent {
    /// A regenerate action started. Marks the regen field `Trying` and
    /// opens a new regen epoch.
    RegenerateStarted,
    /// The fresh secret is ready. Generation is synchronous and
    /// infallible, so this lands in the same event-loop turn as
    /// `RegenerateStarted` and always succeeds.
    Regenerated { password: String },
    /// A copy action started. Marks the copy field `Trying` and opens a
    /// new copy epoch.
    CopyStarted,
    /// Result of the clipboard write, tagged with the epoch current when
    /// the copy started. Ignored as stale if a newer copy superseded it.
    CopyFinished { ok: bool, epoch: u64 },
    /// Delayed feedback reset for one field, tagged with the epoch it was
    /// scheduled under. Ignored as stale if a newer action superseded it.
    FeedbackElapsed { field: FeedbackField, epoch: u64 },
}

impl Intent for PasswordIntent {}
