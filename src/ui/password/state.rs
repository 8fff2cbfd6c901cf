use crate::ui::mvi::UiState;

/// Transient outcome of a user action.
///
/// Cycles `Idle → Trying → {Success|Failure} → Idle`; the return to `Idle`
/// arrives as a delayed intent. The cycle has no terminal state and is
/// reused for every action on the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Idle,
    Trying,
    Success,
    Failure,
}

/// Names one of the two feedback fields of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Copy,
    Regen,
}

/// State of a single password widget.
///
/// Every widget owns exactly one of these; nothing is shared across
/// widgets. The epoch counters increase once per started action, and every
/// delayed event (copy result, feedback reset) carries the epoch it was
/// scheduled under so a superseded action cannot clobber a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordWidgetState {
    pub password: String,
    pub copy: Feedback,
    pub regen: Feedback,
    pub copy_epoch: u64,
    pub regen_epoch: u64,
}

impl UiState for PasswordWidgetState {}

impl PasswordWidgetState {
    pub fn new(password: String) -> Self {
        Self {
            password,
            ..Default::default()
        }
    }

    /// Current epoch of the named feedback field.
    pub fn epoch(&self, field: FeedbackField) -> u64 {
        match field {
            FeedbackField::Copy => self.copy_epoch,
            FeedbackField::Regen => self.regen_epoch,
        }
    }
}
