use crate::ui::mvi::Reducer;
use crate::ui::password::intent::PasswordIntent;
use crate::ui::password::state::{Feedback, FeedbackField, PasswordWidgetState};

pub struct PasswordReducer;

impl Reducer for PasswordReducer {
    type State = PasswordWidgetState;
    type Intent = PasswordIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PasswordIntent::RegenerateStarted => PasswordWidgetState {
                regen: Feedback::Trying,
                regen_epoch: state.regen_epoch + 1,
                ..state
            },
            PasswordIntent::Regenerated { password } => PasswordWidgetState {
                password,
                regen: Feedback::Success,
                ..state
            },
            PasswordIntent::CopyStarted => PasswordWidgetState {
                copy: Feedback::Trying,
                copy_epoch: state.copy_epoch + 1,
                ..state
            },
            PasswordIntent::CopyFinished { ok, epoch } => {
                if epoch != state.copy_epoch {
                    // A newer copy superseded this one; its result is stale.
                    return state;
                }
                PasswordWidgetState {
                    copy: if ok {
                        Feedback::Success
                    } else {
                        Feedback::Failure
                    },
                    ..state
                }
            }
            PasswordIntent::FeedbackElapsed { field, epoch } => {
                if epoch != state.epoch(field) {
                    // Reset scheduled by a superseded action; discard it.
                    return state;
                }
                match field {
                    FeedbackField::Copy => PasswordWidgetState {
                        copy: Feedback::Idle,
                        ..state
                    },
                    FeedbackField::Regen => PasswordWidgetState {
                        regen: Feedback::Idle,
                        ..state
                    },
                }
            }
        }
    }
}
