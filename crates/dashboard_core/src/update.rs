use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate(page) => {
            state.navigate(page);
            Vec::new()
        }
        Msg::List(action) => state.apply_list_action(action),
        Msg::AddNewClicked => {
            state.add_new();
            Vec::new()
        }
        Msg::FieldChanged { field, value } => {
            state.set_field(&field, value);
            Vec::new()
        }
        Msg::SubmitClicked => state.submit_form(),
        Msg::ResetClicked => {
            state.reset_form();
            Vec::new()
        }
        Msg::SubmissionFinished {
            request_id,
            outcome,
        } => {
            state.finish_submission(request_id, outcome);
            Vec::new()
        }
        Msg::DismissNotice => {
            state.dismiss_notice();
            Vec::new()
        }
    };

    (state, effects)
}
