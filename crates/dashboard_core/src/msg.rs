use crate::effect::{RequestId, SubmitOutcome};
use crate::list::ListAction;
use crate::state::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a page from the navigation.
    Navigate(Page),
    /// Search box, filter select, pager or row menu of the current list page.
    List(ListAction),
    /// User followed the "add new" link of the current list page.
    AddNewClicked,
    /// User edited a field of the current form.
    FieldChanged { field: String, value: String },
    /// User submitted the current form.
    SubmitClicked,
    /// User cleared the current form.
    ResetClicked,
    /// The submission capability answered a request.
    SubmissionFinished {
        request_id: RequestId,
        outcome: SubmitOutcome,
    },
    /// User closed the notice banner.
    DismissNotice,
}
