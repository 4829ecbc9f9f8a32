//! Dialogs of the candidate page. Each one renders from the state value that
//! owns it and reports user intent back as `Msg`s.

mod candidate_form;
mod certificate_selection;
mod delete_confirm;
mod details;
mod preview;

pub use candidate_form::candidate_form_dialog;
pub use certificate_selection::certificate_selection_dialog;
pub use delete_confirm::delete_confirm_dialog;
pub use details::details_dialog;
pub use preview::preview_dialog;
