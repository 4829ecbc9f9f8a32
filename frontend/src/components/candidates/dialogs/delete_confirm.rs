use crate::components::candidates::{CandidatesComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::model::candidate::Candidate;
use yew::html::Scope;
use yew::prelude::*;

/// Nothing is sent to the service until the operator confirms.
pub fn delete_confirm_dialog(candidate: &Candidate, link: &Scope<CandidatesComponent>) -> Html {
    html! {
        <YwMaterialTopSheet
            open={true}
            title={"Are you sure?".to_string()}
            on_close={link.callback(|_: ()| Msg::CloseDialog)}
        >
            <p>{ format!("Delete {}? This action cannot be undone.", candidate.name) }</p>
            <div class="dialog-actions">
                <button class="btn btn-danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                    {"Yes, delete"}
                </button>
                <button class="btn" onclick={link.callback(|_| Msg::CloseDialog)}>{"Cancel"}</button>
            </div>
        </YwMaterialTopSheet>
    }
}
