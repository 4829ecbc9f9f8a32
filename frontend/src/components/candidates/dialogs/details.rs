use crate::components::candidates::{CandidatesComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::model::candidate::Candidate;
use yew::html::Scope;
use yew::prelude::*;

pub fn details_dialog(candidate: &Candidate, link: &Scope<CandidatesComponent>) -> Html {
    html! {
        <YwMaterialTopSheet
            open={true}
            title={"Candidate details".to_string()}
            on_close={link.callback(|_: ()| Msg::CloseDialog)}
        >
            <dl class="candidate-details">
                <dt>{"ID"}</dt>
                <dd>{ candidate.id.to_string() }</dd>
                <dt>{"Name"}</dt>
                <dd>{ candidate.name.clone() }</dd>
                <dt>{"Score"}</dt>
                <dd>{ candidate.score.to_string() }</dd>
                <dt>{"Date of birth"}</dt>
                <dd>{ candidate.date_naissance.clone() }</dd>
                <dt>{"Certificate"}</dt>
                <dd>{ if candidate.is_printed { "Printed" } else { "Not printed" } }</dd>
            </dl>
            <div class="dialog-actions">
                <button class="btn" onclick={link.callback(|_| Msg::CloseDialog)}>{"Close"}</button>
            </div>
        </YwMaterialTopSheet>
    }
}
