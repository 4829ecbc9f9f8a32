//! View rendering for the candidate page: the candidate table, the action
//! buttons of each row, and whichever dialog is currently open.

use super::dialogs::{
    candidate_form_dialog, certificate_selection_dialog, delete_confirm_dialog, details_dialog,
    preview_dialog,
};
use super::messages::Msg;
use super::state::{CandidatesComponent, Dialog};
use common::model::candidate::Candidate;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &CandidatesComponent, ctx: &Context<CandidatesComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="candidates-root">
            <div class="candidates-toolbar">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenAddForm)}>
                    {"Add candidate"}
                </button>
            </div>
            { build_table(component, link) }
            { build_dialog(component, link) }
            { preview_dialog(component.preview.as_ref(), link) }
        </div>
    }
}

fn build_table(component: &CandidatesComponent, link: &Scope<CandidatesComponent>) -> Html {
    if component.candidates.is_empty() {
        return html! { <p class="candidates-empty">{"No candidates yet."}</p> };
    }

    html! {
        <table class="candidates-table">
            <thead>
                <tr>
                    <th>{"ID"}</th>
                    <th>{"Name"}</th>
                    <th>{"Score"}</th>
                    <th>{"Date of birth"}</th>
                    <th>{"Certificate"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.candidates.iter().map(|c| build_row(c, component.printing, link)) }
            </tbody>
        </table>
    }
}

fn build_row(
    candidate: &Candidate,
    printing: Option<i64>,
    link: &Scope<CandidatesComponent>,
) -> Html {
    let id = candidate.id;
    let for_update = candidate.clone();
    let for_delete = candidate.clone();
    let for_print = candidate.clone();
    let busy = printing == Some(id);

    html! {
        <tr key={id.to_string()}>
            <td>{ id.to_string() }</td>
            <td>{ candidate.name.clone() }</td>
            <td>{ candidate.score.to_string() }</td>
            <td>{ candidate.date_naissance.clone() }</td>
            <td>
                {
                    if candidate.is_printed {
                        html! { <span class="badge badge-printed">{"Printed"}</span> }
                    } else {
                        html! { <span class="badge">{"Not printed"}</span> }
                    }
                }
            </td>
            <td class="candidate-actions">
                <button class="btn" onclick={link.callback(move |_| Msg::ShowDetails(id))}>
                    {"Details"}
                </button>
                <button class="btn" onclick={link.callback(move |_| Msg::OpenUpdateForm(for_update.clone()))}>
                    {"Update"}
                </button>
                <button class="btn btn-danger" onclick={link.callback(move |_| Msg::RequestDelete(for_delete.clone()))}>
                    {"Delete"}
                </button>
                <button
                    class="btn btn-primary"
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::OpenCertificateSelection(for_print.clone()))}
                >
                    { if busy { "Printing..." } else { "Print certificate" } }
                </button>
            </td>
        </tr>
    }
}

fn build_dialog(component: &CandidatesComponent, link: &Scope<CandidatesComponent>) -> Html {
    match &component.dialog {
        None => html! {},
        Some(Dialog::AddCandidate(form)) => {
            candidate_form_dialog("Add New Candidate", "Add", form, link)
        }
        Some(Dialog::UpdateCandidate { form, .. }) => {
            candidate_form_dialog("Update Candidate", "Update", form, link)
        }
        Some(Dialog::Details(candidate)) => details_dialog(candidate, link),
        Some(Dialog::ConfirmDelete(candidate)) => delete_confirm_dialog(candidate, link),
        Some(Dialog::SelectCertificate(session)) => certificate_selection_dialog(session, link),
    }
}
