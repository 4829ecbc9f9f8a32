use crate::components::candidates::{CandidatesComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::requests::{CandidateForm, FormField};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

/// Add/update form. Input is kept raw in the `CandidateForm`; validation runs
/// on submit.
pub fn candidate_form_dialog(
    title: &str,
    submit_label: &'static str,
    form: &CandidateForm,
    link: &Scope<CandidatesComponent>,
) -> Html {
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitForm
    });

    html! {
        <YwMaterialTopSheet
            open={true}
            title={title.to_string()}
            on_close={link.callback(|_: ()| Msg::CloseDialog)}
        >
            <form class="candidate-form" onsubmit={on_submit}>
                { input(link, FormField::Name, "Name", "text", &form.name) }
                { input(link, FormField::Score, "Score", "text", &form.score) }
                { input(link, FormField::DateNaissance, "Date of birth", "date", &form.date_naissance) }
                <div class="dialog-actions">
                    <button type="submit" class="btn btn-primary">{ submit_label }</button>
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseDialog)}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </YwMaterialTopSheet>
    }
}

fn input(
    link: &Scope<CandidatesComponent>,
    field: FormField,
    placeholder: &'static str,
    kind: &'static str,
    value: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditForm(field, input.value())
    });

    html! {
        <label class="form-field">
            <span>{ placeholder }</span>
            <input
                class="form-input"
                type={kind}
                placeholder={placeholder}
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}
