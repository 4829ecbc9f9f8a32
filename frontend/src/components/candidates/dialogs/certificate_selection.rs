use crate::components::candidates::{CandidatesComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::certificate::carousel::SelectionSession;
use yew::html::Scope;
use yew::prelude::*;

/// Template carousel. Arrows cycle through the options; only the image source
/// and the label change between renders.
pub fn certificate_selection_dialog(
    session: &SelectionSession,
    link: &Scope<CandidatesComponent>,
) -> Html {
    let option = session.current();

    html! {
        <YwMaterialTopSheet
            open={true}
            title={"Select a Certificate Template".to_string()}
            on_close={link.callback(|_: ()| Msg::CloseDialog)}
        >
            <p class="carousel-candidate">{ format!("For {}", session.candidate().name) }</p>
            <div class="carousel-container">
                <button class="carousel-arrow left" onclick={link.callback(|_| Msg::PreviousTemplate)}>
                    { "❮" }
                </button>
                <div class="carousel-content">
                    <img
                        src={option.image_url.clone()}
                        alt={option.text.clone()}
                        style="max-width: 200px; max-height: 200px;"
                    />
                    <p>{ option.text.clone() }</p>
                    <span class="carousel-position">
                        { format!("{} / {}", session.current_index() + 1, session.len()) }
                    </span>
                </div>
                <button class="carousel-arrow right" onclick={link.callback(|_| Msg::NextTemplate)}>
                    { "❯" }
                </button>
            </div>
            <div class="dialog-actions">
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::PrintSelected)}>
                    {"Print"}
                </button>
                <button class="btn" onclick={link.callback(|_| Msg::OpenPreview)}>{"Preview"}</button>
                <button class="btn" onclick={link.callback(|_| Msg::CloseDialog)}>{"Cancel"}</button>
            </div>
        </YwMaterialTopSheet>
    }
}
