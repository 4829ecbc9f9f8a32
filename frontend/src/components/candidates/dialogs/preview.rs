use crate::components::candidates::{CandidatesComponent, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::certificate::asset::CertificateOption;
use yew::html::Scope;
use yew::prelude::*;

/// Full-size, non-modal template view. Closing it leaves the selection dialog
/// as it was.
pub fn preview_dialog(
    option: Option<&CertificateOption>,
    link: &Scope<CandidatesComponent>,
) -> Html {
    let Some(option) = option else {
        return html! {};
    };

    html! {
        <YwMaterialTopSheet
            open={true}
            modal={false}
            on_close={link.callback(|_: ()| Msg::ClosePreview)}
        >
            <div class="preview-container">
                <img src={option.image_url.clone()} alt={option.text.clone()} class="preview-image" />
            </div>
        </YwMaterialTopSheet>
    }
}
