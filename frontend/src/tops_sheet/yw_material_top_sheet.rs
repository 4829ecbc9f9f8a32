use uuid::Uuid;
use yew::prelude::*;

/// Overlay container used by every dialog of the candidate page.
///
/// Visibility is driven by the `open` prop, so the owning component's state is
/// the only source of truth for which dialog is showing. A modal sheet covers
/// the page with a backdrop; a non-modal one floats above it.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    #[prop_or(true)]
    pub modal: bool,
    #[prop_or_default]
    pub title: Option<String>,
    /// Shows a close button when set.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let close_button = props.on_close.as_ref().map(|on_close| {
            let on_close = on_close.clone();
            html! {
                <button class="top-sheet-close" title="Close" onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}>
                    { "✕" }
                </button>
            }
        });

        let sheet = html! {
            <div class="top-sheet show" id={self.id.clone()}>
                { close_button }
                {
                    match &props.title {
                        Some(title) => html! { <h2 class="top-sheet-title">{ title.clone() }</h2> },
                        None => html! {},
                    }
                }
                { props.children.clone() }
            </div>
        };

        if props.modal {
            html! { <div class="top-sheet-backdrop">{ sheet }</div> }
        } else {
            html! { <div class="top-sheet-floating">{ sheet }</div> }
        }
    }
}
