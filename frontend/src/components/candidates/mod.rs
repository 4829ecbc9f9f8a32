//! Candidate administration page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view and dialogs.
//!
//! On first render the candidate list and the certificate template catalog are
//! fetched. The catalog is kept for the lifetime of the page.

use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CandidatesComponent;

impl Component for CandidatesComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CandidatesComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link()
                .send_message_batch(vec![Msg::Refresh, Msg::LoadTemplates]);
        }
    }
}
