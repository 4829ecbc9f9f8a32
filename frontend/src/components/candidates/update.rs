//! Update function for the candidate page.
//!
//! Elm-style: mutate `component` for `msg`, spawn network or print work with
//! `spawn_local`, and return whether the view should re-render.
//!
//! Writes never touch the local list. A successful create, update or delete
//! triggers `Msg::Refresh`; a failed one only notifies (see `write_outcome`).
//! The single local patch is the printed flag, flipped when the print
//! dispatcher reports success.

use common::certificate::carousel::SelectionSession;
use common::certificate::compositor::compose;
use common::certificate::print::dispatch;
use common::requests::CandidateForm;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::api::{candidates, certificate_templates};
use crate::print::BrowserWindowHost;

use super::helpers::{mark_printed, show_toast, today_short_date, write_outcome, WriteOutcome};
use super::messages::Msg;
use super::state::{CandidatesComponent, Dialog};

pub fn update(
    component: &mut CandidatesComponent,
    ctx: &Context<CandidatesComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match candidates::list().await {
                    Ok(list) => {
                        log!(format!("Received {} candidates", list.len()));
                        link.send_message(Msg::CandidatesLoaded(list));
                    }
                    Err(err) => {
                        error!(format!("Error fetching candidates: {}", err));
                        show_toast("Unable to load candidates.");
                    }
                }
            });
            false
        }
        Msg::CandidatesLoaded(list) => {
            component.candidates = list;
            true
        }
        Msg::LoadTemplates => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match certificate_templates::list().await {
                    Ok(templates) => link.send_message(Msg::TemplatesLoaded(templates)),
                    Err(err) => {
                        error!(format!("Error fetching certificates: {}", err));
                        show_toast("Unable to load certificate templates.");
                    }
                }
            });
            false
        }
        Msg::TemplatesLoaded(templates) => {
            component.templates = templates;
            false
        }

        Msg::OpenAddForm => {
            component.dialog = Some(Dialog::AddCandidate(CandidateForm::default()));
            true
        }
        Msg::OpenUpdateForm(candidate) => {
            component.dialog = Some(Dialog::UpdateCandidate {
                id: candidate.id,
                form: CandidateForm::from(&candidate),
            });
            true
        }
        Msg::EditForm(field, value) => {
            if let Some(form) = component.form_mut() {
                form.set(field, value);
            }
            false
        }
        Msg::SubmitForm => submit_form(component, ctx),

        Msg::ShowDetails(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match candidates::get_by_id(id).await {
                    Ok(candidate) => link.send_message(Msg::DetailsLoaded(candidate)),
                    Err(err) => {
                        error!(format!("Error fetching candidate {}: {}", id, err));
                        show_toast("Unable to fetch the candidate details.");
                    }
                }
            });
            false
        }
        Msg::DetailsLoaded(candidate) => {
            component.dialog = Some(Dialog::Details(candidate));
            true
        }

        Msg::RequestDelete(candidate) => {
            component.dialog = Some(Dialog::ConfirmDelete(candidate));
            true
        }
        Msg::ConfirmDelete => {
            let Some(candidate) = component.take_dialog(|dialog| match dialog {
                Dialog::ConfirmDelete(candidate) => Ok(candidate),
                other => Err(other),
            }) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = candidates::delete(candidate.id).await;
                match &result {
                    Ok(()) => log!(format!("Deleted candidate {}", candidate.id)),
                    Err(err) => {
                        error!(format!("Error deleting candidate {}: {}", candidate.id, err))
                    }
                }
                finish_write(
                    &link,
                    write_outcome(
                        &result,
                        "The candidate has been deleted.",
                        "An error occurred while deleting:",
                    ),
                );
            });
            true
        }

        Msg::CloseDialog => {
            component.dialog = None;
            component.preview = None;
            true
        }

        Msg::OpenCertificateSelection(candidate) => {
            let options = component.resolver.options(&component.templates);
            match SelectionSession::open(candidate, options) {
                Ok(session) => {
                    component.dialog = Some(Dialog::SelectCertificate(session));
                    true
                }
                Err(err) => {
                    show_toast(&err.to_string());
                    false
                }
            }
        }
        Msg::PreviousTemplate => match component.session_mut() {
            Some(session) => {
                session.previous();
                true
            }
            None => false,
        },
        Msg::NextTemplate => match component.session_mut() {
            Some(session) => {
                session.next();
                true
            }
            None => false,
        },
        Msg::OpenPreview => {
            component.preview = component.session().map(SelectionSession::preview);
            true
        }
        Msg::ClosePreview => {
            component.preview = None;
            true
        }
        Msg::PrintSelected => print_selected(component, ctx),
        Msg::PrintFinished(result) => {
            component.printing = None;
            match result {
                Ok(candidate) => {
                    log!(format!("Certificate printed for candidate {}", candidate.id));
                    mark_printed(&mut component.candidates, candidate.id);
                }
                Err(err) => {
                    error!(format!("Printing failed: {}", err));
                    show_toast(&err.to_string());
                }
            }
            true
        }
    }
}

/// Applies the result of a create, update or delete. Only a successful write
/// reloads the list; a failed one just notifies.
fn finish_write(link: &Scope<CandidatesComponent>, outcome: WriteOutcome) {
    match outcome {
        WriteOutcome::Reload(message) => {
            link.send_message(Msg::Refresh);
            show_toast(&message);
        }
        WriteOutcome::Notify(message) => show_toast(&message),
    }
}

/// Validates the open add/update form and sends it. Invalid input keeps the
/// dialog open and issues no request.
fn submit_form(component: &mut CandidatesComponent, ctx: &Context<CandidatesComponent>) -> bool {
    let (id, form) = match &component.dialog {
        Some(Dialog::AddCandidate(form)) => (None, form),
        Some(Dialog::UpdateCandidate { id, form }) => (Some(*id), form),
        _ => return false,
    };

    let request = match form.validate() {
        Ok(request) => request,
        Err(err) => {
            show_toast(&err.to_string());
            return false;
        }
    };
    component.dialog = None;

    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = match id {
            None => {
                let result = candidates::create(&request).await;
                match &result {
                    Ok(created) => log!(format!("New candidate added: {}", created.id)),
                    Err(err) => error!(format!("Error adding new candidate: {}", err)),
                }
                write_outcome(
                    &result,
                    "New candidate added successfully.",
                    "Failed to add new candidate:",
                )
            }
            Some(id) => {
                let result = candidates::update(id, &request).await;
                match &result {
                    Ok(updated) => log!(format!("Candidate updated: {}", updated.id)),
                    Err(err) => error!(format!("Error updating candidate {}: {}", id, err)),
                }
                write_outcome(
                    &result,
                    "The candidate has been updated.",
                    "Unable to update the candidate:",
                )
            }
        };
        finish_write(&link, outcome);
    });
    true
}

/// Confirms the selection session, composes the certificate and hands it to a
/// new browser window. The session is consumed; the preview goes with it.
fn print_selected(component: &mut CandidatesComponent, ctx: &Context<CandidatesComponent>) -> bool {
    let Some(session) = component.take_dialog(|dialog| match dialog {
        Dialog::SelectCertificate(session) => Ok(session),
        other => Err(other),
    }) else {
        return false;
    };
    component.preview = None;

    let selection = session.confirm();
    let document = compose(
        &selection.candidate,
        &selection.option.image_url,
        &today_short_date(),
    );
    component.printing = Some(selection.candidate.id);

    let link = ctx.link().clone();
    let mut candidate = selection.candidate;
    spawn_local(async move {
        let result = dispatch(&BrowserWindowHost, &document, &mut candidate).await;
        link.send_message(Msg::PrintFinished(result.map(|()| candidate)));
    });
    true
}
