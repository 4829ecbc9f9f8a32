//! Component state for the candidate page.
//!
//! The open dialog is an explicit [`Dialog`] value rather than a shared widget:
//! each variant carries exactly the data its dialog edits or shows, and
//! closing a dialog drops it. The template preview is kept apart so it can be
//! closed without touching the selection dialog underneath.

use common::certificate::asset::{AssetResolver, CertificateOption};
use common::certificate::carousel::SelectionSession;
use common::model::candidate::Candidate;
use common::model::certificate_template::CertificateTemplate;
use common::requests::CandidateForm;

pub enum Dialog {
    AddCandidate(CandidateForm),
    UpdateCandidate { id: i64, form: CandidateForm },
    Details(Candidate),
    ConfirmDelete(Candidate),
    SelectCertificate(SelectionSession),
}

pub struct CandidatesComponent {
    /// Last list received from the service. Only replaced by a fetch, or
    /// patched in place when a certificate was printed.
    pub candidates: Vec<Candidate>,

    /// Certificate template catalog, fetched once per page load.
    pub templates: Vec<CertificateTemplate>,

    pub dialog: Option<Dialog>,

    /// Full-size, non-modal view of a carousel option.
    pub preview: Option<CertificateOption>,

    pub resolver: AssetResolver,

    /// Candidate whose certificate is being printed, if any.
    pub printing: Option<i64>,

    /// Guard for first-render initialization.
    pub loaded: bool,
}

impl CandidatesComponent {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            templates: Vec::new(),
            dialog: None,
            preview: None,
            resolver: AssetResolver::default(),
            printing: None,
            loaded: false,
        }
    }

    /// Takes the open dialog when `pick` accepts it. A dialog `pick` hands
    /// back stays open.
    pub fn take_dialog<T>(
        &mut self,
        pick: impl FnOnce(Dialog) -> Result<T, Dialog>,
    ) -> Option<T> {
        match pick(self.dialog.take()?) {
            Ok(value) => Some(value),
            Err(dialog) => {
                self.dialog = Some(dialog);
                None
            }
        }
    }

    pub fn session(&self) -> Option<&SelectionSession> {
        match &self.dialog {
            Some(Dialog::SelectCertificate(session)) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut SelectionSession> {
        match &mut self.dialog {
            Some(Dialog::SelectCertificate(session)) => Some(session),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut CandidateForm> {
        match &mut self.dialog {
            Some(Dialog::AddCandidate(form)) | Some(Dialog::UpdateCandidate { form, .. }) => {
                Some(form)
            }
            _ => None,
        }
    }
}
