use common::certificate::print::PrintError;
use common::model::candidate::Candidate;
use common::model::certificate_template::CertificateTemplate;
use common::requests::FormField;

pub enum Msg {
    Refresh,
    CandidatesLoaded(Vec<Candidate>),
    LoadTemplates,
    TemplatesLoaded(Vec<CertificateTemplate>),

    OpenAddForm,
    OpenUpdateForm(Candidate),
    EditForm(FormField, String),
    SubmitForm,

    ShowDetails(i64),
    DetailsLoaded(Candidate),

    RequestDelete(Candidate),
    ConfirmDelete,

    CloseDialog,

    OpenCertificateSelection(Candidate),
    PreviousTemplate,
    NextTemplate,
    OpenPreview,
    ClosePreview,
    PrintSelected,
    PrintFinished(Result<Candidate, PrintError>),
}
