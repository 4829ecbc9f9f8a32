use thiserror::Error;

use crate::certificate::asset::CertificateOption;
use crate::model::candidate::Candidate;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("No certificate templates are available")]
    NoTemplates,
}

/// State of one open certificate-selection dialog.
///
/// The session owns the candidate being certified and the options on display.
/// `current` is always a valid index into `options`. Confirming consumes the
/// session; dropping it is a cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSession {
    candidate: Candidate,
    options: Vec<CertificateOption>,
    current: usize,
}

/// The template picked when a session is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub candidate: Candidate,
    pub option: CertificateOption,
}

impl SelectionSession {
    pub fn open(
        candidate: Candidate,
        options: Vec<CertificateOption>,
    ) -> Result<Self, SelectionError> {
        if options.is_empty() {
            return Err(SelectionError::NoTemplates);
        }
        Ok(Self {
            candidate,
            options,
            current: 0,
        })
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false: a session cannot be opened without options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &CertificateOption {
        &self.options[self.current]
    }

    pub fn next(&mut self) -> &CertificateOption {
        self.current = (self.current + 1) % self.options.len();
        self.current()
    }

    pub fn previous(&mut self) -> &CertificateOption {
        let n = self.options.len();
        self.current = (self.current + n - 1) % n;
        self.current()
    }

    /// The option to show full size. The session is left untouched so the
    /// preview can be closed without affecting the selection.
    pub fn preview(&self) -> CertificateOption {
        self.current().clone()
    }

    pub fn confirm(self) -> Selection {
        let Self {
            candidate,
            mut options,
            current,
        } = self;
        Selection {
            candidate,
            option: options.swap_remove(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidate() -> Candidate {
        Candidate {
            id: 7,
            name: "Alice".to_string(),
            score: 87.5,
            date_naissance: "2000-01-01".to_string(),
            is_printed: false,
        }
    }

    fn options(n: usize) -> Vec<CertificateOption> {
        (0..n)
            .map(|i| CertificateOption {
                value: i as i64 * 10,
                text: format!("option {i}"),
                image_url: format!("http://assets/{i}.png"),
            })
            .collect()
    }

    #[test]
    fn refuses_to_open_without_options() {
        assert_eq!(
            SelectionSession::open(candidate(), Vec::new()),
            Err(SelectionError::NoTemplates)
        );
    }

    #[test]
    fn starts_on_the_first_option() {
        let session = SelectionSession::open(candidate(), options(3)).unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current().text, "option 0");
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn full_cycle_returns_to_start_in_both_directions() {
        for n in 1..=7 {
            for start in 0..n {
                let mut session = SelectionSession::open(candidate(), options(n)).unwrap();
                for _ in 0..start {
                    session.next();
                }
                assert_eq!(session.current_index(), start);

                for _ in 0..n {
                    session.next();
                }
                assert_eq!(session.current_index(), start, "next x{n}");

                for _ in 0..n {
                    session.previous();
                }
                assert_eq!(session.current_index(), start, "previous x{n}");
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        for n in 1..=6 {
            let mut session = SelectionSession::open(candidate(), options(n)).unwrap();
            for start in 0..n {
                assert_eq!(session.current_index(), start);
                session.next();
                session.previous();
                assert_eq!(session.current_index(), start);
                session.next();
            }
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut session = SelectionSession::open(candidate(), options(4)).unwrap();
        assert_eq!(session.previous().text, "option 3");
        assert_eq!(session.next().text, "option 0");
    }

    #[test]
    fn preview_does_not_move_the_selection() {
        let mut session = SelectionSession::open(candidate(), options(3)).unwrap();
        session.next();
        let preview = session.preview();
        assert_eq!(preview.text, "option 1");
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn confirm_commits_the_current_option() {
        let mut session = SelectionSession::open(candidate(), options(5)).unwrap();
        session.previous();
        session.previous();
        let selection = session.confirm();
        assert_eq!(selection.option.value, 30);
        assert_eq!(selection.candidate, candidate());
    }
}
