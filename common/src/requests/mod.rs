//! Typed payloads for candidate create/update calls.
//!
//! Dialog input arrives as raw strings in a [`CandidateForm`]; the only way to
//! obtain a [`CandidateRequest`] is through [`CandidateForm::validate`], so the
//! repository accessor never sees unchecked data. The service re-checks the
//! decoded request with [`CandidateRequest::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("All fields are required ({0} is missing)")]
    MissingField(&'static str),
    #[error("Score must be a number between 0 and 100")]
    ScoreNotNumeric,
    #[error("Score must be a number between 0 and 100 (got {0})")]
    ScoreOutOfRange(f64),
}

/// Body of `POST /api/candidats` and `PUT /api/candidats/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    pub name: String,
    pub score: f64,
    pub date_naissance: String,
}

impl CandidateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.date_naissance.trim().is_empty() {
            return Err(ValidationError::MissingField("dateNaissance"));
        }
        check_score(self.score)
    }
}

/// Raw values typed into the add/update dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateForm {
    pub name: String,
    pub score: String,
    pub date_naissance: String,
}

/// Identifies one input of the candidate dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Score,
    DateNaissance,
}

impl CandidateForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Score => self.score = value,
            FormField::DateNaissance => self.date_naissance = value,
        }
    }

    pub fn validate(&self) -> Result<CandidateRequest, ValidationError> {
        let name = self.name.trim();
        let score = self.score.trim();
        let date_naissance = self.date_naissance.trim();

        if name.is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if score.is_empty() {
            return Err(ValidationError::MissingField("score"));
        }
        if date_naissance.is_empty() {
            return Err(ValidationError::MissingField("dateNaissance"));
        }

        let score: f64 = score
            .parse()
            .map_err(|_| ValidationError::ScoreNotNumeric)?;
        check_score(score)?;

        Ok(CandidateRequest {
            name: name.to_string(),
            score,
            date_naissance: date_naissance.to_string(),
        })
    }
}

impl From<&crate::model::candidate::Candidate> for CandidateForm {
    fn from(candidate: &crate::model::candidate::Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            score: candidate.score.to_string(),
            date_naissance: candidate.date_naissance.clone(),
        }
    }
}

fn check_score(score: f64) -> Result<(), ValidationError> {
    if !score.is_finite() {
        return Err(ValidationError::ScoreNotNumeric);
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::ScoreOutOfRange(score));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(score: &str) -> CandidateForm {
        CandidateForm {
            name: "Alice".to_string(),
            score: score.to_string(),
            date_naissance: "2000-01-01".to_string(),
        }
    }

    #[test]
    fn accepts_score_bounds() {
        assert_eq!(form("0").validate().unwrap().score, 0.0);
        assert_eq!(form("100").validate().unwrap().score, 100.0);
        assert_eq!(form(" 87.5 ").validate().unwrap().score, 87.5);
    }

    #[test]
    fn rejects_scores_outside_range() {
        assert_eq!(
            form("-1").validate(),
            Err(ValidationError::ScoreOutOfRange(-1.0))
        );
        assert_eq!(
            form("101").validate(),
            Err(ValidationError::ScoreOutOfRange(101.0))
        );
    }

    #[test]
    fn rejects_non_numeric_scores() {
        assert_eq!(form("abc").validate(), Err(ValidationError::ScoreNotNumeric));
        assert_eq!(form("NaN").validate(), Err(ValidationError::ScoreNotNumeric));
        assert_eq!(form("inf").validate(), Err(ValidationError::ScoreNotNumeric));
    }

    #[test]
    fn reports_first_missing_field() {
        let mut f = form("50");
        f.name = "   ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::MissingField("name")));

        let mut f = form("");
        assert_eq!(f.validate(), Err(ValidationError::MissingField("score")));

        f = form("50");
        f.date_naissance.clear();
        assert_eq!(
            f.validate(),
            Err(ValidationError::MissingField("dateNaissance"))
        );
    }

    #[test]
    fn trims_text_fields() {
        let f = CandidateForm {
            name: "  Alice ".to_string(),
            score: "12".to_string(),
            date_naissance: " 2000-01-01 ".to_string(),
        };
        assert_eq!(
            f.validate().unwrap(),
            CandidateRequest {
                name: "Alice".to_string(),
                score: 12.0,
                date_naissance: "2000-01-01".to_string(),
            }
        );
    }

    #[test]
    fn request_validation_matches_form_rules() {
        let mut request = form("50").validate().unwrap();
        assert!(request.validate().is_ok());
        request.score = 100.5;
        assert_eq!(
            request.validate(),
            Err(ValidationError::ScoreOutOfRange(100.5))
        );
        request.score = 10.0;
        request.name.clear();
        assert_eq!(request.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn set_updates_the_named_field() {
        let mut f = CandidateForm::default();
        f.set(FormField::Name, "Zoe".to_string());
        f.set(FormField::Score, "9".to_string());
        f.set(FormField::DateNaissance, "2001-02-03".to_string());
        assert_eq!(f, CandidateForm {
            name: "Zoe".to_string(),
            score: "9".to_string(),
            date_naissance: "2001-02-03".to_string(),
        });
    }
}
