//! Builds the printable certificate page.
//!
//! A [`CertificateDocument`] is one full-bleed template image with a fixed,
//! centered stack of text fields on top. [`CertificateDocument::to_html`] turns
//! it into a self-contained page with inline styles, which is all the print
//! surface ever receives.

use crate::model::candidate::Candidate;

pub const ACHIEVEMENT_TEXT: &str = "has successfully completed the course";

const PAGE_STYLE: &str = r#"
      body {
        display: flex;
        justify-content: center;
        align-items: center;
        height: 100vh;
        margin: 0;
        font-family: Arial, sans-serif;
      }
      .certificate-container {
        position: relative;
        width: 800px;
        height: 600px;
      }
      .certificate-image {
        width: 100%;
        height: 100%;
        object-fit: contain;
      }
      .certificate-text {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        text-align: center;
        color: #000;
        font-size: 24px;
        font-weight: bold;
      }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Heading,
    Body,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub text: String,
    pub emphasis: Emphasis,
}

impl TextField {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Heading,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateDocument {
    pub title: String,
    pub image_url: String,
    /// Top to bottom.
    pub fields: Vec<TextField>,
}

/// Overlays `candidate` on the template at `image_url`.
///
/// `issued_on` is the generation date already formatted by the caller with the
/// host's short locale format; the candidate's own dates are never used.
pub fn compose(candidate: &Candidate, image_url: &str, issued_on: &str) -> CertificateDocument {
    CertificateDocument {
        title: format!("Certificate for {}", candidate.name),
        image_url: image_url.to_string(),
        fields: vec![
            TextField::heading(candidate.name.clone()),
            TextField::body(ACHIEVEMENT_TEXT),
            TextField::body(score_line(candidate.score)),
            TextField::body(format!("Date: {issued_on}")),
        ],
    }
}

/// `87.5` renders as `87.5`, `90.0` as `90`.
pub fn score_line(score: f64) -> String {
    format!("with a score of {score}%")
}

impl CertificateDocument {
    pub fn to_html(&self) -> String {
        let mut text = String::new();
        for field in &self.fields {
            let escaped = escape_html(&field.text);
            match field.emphasis {
                Emphasis::Heading => text.push_str(&format!("        <h2>{escaped}</h2>\n")),
                Emphasis::Body => text.push_str(&format!("        <p>{escaped}</p>\n")),
            }
        }

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{style}    </style>
  </head>
  <body>
    <div class="certificate-container">
      <img src="{src}" alt="Certificate Template" class="certificate-image">
      <div class="certificate-text">
{text}      </div>
    </div>
  </body>
</html>
"#,
            title = escape_html(&self.title),
            style = PAGE_STYLE,
            src = escape_html(&self.image_url),
            text = text,
        )
    }
}

/// Escapes the characters that matter in element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::asset::AssetResolver;
    use pretty_assertions::assert_eq;

    fn alice() -> Candidate {
        Candidate {
            id: 1,
            name: "Alice".to_string(),
            score: 87.5,
            date_naissance: "2000-01-01".to_string(),
            is_printed: false,
        }
    }

    #[test]
    fn overlays_candidate_on_resolved_template() {
        let url = AssetResolver::default().image_url("/t/gold.png").unwrap();
        let document = compose(&alice(), &url, "10/19/2026");
        let html = document.to_html();

        assert!(html.contains("Alice"));
        assert!(html.contains("with a score of 87.5%"));
        assert_eq!(html.matches("<img ").count(), 1);
        assert!(html.contains(r#"src="http://localhost:8080/certificate-templates/gold.png""#));
    }

    #[test]
    fn fields_are_stacked_in_fixed_order() {
        let document = compose(&alice(), "http://x/gold.png", "19/10/2026");
        assert_eq!(
            document.fields,
            vec![
                TextField::heading("Alice"),
                TextField::body(ACHIEVEMENT_TEXT),
                TextField::body("with a score of 87.5%"),
                TextField::body("Date: 19/10/2026"),
            ]
        );
        assert_eq!(document.title, "Certificate for Alice");
    }

    #[test]
    fn issue_date_comes_from_caller_not_birth_date() {
        let html = compose(&alice(), "http://x/gold.png", "2026-10-19").to_html();
        assert!(html.contains("Date: 2026-10-19"));
        assert!(!html.contains("2000-01-01"));
    }

    #[test]
    fn whole_scores_have_no_fraction() {
        assert_eq!(score_line(90.0), "with a score of 90%");
        assert_eq!(score_line(0.0), "with a score of 0%");
    }

    #[test]
    fn candidate_text_is_escaped() {
        let mut candidate = alice();
        candidate.name = "<script>alert('x')</script>".to_string();
        let html = compose(&candidate, "http://x/a.png?b=1&c=\"2\"", "today").to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("a.png?b=1&amp;c=&quot;2&quot;"));
    }

    #[test]
    fn identical_inputs_compose_identically() {
        let a = compose(&alice(), "http://x/gold.png", "d").to_html();
        let b = compose(&alice(), "http://x/gold.png", "d").to_html();
        assert_eq!(a, b);
    }
}
