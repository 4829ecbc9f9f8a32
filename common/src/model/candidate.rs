use serde::{Deserialize, Serialize};

/// A person that can receive a certificate.
///
/// `id` is assigned by the service. `is_printed` is only ever flipped locally by
/// the print dispatcher; the service stores it with a `false` default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    /// Between 0 and 100 inclusive.
    pub score: f64,
    /// Birth date as entered by the operator, kept verbatim.
    pub date_naissance: String,
    #[serde(default)]
    pub is_printed: bool,
}

impl Candidate {
    pub fn mark_printed(&mut self) {
        self.is_printed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names_and_defaults_printed_flag() {
        let json = r#"{"id":3,"name":"Alice","score":87.5,"dateNaissance":"2000-01-01"}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, 3);
        assert_eq!(candidate.date_naissance, "2000-01-01");
        assert!(!candidate.is_printed);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let candidate = Candidate {
            id: 1,
            name: "Bob".to_string(),
            score: 40.0,
            date_naissance: "1999-12-31".to_string(),
            is_printed: true,
        };
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["dateNaissance"], "1999-12-31");
        assert_eq!(value["isPrinted"], true);
    }
}
