use toli_types::NewEntry;

use crate::error::QueryError;

pub trait Preprocessor {
    // Default search-query normalization
    fn process(&self, text: &str) -> String {
        text.trim().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Parse a caller-supplied result limit. Absent means `default`.
pub fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, QueryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| QueryError::InvalidLimit(value.to_string())),
    }
}

/// Reject entries with blank required fields before they reach the store
pub fn validate_entry(entry: &NewEntry) -> Result<(), QueryError> {
    let required = [
        ("mongolianTraditional", &entry.mongolian_traditional),
        ("mongolianCyrillic", &entry.mongolian_cyrillic),
        ("korean", &entry.korean),
        ("english", &entry.english),
        ("pronunciation", &entry.pronunciation),
        ("partOfSpeech", &entry.part_of_speech),
    ];
    if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(QueryError::MissingField(*name));
    }

    for example in &entry.examples {
        let fields = [
            ("examples.mongolianTraditional", &example.mongolian_traditional),
            ("examples.mongolianCyrillic", &example.mongolian_cyrillic),
            ("examples.korean", &example.korean),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(QueryError::MissingField(*name));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::new_entry;

    #[test]
    fn process_trims_and_lowercases() {
        assert_eq!(DefaultPreprocessor.process("  НАРАН \n"), "наран");
        assert_eq!(DefaultPreprocessor.process("Sun"), "sun");
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }

    #[test]
    fn limit_defaults_and_rejects_garbage() {
        assert_eq!(parse_limit(None, 20).unwrap(), 20);
        assert_eq!(parse_limit(Some(""), 20).unwrap(), 20);
        assert_eq!(parse_limit(Some("5"), 20).unwrap(), 5);
        assert_eq!(parse_limit(Some("0"), 20).unwrap(), 0);
        assert!(matches!(parse_limit(Some("abc"), 20), Err(QueryError::InvalidLimit(_))));
        assert!(matches!(parse_limit(Some("-1"), 20), Err(QueryError::InvalidLimit(_))));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let entry = new_entry("ᠮᠤᠷᠢ", "морь", "말", "horse");
        assert!(validate_entry(&entry).is_ok());

        let mut blank = entry.clone();
        blank.korean = "  ".into();
        assert!(matches!(validate_entry(&blank), Err(QueryError::MissingField("korean"))));
    }
}
