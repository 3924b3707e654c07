use crate::domain_record::DomainRecord;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainListError {
    #[error("The stored domain list is not a valid JSON array: {0}")]
    Malformed(String),
}

/// An entry of the stored list that could not be read as a `DomainRecord`
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position of the entry in the stored array
    pub index: usize,
    pub reason: String,
}

/// The readable records of a stored domain list, in stored order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DomainList {
    pub records: Vec<DomainRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Reads the stored domain list. A missing list is an empty list.
///
/// Only a payload that is not a JSON array is an error. Entries of the
/// array that are not domain records end up in `DomainList::skipped`.
pub fn parse_domain_list(raw: Option<&str>) -> Result<DomainList, DomainListError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(DomainList::default()),
    };
    let entries = serde_json::from_str::<Vec<Value>>(raw)
        .map_err(|e| DomainListError::Malformed(e.to_string()))?;

    let mut list = DomainList::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<DomainRecord>(entry) {
            Ok(record) => list.records.push(record),
            Err(e) => list.skipped.push(SkippedEntry {
                index,
                reason: e.to_string(),
            }),
        }
    }
    Ok(list)
}

pub fn serialize_domain_list(records: &[DomainRecord]) -> String {
    // Serializing plain structs with string keys cannot fail
    serde_json::to_string(records).unwrap_or_else(|_| "[]".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_list_is_empty() {
        assert_eq!(parse_domain_list(None), Ok(DomainList::default()));
        assert_eq!(parse_domain_list(Some("")), Ok(DomainList::default()));
        assert_eq!(parse_domain_list(Some("[]")), Ok(DomainList::default()));
    }

    #[test]
    fn it_rejects_non_arrays() {
        for raw in &["{}", "\"domains\"", "[{\"domain\": \"a.com\"", "null", "not json"] {
            assert!(
                matches!(parse_domain_list(Some(raw)), Err(DomainListError::Malformed(_))),
                "Expected {} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn it_keeps_list_order() {
        let raw = r#"[
            {"domain": "b.com", "expirationDate": "2025-01-05"},
            {"domain": "a.com", "expirationDate": "not a date"}
        ]"#;
        let list = parse_domain_list(Some(raw)).unwrap();
        assert!(list.skipped.is_empty());
        assert_eq!(list.records.len(), 2);
        assert_eq!(list.records[0].domain, "b.com");
        assert_eq!(list.records[1].domain, "a.com");

        let reparsed = parse_domain_list(Some(&serialize_domain_list(&list.records))).unwrap();
        assert_eq!(reparsed, list);
    }

    #[test]
    fn unreadable_entries_are_skipped() {
        let raw = r#"[
            {"domain": "first.com", "expirationDate": "2025-01-05"},
            {"expirationDate": "2025-01-06"},
            42,
            {"domain": "null-system.com", "expirationDate": "2025-01-07", "system": null},
            {"domain": "last.com", "expirationDate": "2025-01-08"}
        ]"#;
        let list = parse_domain_list(Some(raw)).unwrap();

        let domains: Vec<_> = list.records.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, vec!["first.com", "null-system.com", "last.com"]);
        let skipped: Vec<_> = list.skipped.iter().map(|e| e.index).collect();
        assert_eq!(skipped, vec![1, 2]);
        assert!(list.skipped[0].reason.contains("domain"));
    }
}
