use crate::app::error::QueryServiceError;

/// Pre-approved table identifiers. Caller-supplied names are resolved
/// against this list and only the stored spelling ever reaches SQL text,
/// so arbitrary identifiers cannot be injected.
#[derive(Debug, Clone)]
pub struct TableAllowList {
    tables: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AllowListError {
    #[error("ALLOWED_TABLES must name at least one table")]
    Empty,

    #[error("invalid table identifier in ALLOWED_TABLES: {0:?}")]
    InvalidIdentifier(String),
}

impl TableAllowList {
    /// Parses a comma-separated list such as the `ALLOWED_TABLES` variable.
    /// Every entry must be a plain SQL identifier.
    pub fn parse(raw: &str) -> Result<Self, AllowListError> {
        let tables: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();
        if tables.is_empty() {
            return Err(AllowListError::Empty);
        }
        for table in &tables {
            if !is_identifier(table) {
                return Err(AllowListError::InvalidIdentifier(table.clone()));
            }
        }
        Ok(Self { tables })
    }

    /// Case-insensitive lookup returning the approved spelling.
    pub fn resolve(&self, name: &str) -> Result<&str, QueryServiceError> {
        self.tables
            .iter()
            .find(|table| table.eq_ignore_ascii_case(name))
            .map(String::as_str)
            .ok_or_else(|| QueryServiceError::UnknownTable(name.to_owned()))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::{AllowListError, TableAllowList};
    use crate::app::error::QueryServiceError;

    #[test]
    fn parses_and_trims_entries() {
        let list = TableAllowList::parse(" SALDOC , USERS ").unwrap();
        assert_eq!(list.resolve("SALDOC").unwrap(), "SALDOC");
        assert_eq!(list.resolve("USERS").unwrap(), "USERS");
    }

    #[test]
    fn resolve_is_case_insensitive_and_returns_stored_spelling() {
        let list = TableAllowList::parse("SalDoc").unwrap();
        assert_eq!(list.resolve("saldoc").unwrap(), "SalDoc");
        assert_eq!(list.resolve("SALDOC").unwrap(), "SalDoc");
    }

    #[test]
    fn unknown_table_is_a_validation_error() {
        let list = TableAllowList::parse("SALDOC").unwrap();
        let err = list.resolve("PG_SHADOW; DROP TABLE x").unwrap_err();
        assert!(matches!(err, QueryServiceError::UnknownTable(_)));
        assert_eq!(err.to_string(), "Unknown table: PG_SHADOW; DROP TABLE x");
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            TableAllowList::parse(" , "),
            Err(AllowListError::Empty)
        ));
    }

    #[test]
    fn rejects_non_identifier_entries() {
        for raw in ["SALDOC;--", "1TABLE", "SAL DOC", "a-b"] {
            assert!(
                matches!(
                    TableAllowList::parse(raw),
                    Err(AllowListError::InvalidIdentifier(_))
                ),
                "{raw:?} should be rejected"
            );
        }
    }
}
