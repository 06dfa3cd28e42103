use serde::Deserialize;

use crate::app::filter::{FilterKey, FilterValue};

/// Body of `POST /api/salservice`. Unknown keys are ignored by contract;
/// a key set to JSON null counts as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TableQueryRequest {
    pub table: Option<String>,
    pub username: Option<FilterValue>,
    pub password: Option<FilterValue>,
    pub doctype: Option<FilterValue>,
    pub docnum: Option<FilterValue>,
    pub docitem: Option<FilterValue>,
    pub customer: Option<FilterValue>,
    pub custname: Option<FilterValue>,
    pub material: Option<FilterValue>,
    pub quantity: Option<FilterValue>,
}

impl TableQueryRequest {
    /// Recognized filters present with a non-null value, in declaration
    /// order. This order fixes the `$n` placeholder numbering.
    pub fn filters(&self) -> Vec<(FilterKey, FilterValue)> {
        [
            (FilterKey::Username, &self.username),
            (FilterKey::Password, &self.password),
            (FilterKey::Doctype, &self.doctype),
            (FilterKey::Docnum, &self.docnum),
            (FilterKey::Docitem, &self.docitem),
            (FilterKey::Customer, &self.customer),
            (FilterKey::Custname, &self.custname),
            (FilterKey::Material, &self.material),
            (FilterKey::Quantity, &self.quantity),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::TableQueryRequest;
    use crate::app::filter::{FilterKey, FilterValue};

    #[test]
    fn unknown_keys_are_ignored() {
        let request: TableQueryRequest = serde_json::from_value(json!({
            "TABLE": "SALDOC",
            "USERNAME": "alice",
            "DROP_TABLE": "x",
            "ORDER": "1; DELETE FROM SALDOC"
        }))
        .unwrap();
        let filters = request.filters();
        assert_eq!(
            filters,
            vec![(
                FilterKey::Username,
                FilterValue::Text("alice".to_string())
            )]
        );
    }

    #[test]
    fn null_values_count_as_absent() {
        let request: TableQueryRequest = serde_json::from_value(json!({
            "TABLE": "SALDOC",
            "CUSTOMER": null,
            "MATERIAL": "M-9"
        }))
        .unwrap();
        let filters = request.filters();
        assert_eq!(
            filters,
            vec![(
                FilterKey::Material,
                FilterValue::Text("M-9".to_string())
            )]
        );
    }

    #[test]
    fn filters_keep_declaration_order() {
        let request: TableQueryRequest = serde_json::from_value(json!({
            "TABLE": "SALDOC",
            "QUANTITY": 3,
            "DOCTYPE": "ORD",
            "USERNAME": "bob"
        }))
        .unwrap();
        let keys: Vec<_> = request.filters().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![FilterKey::Username, FilterKey::Doctype, FilterKey::Quantity]
        );
    }
}
