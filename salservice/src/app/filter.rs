use serde::Deserialize;

/// The fixed set of filter parameters the query endpoint recognizes.
/// Each maps 1:1 to a column of the queried table; keys outside this set
/// never reach the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Username,
    Password,
    Doctype,
    Docnum,
    Docitem,
    Customer,
    Custname,
    Material,
    Quantity,
}

impl FilterKey {
    pub fn column(&self) -> &'static str {
        match self {
            Self::Username => "USERNAME",
            Self::Password => "PASSWORD",
            Self::Doctype => "DOCTYPE",
            Self::Docnum => "DOCNUM",
            Self::Docitem => "DOCITEM",
            Self::Customer => "CUSTOMER",
            Self::Custname => "CUSTNAME",
            Self::Material => "MATERIAL",
            Self::Quantity => "QUANTITY",
        }
    }
}

/// Scalar filter value as it appears in the JSON body. Always handed to the
/// driver as a bound parameter, never spliced into SQL text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}
