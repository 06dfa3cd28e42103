use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::{
    postgres::{PgColumn, PgRow},
    types::{BigDecimal, Uuid},
    Column, Row, TypeInfo,
};

/// Converts a result set into ordered column→value objects. Column order
/// follows the row metadata, row order follows the slice.
pub fn rows_to_objects(rows: &[PgRow]) -> Result<Vec<Map<String, Value>>, sqlx::Error> {
    rows.iter().map(row_to_object).collect()
}

fn row_to_object(row: &PgRow) -> Result<Map<String, Value>, sqlx::Error> {
    let mut object = Map::new();
    for column in row.columns() {
        object.insert(column.name().to_owned(), cell_to_value(row, column)?);
    }
    Ok(object)
}

fn cell_to_value(row: &PgRow, column: &PgColumn) -> Result<Value, sqlx::Error> {
    let idx = column.ordinal();
    let value = match column.type_info().name() {
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(Value::from),
        "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(Value::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)?
            .map(|v| float_value(v as f64)),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(float_value),
        "NUMERIC" => row.try_get::<Option<BigDecimal>, _>(idx)?.map(numeric_value),
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(idx)?.map(Value::from)
        }
        "UUID" => row
            .try_get::<Option<Uuid>, _>(idx)?
            .map(|v| Value::from(v.to_string())),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)?
            .map(|v| Value::from(v.to_string())),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(idx)?
            .map(|v| Value::from(v.to_string())),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map(|v| Value::from(v.to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map(|v| Value::from(v.to_rfc3339())),
        // Unknown types: take a textual rendering if the driver offers one.
        _ => row
            .try_get::<Option<String>, _>(idx)
            .unwrap_or(None)
            .map(Value::from),
    };
    Ok(value.unwrap_or(Value::Null))
}

fn float_value(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}

/// NUMERIC keeps full precision as a string; no round-trip through f64.
fn numeric_value(value: BigDecimal) -> Value {
    Value::from(value.to_string())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::{json, Map, Value};
    use sqlx::types::BigDecimal;

    use super::{float_value, numeric_value};

    #[test]
    fn floats_become_numbers_and_nan_becomes_null() {
        assert_eq!(float_value(2.5), json!(2.5));
        assert_eq!(float_value(f64::NAN), Value::Null);
        assert_eq!(float_value(f64::INFINITY), Value::Null);
    }

    #[test]
    fn numeric_keeps_full_precision_as_a_string() {
        let value = numeric_value(BigDecimal::from_str("12345678901234567890.12345").unwrap());
        assert_eq!(value, json!("12345678901234567890.12345"));
    }

    #[test]
    fn objects_serialize_in_insertion_order() {
        // "CUSTOMER" sorts before "id"/"name", so this fails if the map
        // ever reorders keys instead of keeping column order.
        let mut object = Map::new();
        object.insert("id".to_string(), json!(1));
        object.insert("name".to_string(), json!("a"));
        object.insert("CUSTOMER".to_string(), json!("c1"));
        assert_eq!(
            serde_json::to_string(&object).unwrap(),
            r#"{"id":1,"name":"a","CUSTOMER":"c1"}"#
        );
    }
}
