//! Vendor record and antenna schema
//!
//! Parsing from untyped JSON is explicit rather than derive-based so that
//! failures can name the offending field. Serialization to the wire format
//! uses serde derives with camelCase renaming.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

/// One radio technology supported by a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntennaSpec {
    /// Radio access technology name (e.g. "5G", "LTE")
    pub technology: String,
    /// Speed reported as a formatted string, e.g. "1000 Mbps". Kept as
    /// free-form text; the source formatting is preserved byte-for-byte.
    pub speed_mbps: String,
}

/// One vendor entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    /// Unique identifier. Uniqueness is assumed from the data source, not
    /// enforced here.
    pub id: String,
    /// Image reference (URL or path), uninterpreted.
    pub picture: String,
    /// Foundation year. No plausibility check.
    pub foundation_date: i64,
    /// Display name.
    pub vendor: String,
    /// Supported antennas, in source order. May be empty.
    pub antennas: Vec<AntennaSpec>,
}

fn require_str(map: &serde_json::Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: "string",
        }),
    }
}

fn require_int(map: &serde_json::Map<String, Value>, field: &str) -> Result<i64, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(Value::Number(n)) => n.as_i64().ok_or(ValidationError::WrongType {
            field: field.to_string(),
            expected: "integer",
        }),
        Some(_) => Err(ValidationError::WrongType {
            field: field.to_string(),
            expected: "integer",
        }),
    }
}

impl AntennaSpec {
    /// Validate one untyped antenna entry.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = value.as_object().ok_or(ValidationError::NotAnObject)?;

        Ok(Self {
            technology: require_str(map, "technology")?,
            speed_mbps: require_str(map, "speedMbps")?,
        })
    }
}

impl VendorRecord {
    /// Validate one untyped vendor record, including its nested antenna
    /// list. Fails on the first offending field.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let antennas = match map.get("antennas") {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField("antennas".to_string()))
            }
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    AntennaSpec::from_value(item).map_err(|e| e.nested(&format!("antennas[{i}]")))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(ValidationError::WrongType {
                    field: "antennas".to_string(),
                    expected: "array",
                })
            }
        };

        Ok(Self {
            id: require_str(map, "id")?,
            picture: require_str(map, "picture")?,
            foundation_date: require_int(map, "foundationDate")?,
            vendor: require_str(map, "vendor")?,
            antennas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "v1",
            "picture": "p.png",
            "foundationDate": 1999,
            "vendor": "Acme",
            "antennas": [{"technology": "5G", "speedMbps": "1000 Mbps"}]
        })
    }

    #[test]
    fn test_parse_valid_record() {
        let record = VendorRecord::from_value(&sample()).unwrap();
        assert_eq!(record.id, "v1");
        assert_eq!(record.foundation_date, 1999);
        assert_eq!(record.antennas.len(), 1);
        assert_eq!(record.antennas[0].technology, "5G");
        assert_eq!(record.antennas[0].speed_mbps, "1000 Mbps");
    }

    #[test]
    fn test_empty_antenna_list_is_valid() {
        let mut value = sample();
        value["antennas"] = json!([]);
        let record = VendorRecord::from_value(&value).unwrap();
        assert!(record.antennas.is_empty());
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("vendor");
        let err = VendorRecord::from_value(&value).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("vendor".to_string()));
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let mut value = sample();
        value["picture"] = Value::Null;
        let err = VendorRecord::from_value(&value).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("picture".to_string()));
    }

    #[test]
    fn test_wrong_type_is_reported() {
        let mut value = sample();
        value["foundationDate"] = json!("1999");
        let err = VendorRecord::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                field: "foundationDate".to_string(),
                expected: "integer"
            }
        );
    }

    #[test]
    fn test_nested_antenna_error_carries_path() {
        let mut value = sample();
        value["antennas"] = json!([
            {"technology": "5G", "speedMbps": "1000 Mbps"},
            {"technology": "LTE"}
        ]);
        let err = VendorRecord::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField("antennas[1].speedMbps".to_string())
        );
    }

    #[test]
    fn test_non_object_record() {
        let err = VendorRecord::from_value(&json!(42)).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn test_non_object_antenna_entry() {
        let mut value = sample();
        value["antennas"] = json!(["5G"]);
        let err = VendorRecord::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                field: "antennas[0]".to_string(),
                expected: "object"
            }
        );
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let record = VendorRecord::from_value(&sample()).unwrap();
        let wire = serde_json::to_value(&record).unwrap();
        assert_eq!(wire, sample());
    }

    #[test]
    fn test_speed_string_preserved_verbatim() {
        let mut value = sample();
        value["antennas"][0]["speedMbps"] = json!("  12.50 mbps ");
        let record = VendorRecord::from_value(&value).unwrap();
        assert_eq!(record.antennas[0].speed_mbps, "  12.50 mbps ");
    }
}
