use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of readings in a complete reading set
pub const READING_COUNT: usize = 8;

/// One metering measurement as served by `/api/latest`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default, deserialize_with = "lenient_field")]
    pub index: i64,
    #[serde(default, deserialize_with = "lenient_field")]
    pub name: String,
    /// Numeric string; the backend emits either strings or numbers
    #[serde(default, deserialize_with = "lenient_value")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient_field")]
    pub unit: String,
}

impl Reading {
    pub fn new(index: i64, name: &str, value: String, unit: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
            value,
            unit: unit.to_string(),
        }
    }

    /// Numeric value, zero when the value is missing or not a finite number
    pub fn numeric_value(&self) -> f64 {
        self.value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

/// Ordered readings; position is the binding key, not the name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingSet(Vec<Reading>);

impl ReadingSet {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self(readings)
    }

    /// Build a reading set from an arbitrary JSON payload.
    ///
    /// Returns `None` unless the payload is an array. Elements that are not
    /// readings keep their slot as an empty reading so later indices stay bound.
    pub fn from_json(payload: Value) -> Option<Self> {
        match payload {
            Value::Array(items) => Some(Self(
                items
                    .into_iter()
                    .map(|item| serde_json::from_value(item).unwrap_or_default())
                    .collect(),
            )),
            _ => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Reading> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.0.iter()
    }
}

fn lenient_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Side fields of the wrong type fall back to their default
fn lenient_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reading_accepts_string_and_number_values() {
        let payload = json!([
            {"index": 0, "name": "Voltage", "value": "221.4", "unit": "V"},
            {"index": 1, "name": "Current", "value": 19.87, "unit": "A"}
        ]);

        let set = ReadingSet::from_json(payload).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().value, "221.4");
        assert_eq!(set.get(1).unwrap().value, "19.87");
        assert_eq!(set.get(1).unwrap().numeric_value(), 19.87);
    }

    #[test]
    fn test_non_array_payload_is_rejected() {
        assert!(ReadingSet::from_json(json!({"readings": []})).is_none());
        assert!(ReadingSet::from_json(json!("oops")).is_none());
        assert!(ReadingSet::from_json(Value::Null).is_none());
    }

    #[test]
    fn test_malformed_elements_keep_their_slot() {
        let payload = json!([null, 42, {"name": "Frequency", "value": "60.1"}]);

        let set = ReadingSet::from_json(payload).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).unwrap(), &Reading::default());
        assert_eq!(set.get(1).unwrap(), &Reading::default());
        assert_eq!(set.get(2).unwrap().name, "Frequency");
    }

    #[test]
    fn test_mistyped_side_fields_keep_the_value() {
        let payload = json!([
            {"index": 0, "name": "Voltage", "value": "221.4", "unit": null},
            {"index": "1", "name": "Current", "value": "18.2", "unit": "A"},
            {"index": 2, "name": 7, "value": 0.95, "unit": ["PF"]}
        ]);

        let set = ReadingSet::from_json(payload).unwrap();

        let voltage = set.get(0).unwrap();
        assert_eq!(voltage.value, "221.4");
        assert_eq!(voltage.unit, "");
        assert_eq!(voltage.name, "Voltage");

        let current = set.get(1).unwrap();
        assert_eq!(current.numeric_value(), 18.2);
        assert_eq!(current.index, 0);
        assert_eq!(current.unit, "A");

        let factor = set.get(2).unwrap();
        assert_eq!(factor.numeric_value(), 0.95);
        assert_eq!(factor.name, "");
        assert_eq!(factor.index, 2);
    }

    #[test]
    fn test_numeric_value_defaults_to_zero() {
        let mut reading = Reading::new(0, "Voltage", "abc".to_string(), "V");
        assert_eq!(reading.numeric_value(), 0.0);

        reading.value = "NaN".to_string();
        assert_eq!(reading.numeric_value(), 0.0);

        reading.value = String::new();
        assert_eq!(reading.numeric_value(), 0.0);

        reading.value = " 0.997 ".to_string();
        assert_eq!(reading.numeric_value(), 0.997);
    }
}
