//! Lenient integer decoding for request bodies
//!
//! The browser frontend sends category ids taken from object keys, so the
//! same field arrives as `3` or `"3"` depending on the screen.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

/// Deserialize an `i32` from a JSON integer or a numeric string.
pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrText::deserialize(deserializer)? {
        IntOrText::Int(n) => i32::try_from(n)
            .map_err(|_| de::Error::custom(format!("integer out of range: {}", n))),
        IntOrText::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::int")]
        id: i32,
    }

    #[test]
    fn accepts_integer_and_numeric_string() {
        let p: Probe = serde_json::from_value(json!({ "id": 4 })).unwrap();
        assert_eq!(p.id, 4);

        let p: Probe = serde_json::from_value(json!({ "id": " 4 " })).unwrap();
        assert_eq!(p.id, 4);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_value::<Probe>(json!({ "id": "four" })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({ "id": [1] })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({ "id": null })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({ "id": 4_000_000_000i64 })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({})).is_err());
    }
}
