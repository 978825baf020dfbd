//! Conversions between Value and serde types.
//!
//! Both directions go through `serde_json::Value`, relying on the untagged
//! serde derive on [`Value`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Error, Value};

/// Convert a Value to a Rust type via serde.
///
/// `path` is only used to describe the failure.
pub fn from_value<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T, Error> {
    serde_json::to_value(value)
        .and_then(serde_json::from_value)
        .map_err(|e| Error::decode(path, e.to_string()))
}

/// Convert a Rust type to a Value via serde.
///
/// Unsigned integers above `i64::MAX` become `Value::Float`.
pub fn to_value<T: Serialize + ?Sized>(data: &T, path: &str) -> Result<Value, Error> {
    serde_json::to_value(data)
        .and_then(serde_json::from_value)
        .map_err(|e| Error::encode(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Server {
        host: String,
        port: u16,
    }

    #[test]
    fn json_object_becomes_map() {
        let value = to_value(
            &json!({
                "foo": "bar",
                "multilevel": {"int": 123, "null": null, "ratio": 0.5}
            }),
            "",
        )
        .unwrap();

        let map = value.as_map().unwrap();
        assert_eq!(map["foo"], Value::from("bar"));
        let inner = map["multilevel"].as_map().unwrap();
        assert_eq!(inner["int"], Value::Integer(123));
        assert_eq!(inner["null"], Value::Null);
        assert_eq!(inner["ratio"], Value::Float(0.5));
    }

    #[test]
    fn huge_unsigned_becomes_float() {
        let value = to_value(&u64::MAX, "big").unwrap();
        assert_eq!(value, Value::Float(u64::MAX as f64));
    }

    #[test]
    fn typed_struct_through_value() {
        let server = Server {
            host: "localhost".to_string(),
            port: 8080,
        };
        let value = to_value(&server, "server").unwrap();
        assert_eq!(
            value.as_map().and_then(|m| m.get("port")),
            Some(&Value::Integer(8080))
        );

        let back: Server = from_value(&value, "server").unwrap();
        assert_eq!(back, server);
    }

    #[test]
    fn decode_mismatch_names_path() {
        let err = from_value::<Server>(&Value::from("nope"), "server").unwrap_err();
        assert!(matches!(err, Error::Decode { ref path, .. } if path == "server"));
    }

    #[test]
    fn value_serializes_as_plain_json() {
        let parsed: Value = serde_json::from_str(r#"{"a":[1,true,null,"s"]}"#).unwrap();
        assert_eq!(
            parsed.as_map().unwrap()["a"],
            Value::Array(vec![
                Value::Integer(1),
                Value::Bool(true),
                Value::Null,
                Value::from("s"),
            ])
        );
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"a":[1,true,null,"s"]}"#
        );
    }
}
