//! # Port parameter parsing.
//!
//! Decodes a port's flat parameter string into typed key/value parameters.
//!
//! ## Wire format
//! `key1=value1|key2=value2|...` — no escaping of `|` or `=` within values
//! is defined. Each value is coerced through the [`Value`] ladder (integer,
//! then float, else string).
//!
//! ## Permissive policy
//! Segments without `=` are skipped and duplicate keys overwrite silently
//! (last write wins). Required keys, by contrast, are enforced strictly:
//! parsing fails before anything is returned if one is missing.
//!
//! ## Example
//! ```
//! use pollvisor::{Params, Port};
//!
//! let port = Port {
//!     id: 3,
//!     protocol: "modbus_rtu".into(),
//!     address: "/dev/ttyS0".into(),
//!     params: "baud=9600|parity=N|timeout=2.5".into(),
//!     sources: vec![],
//! };
//!
//! let params = Params::parse(&port, &["baud"]).unwrap();
//! assert_eq!(params.get_int("baud"), Some(9600));
//! assert_eq!(params.get_float("timeout"), Some(2.5));
//! assert_eq!(params.get_str("parity"), Some("N"));
//! assert_eq!(params.get_str("port"), Some("/dev/ttyS0"));
//! ```

use std::collections::BTreeMap;

use super::port::Port;
use super::value::Value;
use crate::error::ConfigError;

/// Typed parameters decoded from a port's parameter string.
#[derive(Clone, Debug, Default)]
pub struct Params {
    values: BTreeMap<String, Value>,
}

impl Params {
    /// Breaks apart `port.params` and returns the typed parameter map.
    ///
    /// After coercion, every key listed in `required` must be present;
    /// otherwise parsing fails with [`ConfigError::MissingParameter`] naming
    /// the key and the port. On success a `port` key bound to the port's
    /// address is injected into the result. The address is injected as-is,
    /// without coercion.
    pub fn parse(port: &Port, required: &[&str]) -> Result<Self, ConfigError> {
        let mut values = BTreeMap::new();

        for segment in port.params.split('|') {
            // Segments without '=' are tolerated and skipped.
            let Some((key, raw)) = segment.split_once('=') else {
                continue;
            };
            values.insert(key.to_string(), Value::coerce(raw));
        }

        for &key in required {
            if !values.contains_key(key) {
                return Err(ConfigError::MissingParameter {
                    param: key.to_string(),
                    port: port.id,
                });
            }
        }

        values.insert("port".to_string(), Value::Str(port.address.clone()));
        Ok(Self { values })
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the integer value for `key`, if present and an integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Returns the float value for `key`. Integers widen to float.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_float)
    }

    /// Returns the string value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Number of decoded parameters, including the injected `port` key.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no parameters were decoded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all decoded parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port_with(params: &str) -> Port {
        Port {
            id: 3,
            protocol: "modbus_rtu".into(),
            address: "/dev/ttyS0".into(),
            params: params.into(),
            sources: vec![],
        }
    }

    #[test]
    fn test_round_trip_with_coercion() {
        let port = port_with("baud=9600|parity=N|timeout=2.5");
        let params = Params::parse(&port, &["baud"]).unwrap();

        assert_eq!(params.get("baud"), Some(&Value::Int(9600)));
        assert_eq!(params.get("parity"), Some(&Value::Str("N".into())));
        assert_eq!(params.get("timeout"), Some(&Value::Float(2.5)));
        assert_eq!(params.get("port"), Some(&Value::Str("/dev/ttyS0".into())));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_missing_required_names_the_key() {
        let port = port_with("baud=9600");
        let err = Params::parse(&port, &["baud", "slave_id"]).unwrap_err();
        match err {
            ConfigError::MissingParameter { param, port } => {
                assert_eq!(param, "slave_id");
                assert_eq!(port, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let port = port_with("baud=9600|baud=19200");
        let params = Params::parse(&port, &[]).unwrap();
        assert_eq!(params.get_int("baud"), Some(19200));
    }

    #[test]
    fn test_malformed_segments_are_skipped() {
        let port = port_with("baud=9600|garbage|parity=E");
        let params = Params::parse(&port, &["baud", "parity"]).unwrap();
        assert_eq!(params.get_int("baud"), Some(9600));
        assert_eq!(params.get_str("parity"), Some("E"));
        assert!(params.get("garbage").is_none());
    }

    #[test]
    fn test_port_address_is_not_coerced() {
        let mut port = port_with("baud=9600");
        port.address = "502".into();
        let params = Params::parse(&port, &[]).unwrap();
        // The injected address stays a string even when it looks numeric.
        assert_eq!(params.get("port"), Some(&Value::Str("502".into())));
    }

    #[test]
    fn test_required_check_runs_before_injection() {
        // "port" is injected only after validation; requiring it on a port
        // whose parameter string lacks it must fail.
        let port = port_with("baud=9600");
        assert!(matches!(
            Params::parse(&port, &["port"]),
            Err(ConfigError::MissingParameter { .. })
        ));
    }
}
