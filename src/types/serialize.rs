//! `serde` support for the detail bag.
//!
//! Detail values serialize as their natural JSON-like shape. Faults and
//! opaque values cannot be rebuilt from data, so they serialize one way only:
//! a fault as its rendered message, an opaque value as its type name.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::detail_value::DetailValue;
use crate::types::details::Details;

impl Serialize for DetailValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DetailValue::Text(text) => serializer.serialize_str(text),
            DetailValue::Int(value) => serializer.serialize_i64(*value),
            DetailValue::Float(value) => serializer.serialize_f64(*value),
            DetailValue::Bool(value) => serializer.serialize_bool(*value),
            DetailValue::Fault(fault) => serializer.collect_str(fault),
            DetailValue::Opaque(opaque) => serializer.serialize_str(opaque.type_name()),
        }
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
