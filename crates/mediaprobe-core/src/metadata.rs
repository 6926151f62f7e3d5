//! Analyzer output map
//!
//! Every analyzer returns a [`Metadata`] map with a fixed, analyzer-specific
//! key set (image: width/height; video: width/height/duration/angle/audio/
//! video; audio: duration/bit_rate/sample_rate/tags; pdf: width/height/pages;
//! content type: content_type). An **empty** map is the canonical "could not
//! analyze this file" signal; absent values are omitted, never stored as
//! null or zero placeholders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed metadata map produced by one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert a value. `None`-like values must be filtered by the caller;
    /// this map never holds `Value::Null`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        debug_assert!(!value.is_null());
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_is_the_not_analyzable_signal() {
        let metadata = Metadata::new();
        assert!(metadata.is_empty());
        assert_eq!(metadata.len(), 0);
        assert_eq!(metadata.get("width"), None);
    }

    #[test]
    fn test_set_and_typed_accessors() {
        let mut metadata = Metadata::new();
        metadata.set("width", 150u64);
        metadata.set("duration", 2.0);
        metadata.set("audio", true);
        metadata.set("content_type", "image/png");

        assert!(!metadata.is_empty());
        assert_eq!(metadata.get_u64("width"), Some(150));
        assert_eq!(metadata.get_f64("duration"), Some(2.0));
        assert_eq!(metadata.get_bool("audio"), Some(true));
        assert_eq!(metadata.get_str("content_type"), Some("image/png"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut metadata = Metadata::new();
        metadata.set("width", 700u64);
        metadata.set("height", 500u64);

        let json = serde_json::to_string(&metadata).unwrap();
        let deserialized: Metadata = serde_json::from_str(&json).unwrap();

        assert_eq!(metadata, deserialized);
        assert_eq!(deserialized.get_u64("width"), Some(700));
        assert_eq!(deserialized.get_u64("height"), Some(500));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut metadata = Metadata::new();
        metadata.set("pages", 2u64);

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({"pages": 2}));
    }
}
