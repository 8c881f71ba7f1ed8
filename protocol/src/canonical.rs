//! The closed value model for canonical wire JSON.
//!
//! Sign bytes are JSON, but not arbitrary JSON: the format only ever needs
//! strings, integers, ordered objects, and arrays. [`CanonicalValue`] is a
//! closed tagged union over exactly those shapes. No floats (precision is
//! not negotiable in signed bytes), no booleans, no nulls — if a value
//! can't be represented, it doesn't belong in a sign payload.
//!
//! Object entries keep their insertion order on serialization *and* their
//! encounter order on deserialization. That property is what makes
//! decode-then-re-encode byte-identical, and it is why this type exists
//! instead of a `serde_json::Value` (whose maps re-sort keys).

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// CanonicalValue
// ---------------------------------------------------------------------------

/// A JSON-representable value in canonical form.
///
/// `Object` stores its entries as an ordered list of pairs, not a map:
/// canonical encoding is defined by *position*, and a hash map would throw
/// that information away. Nested objects are never re-sorted — only the
/// top level of a sign payload gets the lexical sort, and that happens in
/// the encoder, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    /// A UTF-8 string.
    String(String),
    /// A signed 64-bit integer, serialized as a JSON number.
    ///
    /// Fields the chain treats as 64-bit quantities (account numbers,
    /// sequences, gas) are *not* stored here — they cross the wire as
    /// decimal strings via [`CanonicalValue::String`]. This variant is for
    /// message payload fields that genuinely are JSON numbers.
    Int(i64),
    /// An ordered sequence of values.
    Array(Vec<CanonicalValue>),
    /// An ordered mapping of field name to value, in insertion order.
    Object(Vec<(String, CanonicalValue)>),
}

impl CanonicalValue {
    /// Builds a string value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Builds an integer value.
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Builds an array from any iterator of values.
    pub fn array(items: impl IntoIterator<Item = CanonicalValue>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Builds an ordered object from `(key, value)` pairs, preserving the
    /// iteration order.
    pub fn object<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, CanonicalValue)>,
    ) -> Self {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the string payload, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the object entries, if this is an `Object`.
    pub fn as_object(&self) -> Option<&[(String, CanonicalValue)]> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the array items, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[CanonicalValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a field by name in an object. Linear scan — canonical
    /// objects are small (single-digit entry counts).
    pub fn get(&self, key: &str) -> Option<&CanonicalValue> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Renders this value as minimal, whitespace-free UTF-8 JSON bytes.
    ///
    /// Serializing a `CanonicalValue` cannot fail: keys are strings and
    /// every variant maps directly onto a JSON production.
    pub fn to_json_vec(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("canonical value serialization is infallible")
    }

    /// Renders this value as a minimal JSON string.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).expect("canonical value serialization is infallible")
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

impl From<&str> for CanonicalValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for CanonicalValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<i64> for CanonicalValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

// ---------------------------------------------------------------------------
// Serde — order-preserving on both sides
// ---------------------------------------------------------------------------

impl Serialize for CanonicalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for CanonicalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CanonicalVisitor;

        impl<'de> Visitor<'de> for CanonicalVisitor {
            type Value = CanonicalValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a canonical JSON value (string, integer, array, or object)")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CanonicalValue::String(v.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(CanonicalValue::String(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(CanonicalValue::Int(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v).map(CanonicalValue::Int).map_err(|_| {
                    E::custom(format!("integer {} overflows the canonical value range", v))
                })
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(CanonicalValue::Array(items))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                // Entries are pushed in document order, which is exactly the
                // order serialization will replay them in.
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, CanonicalValue>()? {
                    entries.push((key, value));
                }
                Ok(CanonicalValue::Object(entries))
            }
        }

        deserializer.deserialize_any(CanonicalVisitor)
    }
}

// ---------------------------------------------------------------------------
// decimal_string — serde adapter for numbers-as-strings wire fields
// ---------------------------------------------------------------------------

/// Serializes a `u64` as its decimal string and parses it back.
///
/// The wire format never carries 64-bit quantities as JSON numbers —
/// JavaScript peers would silently round anything past 2^53. Use with
/// `#[serde(with = "crate::canonical::decimal_string")]`.
pub mod decimal_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u64>()
            .map_err(|_| de::Error::custom(format!("not a decimal integer string: {:?}", raw)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_preserves_insertion_order() {
        let value = CanonicalValue::object([
            ("zulu", CanonicalValue::int(1)),
            ("alpha", CanonicalValue::int(2)),
            ("mike", CanonicalValue::int(3)),
        ]);
        assert_eq!(value.to_json_string(), r#"{"zulu":1,"alpha":2,"mike":3}"#);
    }

    #[test]
    fn serialization_is_compact() {
        let value = CanonicalValue::object([(
            "msgs",
            CanonicalValue::array([CanonicalValue::string("a"), CanonicalValue::int(7)]),
        )]);
        let json = value.to_json_string();
        assert!(!json.contains(' '));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn decode_reencode_is_byte_identical() {
        // The round-trip property the whole type exists for: keys come back
        // in document order, not sorted.
        let raw = r#"{"type":"send","amount":5,"coins":[{"b":"x","a":"y"}]}"#;
        let value: CanonicalValue = serde_json::from_str(raw).unwrap();
        assert_eq!(value.to_json_string(), raw);
    }

    #[test]
    fn get_finds_fields_by_name() {
        let value = CanonicalValue::object([
            ("type", CanonicalValue::string("send")),
            ("amount", CanonicalValue::int(5)),
        ]);
        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("send"));
        assert_eq!(value.get("amount"), Some(&CanonicalValue::Int(5)));
        assert_eq!(value.get("missing"), None);
    }

    #[test]
    fn rejects_floats() {
        // Floats have no canonical representation; refusing them outright
        // beats quietly corrupting sign bytes.
        let err = serde_json::from_str::<CanonicalValue>("1.5");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_u64_overflow() {
        let err = serde_json::from_str::<CanonicalValue>("18446744073709551615");
        assert!(err.is_err());
    }

    #[test]
    fn utf8_strings_pass_through() {
        let value = CanonicalValue::string("mémo — überweisen ✓");
        let bytes = value.to_json_vec();
        let back: CanonicalValue = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn decimal_string_roundtrip() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Wrapper {
            #[serde(with = "decimal_string")]
            gas: u64,
        }

        let w = Wrapper { gas: 200_000 };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"gas":"200000"}"#);
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn decimal_string_rejects_numeric_json() {
        #[derive(serde::Deserialize, Debug)]
        struct Wrapper {
            #[serde(with = "decimal_string")]
            #[allow(dead_code)]
            gas: u64,
        }

        assert!(serde_json::from_str::<Wrapper>(r#"{"gas":200000}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"gas":"12x"}"#).is_err());
    }
}
