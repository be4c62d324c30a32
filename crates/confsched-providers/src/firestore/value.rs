//! Wire types of a Firestore `runQuery` response.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One element of the `runQuery` response array.
///
/// Elements without a document (e.g. a trailing `readTime`-only entry) are
/// valid and carry no event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub document: Option<Document>,
}

/// A stored document: its full resource name and typed fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl Document {
    /// The document id: the last `/`-separated segment of the name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A typed Firestore value.
///
/// The JSON form is externally tagged (`{"stringValue": "..."}`); any other
/// tag is a decode error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Value {
    #[serde(rename = "stringValue")]
    String(String),
    /// 64-bit integers travel as decimal strings.
    #[serde(rename = "integerValue")]
    Integer(String),
    #[serde(rename = "booleanValue")]
    Boolean(bool),
    #[serde(rename = "doubleValue")]
    Double(f64),
    #[serde(rename = "timestampValue")]
    Timestamp(String),
    #[serde(rename = "nullValue")]
    Null,
    #[serde(rename = "referenceValue")]
    Reference(String),
    #[serde(rename = "arrayValue")]
    Array(ArrayValue),
    #[serde(rename = "mapValue")]
    Map(MapValue),
}

/// Body of an `arrayValue`; empty arrays omit `values`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// Body of a `mapValue`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl MapValue {
    /// Returns a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Value {
    /// The string payload of a `stringValue`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The parsed payload of an `integerValue`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The elements of an `arrayValue`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(array) => Some(&array.values),
            _ => None,
        }
    }

    /// The body of a `mapValue`.
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Value, serde_json::Error> {
        serde_json::from_str(json)
    }

    mod kinds {
        use super::*;

        #[test]
        fn scalars() {
            assert_eq!(parse(r#"{"stringValue":"hi"}"#).unwrap().as_str(), Some("hi"));
            assert_eq!(parse(r#"{"integerValue":"48011"}"#).unwrap().as_i64(), Some(48011));
            assert_eq!(
                parse(r#"{"booleanValue":true}"#).unwrap(),
                Value::Boolean(true)
            );
            assert_eq!(parse(r#"{"doubleValue":1.5}"#).unwrap(), Value::Double(1.5));
            assert_eq!(parse(r#"{"nullValue":null}"#).unwrap(), Value::Null);
            assert_eq!(
                parse(r#"{"timestampValue":"2025-08-08T16:00:00Z"}"#).unwrap(),
                Value::Timestamp("2025-08-08T16:00:00Z".to_string())
            );
        }

        #[test]
        fn integer_not_a_number() {
            let value = parse(r#"{"integerValue":"abc"}"#).unwrap();
            assert!(value.as_i64().is_none());
        }

        #[test]
        fn accessors_are_kind_strict() {
            let value = parse(r#"{"integerValue":"7"}"#).unwrap();
            assert!(value.as_str().is_none());
            let value = parse(r#"{"stringValue":"7"}"#).unwrap();
            assert!(value.as_i64().is_none());
        }

        #[test]
        fn nested() {
            let value = parse(
                r#"{"arrayValue":{"values":[
                    {"mapValue":{"fields":{"title":{"stringValue":"ACME"}}}},
                    {"integerValue":"1"}
                ]}}"#,
            )
            .unwrap();
            let items = value.as_array().unwrap();
            assert_eq!(items.len(), 2);
            let map = items[0].as_map().unwrap();
            assert_eq!(map.field("title").and_then(Value::as_str), Some("ACME"));
        }

        #[test]
        fn empty_array_and_map() {
            assert_eq!(parse(r#"{"arrayValue":{}}"#).unwrap().as_array(), Some(&[][..]));
            assert!(parse(r#"{"mapValue":{}}"#).unwrap().as_map().unwrap().fields.is_empty());
        }

        #[test]
        fn unknown_kind_is_an_error() {
            assert!(parse(r#"{"geoPointValue":{"latitude":1,"longitude":2}}"#).is_err());
            assert!(parse(r#"{"bytesValue":"AAAA"}"#).is_err());
        }
    }

    #[test]
    fn document_id_is_last_segment() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/conferences/DEFCON33/events/58210"
                .to_string(),
            fields: HashMap::new(),
        };
        assert_eq!(doc.id(), "58210");

        let bare = Document {
            name: "58210".to_string(),
            fields: HashMap::new(),
        };
        assert_eq!(bare.id(), "58210");
    }

    #[test]
    fn response_without_document() {
        let responses: Vec<QueryResponse> =
            serde_json::from_str(r#"[{"readTime":"2025-08-08T00:00:00Z"}]"#).unwrap();
        assert!(responses[0].document.is_none());
    }
}
