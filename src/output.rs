//! JSON rendering of query descriptors.
//!
//! Output is deterministic: descriptor maps are ordered and `serde_json`'s
//! object keys are sorted, so the same translation always renders the same
//! text.
//!
//! # Formats
//!
//! - **Compact** via [`to_json()`] - minimal whitespace
//! - **Pretty** via [`to_json_pretty()`] - 2-space indentation
//!
//! # Filter shapes
//!
//! Predicates render in the document-store's operator vocabulary: `=`
//! becomes the bare value, `!=` becomes `{"$ne": v}`, `>` becomes
//! `{"$gt": v}`.
//!
//! # Examples
//!
//! ```
//! use sqldoc::translate_sql;
//! use sqldoc::output::to_json;
//!
//! let translation = translate_sql("select * from test where a != 2;").unwrap();
//! assert_eq!(
//!     to_json(&translation),
//!     r#"{"collection":"test","explain":false,"filter":{"a":{"$ne":2}},"projection":{}}"#
//! );
//! ```

use serde_json::{json, Map, Value as Json};

use crate::translate::{Predicate, QueryDescriptor, Translation};
use crate::value::Value;

/// Render a translation as compact JSON.
///
/// A collapsed single-statement translation renders as one object; a
/// sequence renders as an array, even when empty.
pub fn to_json(translation: &Translation) -> String {
    translation_json(translation).to_string()
}

/// Render a translation as pretty-printed JSON with 2-space indentation.
pub fn to_json_pretty(translation: &Translation) -> String {
    let json = translation_json(translation);
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

fn translation_json(translation: &Translation) -> Json {
    match translation {
        Translation::One(descriptor) => descriptor_json(descriptor),
        Translation::Many(descriptors) => {
            Json::Array(descriptors.iter().map(descriptor_json).collect())
        }
    }
}

fn descriptor_json(descriptor: &QueryDescriptor) -> Json {
    let projection: Map<String, Json> = descriptor
        .projection
        .iter()
        .map(|(field, flag)| (field.clone(), json!(flag)))
        .collect();

    let filter: Map<String, Json> = descriptor
        .filter
        .iter()
        .map(|(field, predicate)| (field.clone(), predicate_json(predicate)))
        .collect();

    json!({
        "collection": descriptor.collection,
        "projection": projection,
        "filter": filter,
        "explain": descriptor.explain,
    })
}

fn predicate_json(predicate: &Predicate) -> Json {
    match predicate {
        Predicate::Eq(value) => value_json(value),
        Predicate::Ne(value) => json!({ "$ne": value_json(value) }),
        Predicate::Gt(value) => json!({ "$gt": value_json(value) }),
    }
}

fn value_json(value: &Value) -> Json {
    match value {
        Value::Integer(n) => Json::from(*n),
        Value::Float(n) => Json::from(*n),
        Value::String(s) => Json::from(s.as_str()),
    }
}
