//! Query-string assembly for the Alidns RPC protocol.
//!
//! Parameters are sorted by key and percent-encoded per RFC3986. This is the
//! same form the signature algorithm canonicalizes, so the signed string and
//! the sent URL always agree.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::error::{AlidnsError, Result};

/// RFC3986 percent-encoding (unreserved characters pass through).
pub(crate) fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(c),
            _ => {
                for byte in c.to_string().as_bytes() {
                    let _ = write!(out, "%{byte:02X}");
                }
            }
        }
    }
    out
}

/// Serializes a flat request struct into a sorted `key=value&...` string.
///
/// Alidns request structures are flat maps of scalars; `null` fields are
/// dropped so optional parameters never reach the wire.
pub(crate) fn to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| AlidnsError::Serialization {
        detail: e.to_string(),
    })?;

    let serde_json::Value::Object(fields) = value else {
        return Err(AlidnsError::Serialization {
            detail: "request parameters must serialize to an object".to_string(),
        });
    };

    let mut sorted = BTreeMap::new();
    for (key, field) in fields {
        let rendered = match field {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => continue,
            other => {
                return Err(AlidnsError::Serialization {
                    detail: format!("unsupported parameter value for {key}: {other}"),
                });
            }
        };
        sorted.insert(key, rendered);
    }

    Ok(sorted
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    // ---- percent_encode ----

    #[test]
    fn encode_alphanumeric() {
        assert_eq!(percent_encode("abc123"), "abc123");
    }

    #[test]
    fn encode_unreserved() {
        assert_eq!(percent_encode("-._~"), "-._~");
    }

    #[test]
    fn encode_space() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
    }

    #[test]
    fn encode_multibyte() {
        assert_eq!(percent_encode("你好"), "%E4%BD%A0%E5%A5%BD");
    }

    #[test]
    fn encode_empty() {
        assert_eq!(percent_encode(""), "");
    }

    #[test]
    fn encode_reserved_chars() {
        assert_eq!(percent_encode("/?"), "%2F%3F");
        assert_eq!(percent_encode("&="), "%26%3D");
    }

    // ---- to_query_string ----

    #[derive(Serialize)]
    struct Sample {
        #[serde(rename = "B")]
        b: String,
        #[serde(rename = "A")]
        a: String,
        #[serde(rename = "N")]
        n: i64,
        #[serde(rename = "Opt", skip_serializing_if = "Option::is_none")]
        opt: Option<String>,
    }

    #[test]
    fn keys_are_sorted() {
        let qs = to_query_string(&Sample {
            b: "2".into(),
            a: "1".into(),
            n: 7,
            opt: None,
        })
        .unwrap();
        assert_eq!(qs, "A=1&B=2&N=7");
    }

    #[test]
    fn values_are_encoded() {
        let qs = to_query_string(&Sample {
            b: "hello world".into(),
            a: "/foo".into(),
            n: 0,
            opt: None,
        })
        .unwrap();
        assert_eq!(qs, "A=%2Ffoo&B=hello%20world&N=0");
    }

    #[test]
    fn optional_present_is_included() {
        let qs = to_query_string(&Sample {
            b: "2".into(),
            a: "1".into(),
            n: 7,
            opt: Some("x".into()),
        })
        .unwrap();
        assert_eq!(qs, "A=1&B=2&N=7&Opt=x");
    }

    #[test]
    fn non_object_is_rejected() {
        let result = to_query_string(&vec!["a", "b"]);
        assert!(matches!(
            result,
            Err(crate::AlidnsError::Serialization { .. })
        ));
    }
}
