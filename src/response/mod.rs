use std::collections::HashMap;

use serde_json::Value;

/// Parsed result of one gateway exchange.
///
/// The gateway answers either with a JSON object (when `e_return=1` was
/// requested) or with plain `key=value&...` text. Both decode into the same
/// flat field set; the undecoded body is kept for callers that need it.
#[derive(Debug, Clone)]
pub struct Transaction {
    fields: HashMap<String, String>,
    raw: String,
}

impl Transaction {
    /// Decode a raw response body.
    ///
    /// JSON object bodies are flattened field-wise with scalar values
    /// stringified; non-JSON bodies are read as `key=value&` pairs. A body
    /// in neither shape is retained under the single key `raw`.
    pub fn from_body(body: &str) -> Self {
        let mut fields = HashMap::new();

        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            for (key, value) in map {
                let value = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                fields.insert(key, value);
            }
        } else if body.contains('=') {
            for pair in body.trim().split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    fields.insert(key.to_string(), value.to_string());
                }
            }
        } else {
            fields.insert("raw".to_string(), body.to_string());
        }

        Self {
            fields,
            raw: body.to_string(),
        }
    }

    /// Look up a response field by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The gateway's overall result code (`"1"` success, `"0"` failure)
    pub fn result(&self) -> Option<&str> {
        self.get("result")
    }

    /// The gateway's human-readable return message, empty if absent
    pub fn return_message(&self) -> &str {
        self.get("ret_msg").unwrap_or("")
    }

    pub fn is_success(&self) -> bool {
        self.result() == Some("1")
    }

    /// The undecoded response body
    pub fn raw_body(&self) -> &str {
        &self.raw
    }
}
