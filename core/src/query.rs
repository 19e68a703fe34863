//! Query-string parameters for a single operation call.
//!
//! Parameters keep insertion order. An absent optional value is never
//! written, so there is no way to send an empty or `null` parameter by
//! accident.

use std::fmt;

/// A scalar query value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Str(s.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Int(n.into())
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

/// Ordered parameter list, built fresh for every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally. A repeated name replaces the
    /// earlier value in place.
    pub fn push(&mut self, name: &'static str, value: impl Into<QueryValue>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == name) {
            Some(i) => self.pairs[i].1 = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    /// Add a parameter only when a value is present.
    pub fn push_opt<V: Into<QueryValue>>(&mut self, name: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Name/rendered-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_opt_skips_none() {
        let mut q = QueryParams::new();
        q.push("airport", "KSFO").push_opt::<u32>("howMany", None);
        assert_eq!(q.len(), 1);
        assert!(!q.contains("howMany"));
    }

    #[test]
    fn push_opt_keeps_exact_value() {
        let mut q = QueryParams::new();
        q.push_opt("howMany", Some(15u32));
        assert_eq!(q.get("howMany"), Some(&QueryValue::Int(15)));
    }

    #[test]
    fn repeated_name_replaces_in_place() {
        let mut q = QueryParams::new();
        q.push("offset", 0i64).push("airport", "KSFO").push("offset", 30i64);
        let rendered: Vec<_> = q.iter().collect();
        assert_eq!(
            rendered,
            vec![("offset", "30".to_string()), ("airport", "KSFO".to_string())]
        );
    }

    #[test]
    fn floats_render_shortest_form() {
        assert_eq!(QueryValue::Float(37.6188).to_string(), "37.6188");
        assert_eq!(QueryValue::Float(-122.0).to_string(), "-122");
    }
}
