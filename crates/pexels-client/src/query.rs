//! Helpers for turning typed request parameters into query string pairs.
//!
//! Every parameter record hand-writes a `query_pairs` method out of these
//! two building blocks, listing its fields in declaration order. A field
//! holding its zero value (empty string, integer 0) is left out of the
//! query string entirely.

pub(crate) type QueryPairs = Vec<(&'static str, String)>;

pub(crate) fn non_empty(key: &'static str, value: &str) -> Option<(&'static str, String)> {
    (!value.is_empty()).then(|| (key, value.to_owned()))
}

pub(crate) fn non_zero(key: &'static str, value: u32) -> Option<(&'static str, String)> {
    (value != 0).then(|| (key, value.to_string()))
}
