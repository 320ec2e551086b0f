//! Command schemas and query-string encoding.
//!
//! Every CloudStack operation is a GET whose query string names the command
//! and carries its parameters. A [`CommandSpec`] declares, per command, which
//! parameters are required and in what order they are sent, how the response
//! is shaped and what a 404 means.

use std::fmt::{self, Display, Write as _};

use crate::ClientError;

/// Where the payload sits inside a command's JSON response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The first value stored under this key, searched depth-first.
    Named(&'static str),
    /// The single value inside `{"<command>response": ...}`.
    UnwrapOnly,
    /// The body carries nothing the caller needs.
    Discard,
}

/// What a 404 from the server turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// An empty collection.
    EmptyOnNotFound,
    /// `None`.
    NullOnNotFound,
    /// `()`.
    VoidOnNotFound,
    /// [`ClientError::NotFound`].
    Error,
}

/// Declarative description of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Wire name sent as `command=`.
    pub name: &'static str,
    /// List commands get `listAll=true` unless the caller sets `listAll`.
    pub list: bool,
    /// Required parameters, in the order they are encoded.
    pub required: &'static [&'static str],
    pub shape: ResponseShape,
    pub fallback: Fallback,
}

impl CommandSpec {
    /// A list command returning every item stored under `key`.
    #[must_use]
    pub const fn list(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            list: true,
            required: &[],
            shape: ResponseShape::Named(key),
            fallback: Fallback::EmptyOnNotFound,
        }
    }

    /// A list command narrowed to a single item by `required`.
    #[must_use]
    pub const fn get(name: &'static str, key: &'static str, required: &'static [&'static str]) -> Self {
        Self {
            name,
            list: true,
            required,
            shape: ResponseShape::Named(key),
            fallback: Fallback::NullOnNotFound,
        }
    }

    /// A non-list command.
    #[must_use]
    pub const fn command(
        name: &'static str,
        required: &'static [&'static str],
        shape: ResponseShape,
        fallback: Fallback,
    ) -> Self {
        Self { name, list: false, required, shape, fallback }
    }

    /// Replaces the required parameter list.
    #[must_use]
    pub const fn requiring(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    /// Encodes `params` into the command's canonical parameter order.
    ///
    /// The result starts with `command`, then `listAll` for list commands,
    /// then the required parameters in schema order, then every other
    /// parameter in the order the caller set it.
    ///
    /// # Errors
    /// Returns [`ClientError::MissingParameter`] if a required parameter is
    /// not present in `params`.
    pub fn encode(&self, params: &QueryParams) -> Result<QueryParams, ClientError> {
        let mut encoded = QueryParams::new();
        encoded.set("command", self.name);
        if self.list {
            encoded.set("listAll", params.get("listAll").unwrap_or("true"));
        }
        for &key in self.required {
            let value = params.get(key).ok_or_else(|| ClientError::MissingParameter {
                command: self.name.to_owned(),
                parameter: key.to_owned(),
            })?;
            encoded.set(key, value);
        }
        for (key, value) in params.iter() {
            if !encoded.contains(key) {
                encoded.set(key, value);
            }
        }
        Ok(encoded)
    }
}

/// An ordered set of query parameters.
///
/// Setting a key that is already present replaces its value in place, so the
/// first insertion fixes the key's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the wire rendering of `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder form of [`QueryParams::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key` to the comma-joined rendering of `values`.
    pub fn set_list<I>(&mut self, key: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut joined = String::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                joined.push(',');
            }
            let _ = write!(joined, "{value}");
        }
        self.set(key, joined)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets every parameter of `other`, in its order.
    pub fn merge(&mut self, other: QueryParams) -> &mut Self {
        for (key, value) in other.entries {
            self.set(key, value);
        }
        self
    }

    /// Renders `k=v&k=v` with request-line escaping.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(&encode_request_value(key));
            out.push('=');
            out.push_str(&encode_request_value(value));
        }
        out
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Percent-encodes everything except RFC 3986 unreserved characters.
///
/// This is the encoding the signature is computed over.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    encode_with(raw, |_| false)
}

/// Percent-encodes for the request line, leaving `/` and `,` readable.
#[must_use]
pub fn encode_request_value(raw: &str) -> String {
    encode_with(raw, |b| b == b'/' || b == b',')
}

fn encode_with(raw: &str, keep: impl Fn(u8) -> bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for &b in raw.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') || keep(b) {
            out.push(char::from(b));
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}
