//! HTTP request building with Affinity-specific conventions.

use std::collections::HashMap;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) form: Option<FormBody>,
    pub(crate) basic_auth: Option<(String, String)>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            form: None,
            basic_auth: None,
        }
    }

    /// Set HTTP Basic credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter only when `value` is present.
    pub fn query_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(name, v.to_string()),
            None => self,
        }
    }

    /// Set form body.
    pub fn form(mut self, data: FormBody) -> Self {
        self.form = Some(data);
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        self
    }

    /// The target URL with query parameters appended, `?` before the first
    /// and `&` between the rest, values percent-encoded.
    pub fn full_url(&self) -> Result<String> {
        if self.query_params.is_empty() {
            return Ok(self.url.clone());
        }
        let mut url = url::Url::parse(&self.url)?;
        url.query_pairs_mut().extend_pairs(&self.query_params);
        Ok(url.into())
    }
}

/// A form-encoded request body.
///
/// Array fields are sent as repeated `name[]=value` pairs, which is how the
/// Affinity API expects list-valued parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    /// Create an empty form body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scalar field.
    pub fn field(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a scalar field only when `value` is present.
    pub fn field_opt<V: ToString>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self,
        }
    }

    /// Add an array field as `name[]=a&name[]=b`.
    pub fn array<V: ToString>(mut self, name: &str, values: &[V]) -> Self {
        let key = format!("{}[]", name);
        for v in values {
            self.pairs.push((key.clone(), v.to_string()));
        }
        self
    }

    /// Add an array field only when `values` is present.
    pub fn array_opt<V: ToString>(self, name: &str, values: Option<&[V]>) -> Self {
        match values {
            Some(v) => self.array(name, v),
            None => self,
        }
    }

    /// Add an arbitrary JSON value.
    ///
    /// Strings are sent raw, arrays as `name[]` pairs, `null` is omitted and
    /// everything else is sent as its JSON text.
    pub fn json_value(mut self, name: &str, value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => self,
            Value::String(s) => self.field(name, s),
            Value::Array(items) => {
                let key = format!("{}[]", name);
                for item in items {
                    let text = match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    self.pairs.push((key.clone(), text));
                }
                self
            }
            other => self.field(name, other),
        }
    }

    /// Field pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}
