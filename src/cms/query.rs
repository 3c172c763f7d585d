//! Query predicates and options

/// A single query predicate, serialized into the `q=` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact match on a document path
    At { path: String, value: String },
    /// Date strictly after the given timestamp
    DateAfter { path: String, value: String },
    /// Date strictly before the given timestamp
    DateBefore { path: String, value: String },
}

impl Predicate {
    /// Match `path` exactly against `value`
    pub fn at(path: &str, value: &str) -> Self {
        Self::At {
            path: path.to_string(),
            value: value.to_string(),
        }
    }

    /// Match documents whose `path` date lies after `value`
    pub fn date_after(path: &str, value: &str) -> Self {
        Self::DateAfter {
            path: path.to_string(),
            value: value.to_string(),
        }
    }

    /// Match documents whose `path` date lies before `value`
    pub fn date_before(path: &str, value: &str) -> Self {
        Self::DateBefore {
            path: path.to_string(),
            value: value.to_string(),
        }
    }

    /// Render the predicate in the API's bracketed form
    pub fn to_query(&self) -> String {
        match self {
            Self::At { path, value } => format!(r#"[at({}, "{}")]"#, path, value),
            Self::DateAfter { path, value } => {
                format!(r#"[date.after({}, "{}")]"#, path, value)
            }
            Self::DateBefore { path, value } => {
                format!(r#"[date.before({}, "{}")]"#, path, value)
            }
        }
    }
}

/// Render a predicate set as the full `q=` parameter value
pub fn predicates_query(predicates: &[Predicate]) -> String {
    let inner: String = predicates.iter().map(|p| p.to_query()).collect();
    format!("[{}]", inner)
}

/// Result ordering on a document path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub path: String,
    pub descending: bool,
}

impl Ordering {
    /// Ascending order on `path`
    pub fn ascending(path: &str) -> Self {
        Self {
            path: path.to_string(),
            descending: false,
        }
    }

    /// Descending order on `path`
    pub fn descending(path: &str) -> Self {
        Self {
            path: path.to_string(),
            descending: true,
        }
    }

    fn to_query(&self) -> String {
        if self.descending {
            format!("[{} desc]", self.path)
        } else {
            format!("[{}]", self.path)
        }
    }
}

/// Options applied to a search query
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Restrict returned document data to these fields
    pub fetch: Vec<String>,
    /// Results per page
    pub page_size: Option<usize>,
    /// Result ordering
    pub orderings: Option<Ordering>,
}

impl QueryOptions {
    /// Fetch only the named `type.field` paths
    pub fn fetch(mut self, fields: &[&str]) -> Self {
        self.fetch = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the result ordering
    pub fn order_by(mut self, ordering: Ordering) -> Self {
        self.orderings = Some(ordering);
        self
    }

    /// Render the options as query parameters
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if !self.fetch.is_empty() {
            params.push(("fetch".to_string(), self.fetch.join(",")));
        }
        if let Some(size) = self.page_size {
            params.push(("pageSize".to_string(), size.to_string()));
        }
        if let Some(ordering) = &self.orderings {
            params.push(("orderings".to_string(), ordering.to_query()));
        }

        params
    }
}
