//! Composable query options for list operations.
//!
//! List endpoints accept an open-ended set of URL parameters. Options are
//! small, infallible transformations applied in order to an accumulated
//! parameter map, so new options can be added without changing any query
//! signature.

use std::collections::BTreeMap;

/// Accumulated URL query parameters for a list operation.
#[derive(Default)]
pub struct QueryOptions {
    params: BTreeMap<String, String>,
}

impl QueryOptions {
    /// Set one parameter. Re-setting a name replaces its value; distinct
    /// names accumulate.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Apply a sequence of options to an empty parameter map.
    pub(crate) fn apply(opts: &[QueryOption]) -> Self {
        let mut options = Self::default();
        for opt in opts {
            (opt.apply)(&mut options);
        }
        options
    }

    /// Append the encoded parameters to `path`, returning it unchanged
    /// when no parameter was set.
    pub(crate) fn append_to(&self, path: &str) -> String {
        if self.params.is_empty() {
            return path.to_string();
        }

        let mut encoder = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.params {
            encoder.append_pair(name, value);
        }
        format!("{}?{}", path, encoder.finish())
    }

    #[cfg(test)]
    fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.params.len()
    }
}

/// One transformation of [`QueryOptions`], applied in sequence.
///
/// Options never fail: an option whose value is the default (zero or
/// empty) sets nothing.
pub struct QueryOption {
    apply: Box<dyn Fn(&mut QueryOptions) + Send + Sync>,
}

impl QueryOption {
    /// Build an option from a closure over the parameter map.
    pub fn new(apply: impl Fn(&mut QueryOptions) + Send + Sync + 'static) -> Self {
        Self { apply: Box::new(apply) }
    }
}

/// Sets the `pageSize` URL parameter. Zero is a no-op.
pub fn with_page_size(page_size: u32) -> QueryOption {
    QueryOption::new(move |opts| {
        if page_size > 0 {
            opts.set("pageSize", page_size.to_string());
        }
    })
}

/// Sets the `pageNumber` URL parameter. Zero is a no-op.
pub fn with_page_number(page_number: u32) -> QueryOption {
    QueryOption::new(move |opts| {
        if page_number > 0 {
            opts.set("pageNumber", page_number.to_string());
        }
    })
}

/// Sets the `filter` URL parameter. An empty expression is a no-op.
pub fn with_filter_expression(filter_exp: impl Into<String>) -> QueryOption {
    let filter_exp = filter_exp.into();
    QueryOption::new(move |opts| {
        if !filter_exp.is_empty() {
            opts.set("filter", filter_exp.clone());
        }
    })
}

/// Sets the `sort` URL parameter. An empty expression is a no-op.
pub fn with_sort_expression(sort_exp: impl Into<String>) -> QueryOption {
    let sort_exp = sort_exp.into();
    QueryOption::new(move |opts| {
        if !sort_exp.is_empty() {
            opts.set("sort", sort_exp.clone());
        }
    })
}
