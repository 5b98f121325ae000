use std::collections::{BTreeMap, HashMap};

/// Per-request values the host has already resolved from the URL.
pub trait RequestContext {
    /// Query variable by name (`paged`, `page`, ...).
    fn query_var(&self, name: &str) -> Option<String>;

    /// Link template for page numbers, with `%#%` standing in for the number.
    fn page_url_template(&self) -> String {
        "?paged=%#%".to_string()
    }
}

impl RequestContext for HashMap<String, String> {
    fn query_var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl RequestContext for BTreeMap<String, String> {
    fn query_var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl RequestContext for [(&str, &str)] {
    fn query_var(&self, name: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}
