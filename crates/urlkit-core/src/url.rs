//! Stateful URL object: parsed once, query/fragment parameter sets live.

use crate::params::ParamSet;
use crate::parse::{parse, ParsedUri};
use crate::path;

/// A URI parsed into addressable components with mutable query and fragment
/// parameters. Accessors recompute from current state on every call, so
/// `href` always reflects the latest mutation.
#[derive(Debug, Clone)]
pub struct Url {
    parsed: ParsedUri,
    query: ParamSet,
    fragment: ParamSet,
}

impl Url {
    /// Parses `uri` and builds both parameter sets. Never fails; malformed
    /// input degrades the same way [`parse`] does.
    pub fn new(uri: &str) -> Self {
        let parsed = parse(uri);
        let query = parsed
            .search
            .as_deref()
            .map(ParamSet::decode)
            .unwrap_or_default();
        let fragment = parsed
            .hash
            .as_deref()
            .map(ParamSet::decode)
            .unwrap_or_default();
        Self {
            parsed,
            query,
            fragment,
        }
    }

    /// Full reserialization from current state.
    pub fn href(&self) -> String {
        let mut p = self.parsed.clone();
        p.search = Some(self.query.encode()).filter(|s| !s.is_empty());
        p.hash = Some(self.fragment.encode()).filter(|s| !s.is_empty());
        p.href()
    }

    pub fn protocol(&self) -> String {
        self.parsed.protocol().to_string()
    }

    pub fn host(&self) -> String {
        self.parsed.host.clone().unwrap_or_default()
    }

    pub fn hostname(&self) -> String {
        self.parsed.hostname.clone().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.parsed.port
    }

    pub fn origin(&self) -> String {
        self.parsed.origin()
    }

    /// Full pathname (query/fragment excluded).
    pub fn filename(&self) -> String {
        self.parsed.pathname.clone()
    }

    pub fn dirname(&self) -> String {
        path::dirname_of(&self.parsed.pathname)
    }

    pub fn basename(&self) -> String {
        path::basename_of(&self.parsed.pathname)
    }

    pub fn extname(&self) -> String {
        path::extname_of(&self.parsed.pathname)
    }

    /// Current query string, no leading `?`.
    pub fn search(&self) -> String {
        self.query.encode()
    }

    /// Current fragment string, no leading `#`.
    pub fn hash(&self) -> String {
        self.fragment.encode()
    }

    /// Ordered snapshot of the query parameters.
    pub fn params(&self) -> Vec<(String, String)> {
        self.query.pairs()
    }

    /// Ordered snapshot of the fragment parameters.
    pub fn hash_params(&self) -> Vec<(String, String)> {
        self.fragment.pairs()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.query.set(key, value);
    }

    pub fn del(&mut self, key: &str) {
        self.query.del(key);
    }

    pub fn clear_param(&mut self) {
        self.query.clear();
    }

    pub fn get_hash(&self, key: &str) -> Option<&str> {
        self.fragment.get(key)
    }

    pub fn set_hash(&mut self, key: &str, value: &str) {
        self.fragment.set(key, value);
    }

    pub fn del_hash(&mut self, key: &str) {
        self.fragment.del(key);
    }

    pub fn clear_hash(&mut self) {
        self.fragment.clear();
    }

    /// Relative path from this URL's location to `to`.
    pub fn relative(&self, to: &str) -> String {
        path::relative(&self.href(), to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "http://ngui.io/home/index.html?a=a&b=b#c=c&d=d";

    #[test]
    fn properties_after_construction() {
        let u = Url::new(URI);
        assert_eq!(u.href(), URI);
        assert_eq!(u.protocol(), "http");
        assert_eq!(u.host(), "ngui.io");
        assert_eq!(u.hostname(), "ngui.io");
        assert_eq!(u.origin(), "http://ngui.io");
        assert_eq!(u.port(), None);
        assert_eq!(u.filename(), "/home/index.html");
        assert_eq!(u.dirname(), "/home");
        assert_eq!(u.basename(), "index.html");
        assert_eq!(u.extname(), ".html");
        assert_eq!(u.search(), "a=a&b=b");
        assert_eq!(u.hash(), "c=c&d=d");
        assert_eq!(
            u.params(),
            vec![
                ("a".to_string(), "a".to_string()),
                ("b".to_string(), "b".to_string()),
            ]
        );
        assert_eq!(
            u.hash_params(),
            vec![
                ("c".to_string(), "c".to_string()),
                ("d".to_string(), "d".to_string()),
            ]
        );
    }

    #[test]
    fn set_updates_href_in_place() {
        let mut u = Url::new(URI);
        u.set("a", "A");
        assert_eq!(u.get("a"), Some("A"));
        assert_eq!(u.href(), "http://ngui.io/home/index.html?a=A&b=b#c=c&d=d");
    }

    #[test]
    fn del_removes_from_href() {
        let mut u = Url::new(URI);
        u.del("a");
        assert_eq!(u.get("a"), None);
        assert_eq!(u.href(), "http://ngui.io/home/index.html?b=b#c=c&d=d");
    }

    #[test]
    fn clear_param_drops_question_mark() {
        let mut u = Url::new(URI);
        u.clear_param();
        assert!(u.params().is_empty());
        assert_eq!(u.href(), "http://ngui.io/home/index.html#c=c&d=d");
    }

    #[test]
    fn hash_mutations_mirror_query_mutations() {
        let mut u = Url::new(URI);
        assert_eq!(u.get_hash("a"), None);
        u.set_hash("k", "K");
        // Setting the same pair twice is idempotent.
        u.set_hash("k", "K");
        assert_eq!(
            u.href(),
            "http://ngui.io/home/index.html?a=a&b=b#c=c&d=d&k=K"
        );
        u.del_hash("c");
        assert_eq!(u.get_hash("c"), None);
        u.clear_hash();
        assert_eq!(u.href(), "http://ngui.io/home/index.html?a=a&b=b");
    }

    #[test]
    fn relative_from_own_location() {
        let u = Url::new(URI);
        assert_eq!(u.relative("http://ngui.io/A/B/C/test.js"), "../../A/B/C/test.js");
    }

    #[test]
    fn mutation_survives_reparse() {
        let mut u = Url::new(URI);
        u.set("a", "A");
        u.clear_hash();
        let again = Url::new(&u.href());
        assert_eq!(again.get("a"), Some("A"));
        assert!(again.hash_params().is_empty());
    }
}
