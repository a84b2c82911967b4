//! Stateless string-in/value-out surface mirroring the [`Url`] object.
//!
//! Each function parses, reads or mutates, and reserializes in one shot.
//! Together with the re-exports this module is the complete module-level
//! surface: component accessors, parameter mutation, path algebra, platform
//! directories, and working-directory control.

pub use crate::dirs::{documents, executable, resources, temp};
pub use crate::path::{basename, dirname, extname, filename, is_absolute, relative, resolve};
pub use crate::workdir::{chdir, cwd, restore};

use crate::parse::parse;
use crate::url::Url;

/// Scheme name; empty string when the URI has none.
pub fn protocol(uri: &str) -> String {
    Url::new(uri).protocol()
}

/// Authority with port; empty string for authority-less URIs.
pub fn host(uri: &str) -> String {
    Url::new(uri).host()
}

/// Authority without port; empty string for authority-less URIs.
pub fn hostname(uri: &str) -> String {
    Url::new(uri).hostname()
}

/// `protocol://host` when both are present, empty otherwise.
pub fn origin(uri: &str) -> String {
    Url::new(uri).origin()
}

pub fn port(uri: &str) -> Option<u16> {
    parse(uri).port
}

/// Query string without the leading `?`; empty when absent.
pub fn search(uri: &str) -> String {
    parse(uri).search.unwrap_or_default()
}

/// Fragment without the leading `#`; empty when absent.
pub fn hash(uri: &str) -> String {
    parse(uri).hash.unwrap_or_default()
}

/// Ordered query parameters.
pub fn params(uri: &str) -> Vec<(String, String)> {
    Url::new(uri).params()
}

/// Ordered fragment parameters.
pub fn hash_params(uri: &str) -> Vec<(String, String)> {
    Url::new(uri).hash_params()
}

pub fn get(uri: &str, key: &str) -> Option<String> {
    Url::new(uri).get(key).map(str::to_string)
}

/// Returns `uri` with the query parameter `key` set to `value`.
pub fn set(uri: &str, key: &str, value: &str) -> String {
    let mut u = Url::new(uri);
    u.set(key, value);
    u.href()
}

/// Returns `uri` without the query parameter `key`.
pub fn del(uri: &str, key: &str) -> String {
    let mut u = Url::new(uri);
    u.del(key);
    u.href()
}

/// Returns `uri` with an empty query.
pub fn clear_param(uri: &str) -> String {
    let mut u = Url::new(uri);
    u.clear_param();
    u.href()
}

pub fn get_hash(uri: &str, key: &str) -> Option<String> {
    Url::new(uri).get_hash(key).map(str::to_string)
}

/// Returns `uri` with the fragment parameter `key` set to `value`.
pub fn set_hash(uri: &str, key: &str, value: &str) -> String {
    let mut u = Url::new(uri);
    u.set_hash(key, value);
    u.href()
}

/// Returns `uri` without the fragment parameter `key`.
pub fn del_hash(uri: &str, key: &str) -> String {
    let mut u = Url::new(uri);
    u.del_hash(key);
    u.href()
}

/// Returns `uri` with an empty fragment.
pub fn clear_hash(uri: &str) -> String {
    let mut u = Url::new(uri);
    u.clear_hash();
    u.href()
}
