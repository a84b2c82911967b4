//! `urlkit resolve` – fold `.`/`..` references onto a base URI.

use urlkit_core::path;

pub fn run_resolve(base: &str, refs: &[String]) {
    let refs: Vec<&str> = refs.iter().map(String::as_str).collect();
    println!("{}", path::resolve(base, &refs));
}
