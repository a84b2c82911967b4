//! `urlkit relative` – shortest relative path between two URIs.

use urlkit_core::path;

pub fn run_relative(from: &str, to: &str) {
    println!("{}", path::relative(from, to));
}
