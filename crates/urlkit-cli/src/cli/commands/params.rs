//! `urlkit params` – show query and fragment parameters of a URI.

use anyhow::Result;
use urlkit_core::ops;

pub fn run_params(uri: &str, json: bool) -> Result<()> {
    let params = ops::params(uri);
    let hash_params = ops::hash_params(uri);

    if json {
        let out = serde_json::json!({
            "params": params,
            "hash_params": hash_params,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if params.is_empty() && hash_params.is_empty() {
        println!("No parameters.");
        return Ok(());
    }
    for (section, pairs) in [("query", &params), ("fragment", &hash_params)] {
        if pairs.is_empty() {
            continue;
        }
        println!("{section}:");
        for (key, value) in pairs {
            println!("  {:<16} {}", key, value);
        }
    }

    Ok(())
}
