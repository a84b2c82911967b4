//! `urlkit parse` – decompose a URI into its components.

use anyhow::Result;
use urlkit_core::parse::parse;

pub fn run_parse(uri: &str, json: bool) -> Result<()> {
    let parsed = parse(uri);

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    let opt = |v: Option<&str>| v.unwrap_or("-").to_string();
    println!("{:<10} {}", "href", parsed.href());
    println!("{:<10} {}", "protocol", opt(parsed.scheme.name()));
    println!("{:<10} {}", "host", opt(parsed.host.as_deref()));
    println!("{:<10} {}", "hostname", opt(parsed.hostname.as_deref()));
    println!(
        "{:<10} {}",
        "port",
        parsed.port.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("{:<10} {}", "origin", parsed.origin());
    println!("{:<10} {}", "pathname", parsed.pathname);
    println!("{:<10} {}", "search", opt(parsed.search.as_deref()));
    println!("{:<10} {}", "hash", opt(parsed.hash.as_deref()));

    Ok(())
}
