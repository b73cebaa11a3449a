//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quotevault_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use quotevault_core::{QuoteService, SqliteQuoteRepository};

fn main() {
    println!("quotevault_core version={}", quotevault_core::core_version());

    let repo = match SqliteQuoteRepository::open_in_memory() {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("quotevault_core open failed: {err}");
            std::process::exit(1);
        }
    };

    let service = QuoteService::new(repo);
    match service.add_quote("smoke", "in-memory store is wired") {
        Ok(id) => println!(
            "quotevault_core smoke add id={id} count={}",
            service.quote_count()
        ),
        Err(err) => {
            eprintln!("quotevault_core smoke add failed: {err}");
            std::process::exit(1);
        }
    }
}
