//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `catalog_core` linkage without the Flutter shell.
//! - Print the demo catalog, optionally filtered by a search query.
//!
//! Usage: `catalog_cli [query]`. Set `CATALOG_LOG_DIR` (absolute) to write
//! rolling logs there; `CATALOG_LOG_LEVEL` overrides the default level.

use catalog_core::{
    default_log_level, format_price_inr, init_logging, search_summary, ProductService,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("catalog_core ping={}", catalog_core::ping());
    println!("catalog_core version={}", catalog_core::core_version());

    if let Ok(log_dir) = std::env::var("CATALOG_LOG_DIR") {
        let level =
            std::env::var("CATALOG_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let query = std::env::args().nth(1).unwrap_or_default();
    let service = match ProductService::with_samples() {
        Ok(service) => service,
        Err(err) => {
            eprintln!("failed to seed catalog: {err}");
            return ExitCode::FAILURE;
        }
    };

    match service.search(&query) {
        Ok(hits) => {
            if let Some(summary) = search_summary(query.trim(), hits.len()) {
                println!("{summary}");
            }
            for product in hits {
                println!(
                    "{}  {:>10}  {}",
                    product.id,
                    format_price_inr(product.price),
                    product.name
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("search failed: {err}");
            ExitCode::FAILURE
        }
    }
}
