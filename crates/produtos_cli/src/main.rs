//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `produtos_core` wiring end to
//!   end against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use produtos_core::{
    open_db_in_memory, Product, ProductService, SqliteProductRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("produtos_core version={}", produtos_core::core_version());

    match smoke_check() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("smoke check failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn smoke_check() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteProductRepository::try_new(&conn)?;
    let service = ProductService::new(repo);

    let saved = service.register_product(Product::new("Monitor 4K", 1800.00, 10, "Eletrônicos"))?;
    println!(
        "registered id={} nome={}",
        saved.id.ok_or("missing generated id")?,
        saved.name
    );

    let stored = service.list_products()?;
    println!("stored products={}", stored.len());
    Ok(())
}
