//! Product catalog listing command.
//!
//! # Usage
//!
//! ```bash
//! petal catalog
//! ```

use petal_core::CATALOG;

/// Print every product in the catalog.
pub fn run() {
    #[allow(clippy::print_stdout)]
    {
        println!("Petal birth control catalog ({} methods):", CATALOG.len());
        println!();
        for product in &CATALOG {
            println!("{} [{}]", product.label, product.id);
            println!("    {}", product.description);
            println!();
        }
    }
}
