//! Fuzz target for rule catalog parsing.
//!
//! Goal: The catalog parsers should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(catalog) = renoguard_catalog::parse_catalog_toml(text) {
            // Listing a loaded catalog must be total.
            let _ = catalog.categories();
            let _ = catalog.count_active();
        }
        let _ = renoguard_catalog::parse_catalog_json(text);
    }
});
