//! Build script for the finder crate.
//!
//! Fingerprints the stylesheet so templates can link an immutable asset
//! name. The short hash lands in the `CSS_HASH` compile-time env var and
//! a `derived/main.<hash>.css` copy is written for `ServeDir` to serve.

use std::env;
use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

const STYLESHEET: &str = "static/css/main.css";

fn main() {
    let manifest_dir: PathBuf = env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR must be set by Cargo")
        .into();
    let source = manifest_dir.join(STYLESHEET);
    println!("cargo:rerun-if-changed={}", source.display());

    // The stylesheet is committed with the crate; a missing file is a
    // broken checkout, not a condition to build through.
    let content = fs::read(&source)
        .unwrap_or_else(|e| panic!("{STYLESHEET} must exist before building: {e}"));

    let digest = format!("{:x}", Sha256::digest(&content));
    let (fingerprint, _) = digest.split_at(8);
    println!("cargo:rustc-env=CSS_HASH={fingerprint}");

    let derived_dir = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived_dir).expect("derived css directory should be writable");
    fs::copy(&source, derived_dir.join(format!("main.{fingerprint}.css")))
        .expect("hashed stylesheet copy should succeed");
}
