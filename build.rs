use std::env;
use std::fs;
use std::path::PathBuf;

// Pick the memory script for the selected board flavor and stage it as
// memory.x where cortex-m-rt's link.x INCLUDE can resolve it.
fn main() {
    let crate_root = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    let script = if env::var("CARGO_FEATURE_TANGNANO").is_ok() {
        crate_root.join("memory-tangnano.x")
    } else {
        crate_root.join("memory-qemu.x")
    };

    fs::copy(&script, crate_root.join("memory.x")).expect("copy memory.x -> crate root");

    println!("cargo:rustc-link-search={}", crate_root.display());
    println!("cargo:rerun-if-changed={}", script.display());
}
