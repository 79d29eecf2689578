//! Build script for the pointer remote firmware
//!
//! Handles:
//! - Memory layout configuration
//! - Linker scripts for the embedded binary

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (`--features std`) link against the system toolchain
    if std::env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    // memory.x is generated by embassy-stm32 (memory-x feature); also honour a local override
    println!("cargo:rerun-if-changed=memory.x");
    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        println!("cargo:rustc-link-search={dir}");
    }

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
