//! Build script for introspect-core
//!
//! Checks the toolchain before compilation. The crate relies on const
//! generics over arrays, `let`-`else` and char-array string patterns, all
//! stable since Rust 1.65.

fn main()
{
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::new(1, 65, 0);

        if rustc_version < min_rust_version {
            panic!("introspect-core requires Rust {min_rust_version} or newer, found {rustc_version}");
        }
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
