//! Generate `include/urban_ffi.h` from the `extern "C"` surface.

use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let header = PathBuf::from(&crate_dir).join("include").join("urban_ffi.h");

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    // Header failures are reported as warnings only.
    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("URBAN_FFI_H")
        .generate()
    {
        Ok(bindings) => {
            if let Some(dir) = header.parent() {
                let _ = std::fs::create_dir_all(dir);
            }
            bindings.write_to_file(&header);
        }
        Err(e) => println!("cargo:warning=cbindgen skipped: {e}"),
    }
}
