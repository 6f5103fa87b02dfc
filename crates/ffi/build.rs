use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file = PathBuf::from(&crate_dir)
        .join("../../VectorMathFFI.h")
        .display()
        .to_string();

    // Error code variants are emitted as `VectorMathErrorCode_Ok` etc. so they
    // don't collide in the C global namespace
    let mut config = cbindgen::Config::default();
    config.enumeration.prefix_with_name = true;

    // Generate C bindings using cbindgen
    cbindgen::Builder::new()
        .with_config(config)
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("VECTOR_MATH_FFI_H")
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(output_file);

    println!("cargo:rerun-if-changed=src");
}
