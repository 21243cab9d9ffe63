use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let sdk_version_path = Path::new(&out_dir).join("sdk_version.rs");

    // Read SDK version from Cargo.toml metadata
    let cargo_manifest = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&cargo_manifest).join("Cargo.toml");
    let cargo_toml_content = fs::read_to_string(&cargo_toml_path)
        .expect("Failed to read Cargo.toml");

    // Parse TOML to extract sdk_version
    let cargo_toml: toml::Value = cargo_toml_content.parse()
        .expect("Failed to parse Cargo.toml");

    let sdk_version = cargo_toml
        .get("package")
        .and_then(|p| p.get("metadata"))
        .and_then(|m| m.get("polyphony"))
        .and_then(|g| g.get("sdk_version"))
        .and_then(|v| v.as_str())
        .expect("Failed to find package.metadata.polyphony.sdk_version in Cargo.toml");

    let parts: Vec<u64> = sdk_version
        .split('.')
        .map(|part| part.parse().expect("sdk_version components must be numeric"))
        .collect();
    assert_eq!(parts.len(), 3, "sdk_version must be MAJOR.MINOR.PATCH");

    let version_content = format!(
        "// Auto-generated SDK version from Cargo.toml metadata\n\
         // Source: package.metadata.polyphony.sdk_version = \"{}\"\n\
         pub const SDK_VERSION: &str = \"{}\";\n\
         pub const SDK_VERSION_MAJOR: u64 = {};\n\
         pub const SDK_VERSION_MINOR: u64 = {};\n\
         pub const SDK_VERSION_PATCH: u64 = {};\n",
        sdk_version, sdk_version, parts[0], parts[1], parts[2]
    );

    fs::write(&sdk_version_path, version_content)
        .expect("Failed to write sdk_version.rs");

    // Tell cargo to rerun if Cargo.toml changes
    println!("cargo:rerun-if-changed=Cargo.toml");
}
