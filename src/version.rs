//! SDK Version Management
//!
//! Provides the build-time SDK version read from Cargo.toml metadata.
//! The version is defined under `package.metadata.polyphony.sdk_version`;
//! plugin registries built against a different major version are rejected
//! on import.

use semver::Version;

// Include the build-generated SDK version constants
include!(concat!(env!("OUT_DIR"), "/sdk_version.rs"));

/// Get the SDK version this crate was built with
///
/// To increment the SDK version:
/// 1. Edit Cargo.toml: package.metadata.polyphony.sdk_version = NEW_VERSION
/// 2. Build - the new version will be used
pub fn sdk_version() -> Version {
    Version::new(SDK_VERSION_MAJOR, SDK_VERSION_MINOR, SDK_VERSION_PATCH)
}
