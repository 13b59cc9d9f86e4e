//! Version reporting for the CLI

const DEFAULT_VERSION: &str = "dev";

/// Version of this build
///
/// `WARDEN_VERSION` set at compile time wins over the crate version.
pub fn cli_version() -> String {
    resolve_version(option_env!("WARDEN_VERSION"), env!("CARGO_PKG_VERSION"))
}

fn resolve_version(build_override: Option<&str>, package_version: &str) -> String {
    match build_override {
        Some(v) if !v.is_empty() && v != DEFAULT_VERSION => normalize_version(v),
        _ if !package_version.is_empty() => normalize_version(package_version),
        _ => DEFAULT_VERSION.to_string(),
    }
}

/// Prefix versions starting with a digit with `v`; leave anything else alone
pub fn normalize_version(v: &str) -> String {
    if v.starts_with(|c: char| c.is_ascii_digit()) {
        format!("v{v}")
    } else {
        v.to_string()
    }
}
