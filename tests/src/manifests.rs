#![cfg(test)]
const WORKSPACE_MANIFEST: &str = include_str!("../../Cargo.toml");
const CORE_MANIFEST: &str = include_str!("../../core/Cargo.toml");

fn dependency_line<'a>(manifest: &'a str, name: &str) -> &'a str {
    manifest
        .lines()
        .find(|line| line.trim_start().starts_with(&format!("{name} =")))
        .unwrap_or_else(|| panic!("{name} is not declared"))
}

#[test]
fn core_links_common_without_logging_backend() {
    let shared = dependency_line(WORKSPACE_MANIFEST, "scaffold-common");
    assert!(shared.contains("default-features = false"), "{shared}");

    let core = dependency_line(CORE_MANIFEST, "scaffold-common");
    assert!(!core.contains("features"), "{core}");
    assert!(!CORE_MANIFEST.contains("tracing"));
}
