use std::fs;
use std::path::PathBuf;

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let manifest_path = crate_root.join("Cargo.toml");
    println!("cargo:rerun-if-changed={}", manifest_path.display());

    let raw = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", manifest_path.display()));
    let manifest: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", manifest_path.display()));

    let mut entries = Vec::new();
    if let Some(dependencies) = manifest.get("dependencies").and_then(|v| v.as_table()) {
        for (name, entry) in dependencies {
            let version = entry
                .as_str()
                .or_else(|| entry.get("version").and_then(|v| v.as_str()));
            // Path-only workspace members carry no registry version; skip them.
            if let Some(version) = version {
                entries.push((name.clone(), version.to_string()));
            }
        }
    }
    entries.sort();

    let rows = entries
        .iter()
        .map(|(name, version)| format!("    (\"{name}\", \"{version}\"),\n"))
        .collect::<String>();
    let generated = format!(
        "/// Build-time generated registry dependency catalog.\n\
pub const DEPENDENCY_VERSIONS: &[(&str, &str)] = &[\n{rows}];\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("version_catalog.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
