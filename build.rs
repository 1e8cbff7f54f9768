use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    emit("COMMIT", commit_label());
    emit(
        "DATE",
        chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    emit("TARGET", env::var("TARGET").unwrap_or_default());
    emit("PROFILE", env::var("PROFILE").unwrap_or_default());
}

fn emit(key: &str, value: String) {
    if !value.is_empty() {
        println!("cargo:rustc-env=TOLL_TAX_BUILD_{key}={value}");
    }
}

/// Short commit hash, suffixed with `-dirty` when the work tree has local changes.
fn commit_label() -> String {
    let Some(hash) = git(&["rev-parse", "--short", "HEAD"]).filter(|hash| !hash.is_empty())
    else {
        return String::new();
    };
    match git(&["status", "--porcelain"]) {
        Some(changes) if !changes.is_empty() => format!("{hash}-dirty"),
        _ => hash,
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
