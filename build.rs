fn main() {
    match git_revision_hash() {
        Some(rev) => println!("cargo:rustc-env=BUILD_GIT_HASH={rev}"),
        None => println!("cargo:rustc-env=BUILD_GIT_HASH=unknown"),
    }
}

fn git_revision_hash() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "--short=10", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let v = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if v.is_empty() { None } else { Some(v) }
}
