fn main() {
    // An explicit TASKMENU_VERSION is used as is; otherwise "<pkg version>+<short hash>",
    // or just the package version outside a git checkout.
    if let Ok(version) = std::env::var("TASKMENU_VERSION") {
        println!("cargo:rustc-env=TASKMENU_VERSION={version}");
    } else {
        let hash = std::process::Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .unwrap_or_default()
            .trim()
            .to_string();

        let version = env!("CARGO_PKG_VERSION");
        if hash.is_empty() {
            println!("cargo:rustc-env=TASKMENU_VERSION={version}");
        } else {
            println!("cargo:rustc-env=TASKMENU_VERSION={version}+{hash}");
        }
    }
    println!("cargo:rerun-if-env-changed=TASKMENU_VERSION");
}
