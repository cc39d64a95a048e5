// Desktop builds on Linux link against libxdo; fail early with a hint if it is missing.

fn main() {
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !is_desktop || !is_linux {
        return;
    }

    // libxdo may ship without a .pc file, so fall back to ldconfig.
    let found = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success())
        .unwrap_or_else(|_| {
            std::process::Command::new("ldconfig")
                .args(["-p"])
                .output()
                .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
                .unwrap_or(false)
        });

    if !found {
        eprintln!();
        eprintln!("  error: desktop build on Linux requires libxdo.");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!();
        std::process::exit(1);
    }
}
