// Desktop builds on Linux need libxdo; check up front and explain how to
// install it rather than surfacing a linker error.

fn main() {
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !is_desktop || !is_linux {
        return;
    }

    // pkg-config first; libxdo may ship without a .pc file, so fall back to ldconfig
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
        eprintln!("  error: the desktop build on Linux requires libxdo.");
        eprintln!();
        eprintln!("  Install the development package and rerun:");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!();
        eprintln!("  Then: cargo run --features desktop");
        eprintln!();
        std::process::exit(1);
    }
}
