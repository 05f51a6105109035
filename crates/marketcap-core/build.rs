// File: crates/marketcap-core/build.rs
// Summary: Build script; Skia's font manager needs advapi32 on Windows.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends are pulled in by Skia's Windows font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
