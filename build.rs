use chrono::Datelike;

fn main() {
    // Stamp the build so server and client render the same copyright year
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
