//! Stamps the build date into the binary for `--version`.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let build_date = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_DATE={build_date}");
}
