// bdemo/build.rs

fn main() {
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    match os.as_str() {
        // libb provides _start; keep crt1 out but still resolve mem* from libc
        "linux" => {
            println!("cargo:rustc-link-arg-bins=-nostartfiles");
            println!("cargo:rustc-link-lib=c");
        }
        // dyld calls `main` directly
        "macos" => println!("cargo:rustc-link-lib=System"),
        _ => {}
    }
}
