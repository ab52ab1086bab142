use chrono::Local;

fn main() {
    // Same layout as a C compiler's __DATE__ and __TIME__
    let now = Local::now();
    println!("cargo:rustc-env=RTCSYNC_BUILD_DATE={}", now.format("%b %e %Y"));
    println!("cargo:rustc-env=RTCSYNC_BUILD_TIME={}", now.format("%H:%M:%S"));
}
