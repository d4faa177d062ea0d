use chrono::{DateTime, Datelike, Utc};

fn main() {
    // Capture the build time. SOURCE_DATE_EPOCH pins it for reproducible
    // builds and forces a fresh footer year on cached builds.
    let now = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    // Also set as environment variables for use in env! macro.
    // The footer year comes from here so server render and hydration agree.
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
