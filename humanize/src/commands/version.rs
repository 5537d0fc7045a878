/// Get the version string for humanize and libhumanize
pub fn get_version_string() -> String {
    format!(
        "humanize {}\nlibhumanize {}",
        env!("CARGO_PKG_VERSION"),
        libhumanize::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
