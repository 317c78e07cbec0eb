//! Logging verbosity helpers

/// Resolve the tracing filter from `-v` flags and the configured level
///
/// Flags win over configuration. Without either only warnings are shown,
/// so stdout and stderr stay usable in pipelines.
pub fn get_log_level(verbose: u8, configured: Option<&str>) -> String {
    match verbose {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "debug".to_string(),
        2 => "trace".to_string(),
        _ => "trace,tokio=debug".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        assert_eq!(get_log_level(0, None), "warn");
        assert_eq!(get_log_level(0, Some("info")), "info");
        assert_eq!(get_log_level(1, Some("info")), "debug");
        assert_eq!(get_log_level(2, None), "trace");
        assert!(get_log_level(3, None).starts_with("trace"));
    }
}
