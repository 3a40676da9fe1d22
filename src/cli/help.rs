//! Logging verbosity helpers

/// Get the log filter for a verbosity count, falling back to `configured` when no `-v` was given
pub fn get_log_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        2 => "debug,french_numbers=trace".to_string(),
        _ => "trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(get_log_level(0, "warn"), "warn");
        assert_eq!(get_log_level(1, "warn"), "debug");
        assert_eq!(get_log_level(2, "info"), "debug,french_numbers=trace");
        assert_eq!(get_log_level(5, "info"), "trace");
    }

    #[test]
    fn test_help_lists_subcommands() {
        let help = Cli::command().render_help().to_string();
        for name in ["convert", "samples", "random", "compare"] {
            assert!(help.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
