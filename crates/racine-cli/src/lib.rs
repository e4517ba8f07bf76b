// racine-cli: shared utilities for CLI tools.

use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check for a flag in either its short or long spelling, rejecting
/// anything else that looks like an option.
pub fn has_flag(args: &[String], short: &str, long: &str) -> bool {
    args.iter().any(|a| a == short || a == long)
}

/// Report the first argument that starts with `-` and is not in
/// `known`, so the tools can fail on typos instead of ignoring them.
pub fn unknown_flag<'a>(args: &'a [String], known: &[&str]) -> Option<&'a str> {
    args.iter()
        .map(String::as_str)
        .find(|a| a.starts_with('-') && !known.contains(a))
}
