// racine-stopword: Classify French words from stdin as stop words.
//
// Reads words from stdin (one per line) and reports each as either a
// stop word or a content word:
//   S: word    (stop word)
//   W: word    (content word)
//
// Usage:
//   racine-stopword [OPTIONS]
//
// Options:
//   -l, --list   Print the stop word inventory and exit
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if racine_cli::wants_help(&args) {
        println!("racine-stopword: Classify French words from stdin as stop words.");
        println!();
        println!("Usage: racine-stopword [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  S: word    (stop word)");
        println!("  W: word    (content word)");
        println!();
        println!("Options:");
        println!("  -l, --list   Print the stop word inventory and exit");
        println!("  -h, --help   Print this help");
        return;
    }

    if let Some(flag) = racine_cli::unknown_flag(&args, &["-l", "--list"]) {
        racine_cli::fatal(&format!("unknown option {flag}"));
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if racine_cli::has_flag(&args, "-l", "--list") {
        let mut words: Vec<&str> = racine_fr::stopwords::STOP_WORDS.to_vec();
        words.sort_unstable();
        for word in words {
            let _ = writeln!(out, "{word}");
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if racine_fr::stopwords::is_stop_word(word) {
            let _ = writeln!(out, "S: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
        }
    }
}
