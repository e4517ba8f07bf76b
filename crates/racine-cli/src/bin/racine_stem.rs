// racine-stem: Stem French words from stdin.
//
// Reads words from stdin (one per line), lowercases them and prints
// the stem of each, one per line.
//
// Usage:
//   racine-stem [OPTIONS]
//
// Options:
//   -s, --skip-stopwords   Drop stop words instead of stemming them
//   -p, --pairs            Print "word<TAB>stem" instead of the stem alone
//   --keep-case            Do not lowercase input before stemming
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use racine_core::character::lowercase_word;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if racine_cli::wants_help(&args) {
        println!("racine-stem: Stem French words from stdin.");
        println!();
        println!("Usage: racine-stem [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line) and prints their stems.");
        println!();
        println!("Options:");
        println!("  -s, --skip-stopwords   Drop stop words instead of stemming them");
        println!("  -p, --pairs            Print \"word<TAB>stem\" instead of the stem alone");
        println!("  --keep-case            Do not lowercase input before stemming");
        println!("  -h, --help             Print this help");
        return;
    }

    if let Some(flag) = racine_cli::unknown_flag(
        &args,
        &["-s", "--skip-stopwords", "-p", "--pairs", "--keep-case"],
    ) {
        racine_cli::fatal(&format!("unknown option {flag}"));
    }

    let skip_stopwords = racine_cli::has_flag(&args, "-s", "--skip-stopwords");
    let pairs = racine_cli::has_flag(&args, "-p", "--pairs");
    let keep_case = args.iter().any(|a| a == "--keep-case");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

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

        let token = if keep_case {
            word.to_string()
        } else {
            lowercase_word(word)
        };
        if skip_stopwords && racine_fr::stopwords::is_stop_word(&token) {
            continue;
        }

        let stem = racine_fr::stem_word(&token);
        if pairs {
            let _ = writeln!(out, "{word}\t{stem}");
        } else {
            let _ = writeln!(out, "{stem}");
        }
    }
}
