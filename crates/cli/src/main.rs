// ABOUTME: CLI binary for looking up German words in the Langenscheidt dictionary.
// ABOUTME: Prints up to five English translation candidates as a numbered list.

use std::process::ExitCode;

use clap::Parser;
use delook_dict::Client;

#[derive(Parser, Debug)]
#[command(name = "delook")]
#[command(about = "Look up English translations for a German word")]
struct Args {
    /// The German word to look up.
    word: Option<String>,

    /// Maximum number of translations to print.
    #[arg(long = "limit", default_value_t = 5)]
    limit: usize,

    /// Output the result as JSON instead of a numbered list.
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Validated by hand rather than via clap's required-argument handling
    // so that a missing or blank word exits with code 1.
    let word = match args.word.as_deref().map(str::trim) {
        Some(w) if !w.is_empty() => w.to_lowercase(),
        _ => {
            eprintln!("usage: delook <german-word>");
            return ExitCode::from(1);
        }
    };

    let client = Client::builder().max_results(args.limit).build();

    match client.lookup(&word).await {
        Ok(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        return ExitCode::from(1);
                    }
                }
            } else if result.is_empty() {
                println!("No translations found for '{}'", word);
            } else {
                println!("\nTranslations for '{}':", word);
                println!("{}", result.numbered());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
