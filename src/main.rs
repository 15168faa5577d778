// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Derive the domain from the email address
// 3. Run the crawl and collect the aggregated record
// 4. Print the record (summary or JSON) and exit with the proper code
//    (0 = record produced, 1 = no valid site found, 2 = internal error)
//
// Rust concepts used:
// - async/await: Because the crawl makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to map crawl outcomes onto exit codes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - crawl orchestration and state
mod extract; // src/extract/ - per-page extraction and aggregation
mod fetch; // src/fetch/ - single-page HTTP fetching

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::{crawl_domain, domain_from_email, CrawlError};
use extract::ExtractionRecord;
use std::collections::BTreeSet;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function: it creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = a record was produced
//   Ok(1) = no valid site found for the domain
//   Err = unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let domain = domain_from_email(&cli.email);
    println!("🔍 Scraping data for domain: {}...", domain);

    match crawl_domain(domain).await {
        Ok(record) => {
            print_record(&record, cli.json)?;
            Ok(0)
        }
        Err(CrawlError::NoSiteFound { domain }) => {
            eprintln!("❌ No valid site found for {}", domain);
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

// Prints the record either as a human-readable summary or as JSON
fn print_record(record: &ExtractionRecord, json: bool) -> Result<()> {
    if json {
        // Serialize the record to JSON and print
        let json_output = serde_json::to_string_pretty(record)?;
        println!("{}", json_output);
    } else {
        print_summary(record);
    }
    Ok(())
}

// Prints the aggregated record as a human-readable summary
fn print_summary(record: &ExtractionRecord) {
    println!();
    println!("📋 Extracted info for {}", record.domain);

    if !record.title.is_empty() {
        println!("   Title: {}", record.title);
    }

    print_set("📧 Emails", &record.emails);
    print_set("📞 Phones", &record.phones);
    print_set("📍 Addresses", &record.addresses);
    print_set("🏭 Industries", &record.industries);
}

fn print_set(label: &str, values: &BTreeSet<String>) {
    if values.is_empty() {
        println!("   {}: (none found)", label);
    } else {
        println!("   {}:", label);
        for value in values {
            println!("      - {}", value);
        }
    }
}
