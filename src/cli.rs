// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands here: the tool does one thing, so the email
// address is a plain positional argument. clap turns a missing argument
// into a usage error with a non-zero exit for us.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "contact-scout",
    version = "0.1.0",
    about = "Discover a business website from an email domain and extract contact details",
    long_about = "contact-scout takes an email address, derives the domain after the '@', finds \
                  the business's public website, crawls a bounded set of same-domain pages, and \
                  reports the emails, phone numbers, postal addresses and industry tags it finds."
)]
pub struct Cli {
    /// Email address to start from (e.g., info@example.com)
    ///
    /// The domain after the '@' is used to guess the website address
    pub email: String,

    /// Output the final record as JSON instead of a summary
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}
