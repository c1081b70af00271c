//! Review command - re-parse and validate an edited notice text file.
//!
//! This is the strict gate before the record leaves for the launch system:
//! an incomplete record is rejected with a message so the human can fix the
//! text and resubmit.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use nlx_core::parse_edited;

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Edited notice text file
    #[arg(required = true)]
    input: PathBuf,

    /// Print the parsed record as JSON instead of the canonical text
    #[arg(long)]
    json: bool,
}

pub fn run(args: ReviewArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;

    let notice = match parse_edited(&text) {
        Ok(notice) => notice,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            eprintln!("Fix the edited text and run review again.");
            std::process::exit(1);
        }
    };

    println!(
        "{} {} item(s) ready for notice {}",
        style("✓").green(),
        notice.items.len(),
        notice.notice_number
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notice)?);
    } else {
        print!("{}", notice.to_edited_text());
    }

    Ok(())
}
