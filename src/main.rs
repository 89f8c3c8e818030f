//! # chatdigest CLI
//!
//! Command-line interface for the chatdigest library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatdigest::ChatdigestError;
use chatdigest::cli::Args;
use chatdigest::core::ChatReport;
use chatdigest::format::write_to_format;
use chatdigest::parser::TranscriptParser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatdigestError> {
    let start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let output_path = args.output_path();

    if !args.input.exists() {
        return Err(ChatdigestError::not_found(&args.input));
    }

    if !args.quiet {
        println!("chatdigest v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Parsing: {} ({})",
            args.input.display(),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        println!();
    }

    let parser = TranscriptParser::with_config(args.parser_config());
    let report = parser.analyze(&args.input)?;

    if !args.quiet {
        print_report(&report);
    }

    write_to_format(&report, &output_path, args.format.into())?;
    log::info!("Finished in {:.2}s", start.elapsed().as_secs_f64());

    if args.quiet {
        println!("{}", output_path.display());
    } else {
        println!();
        println!("Full output saved to: {}", output_path.display());
    }

    Ok(())
}

fn print_report(report: &ChatReport) {
    let rule = "=".repeat(50);
    let metadata = &report.metadata;

    println!("{rule}");
    println!("CHAT METADATA");
    println!("{rule}");
    println!("Participants: {}", metadata.participants.join(", "));
    println!("Total Messages: {}", metadata.message_count);
    println!("Media Messages: {}", metadata.media_count);
    println!("Date Range: {}", metadata.date_range);

    match &report.summary {
        Some(summary) => println!(
            "\nMost Active: {} ({} messages)",
            summary.most_active.name, summary.most_active.message_count
        ),
        None => println!("\nMost Active: no participants"),
    }

    if report.action_items.is_empty() {
        return;
    }

    println!("\n{rule}");
    println!("ACTION ITEMS FOUND");
    println!("{rule}");
    for item in &report.action_items {
        println!("  [{}] {}", item.kind, item.task);
        println!("    Assignee: {}", item.assignee);
        println!("    Time: {}", item.timestamp);
        if let Some(deadline) = &item.deadline {
            println!("    Deadline: {deadline}");
        }
        println!();
    }
}
