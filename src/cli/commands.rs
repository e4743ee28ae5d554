use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::agenda::AgendaState;
use crate::models::Section;
use crate::parsers::parse_messages_file;

#[derive(Parser)]
#[command(name = "deadline-agenda")]
#[command(version = "0.1.0")]
#[command(about = "Group messages with due dates into a deadline agenda", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the agenda, loading past months in batches
    Agenda {
        /// Path to the messages.jsonl file
        file: PathBuf,
        /// How many load-more batches of past months to reveal
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show the next upcoming deadline
    Next {
        /// Path to the messages.jsonl file
        file: PathBuf,
    },
    /// Show statistics about the deadline agenda
    Stats {
        /// Path to the messages.jsonl file
        file: PathBuf,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Agenda { file, pages }) => {
            show_agenda(file, *pages)?;
        }
        Some(Commands::Next { file }) => {
            show_next(file)?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(file)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_agenda(file: &Path, pages: u32) -> Result<()> {
    let messages = parse_messages_file(file)?;
    let now = Utc::now();

    let mut state = AgendaState::build(&messages, now);
    for _ in 0..pages {
        if state.is_fully_loaded() {
            break;
        }
        state.load_more(now);
    }

    if state.rendered().is_empty() {
        println!("No deadlines in the loaded window");
    } else {
        for section in state.rendered() {
            print_section(section);
        }
    }

    println!();
    if state.is_fully_loaded() {
        println!("All deadlines loaded");
    } else {
        println!("Older deadlines available (run with a higher --pages)");
    }

    Ok(())
}

fn show_next(file: &Path) -> Result<()> {
    let messages = parse_messages_file(file)?;
    let now = Utc::now();
    let state = AgendaState::build(&messages, now);

    let next = state
        .next_deadline_id()
        .and_then(|id| state.sections().iter().flat_map(|s| s.items()).find(|item| item.id == id));

    match next {
        Some(item) => {
            println!(
                "Next deadline: {} - {} (due {})",
                item.id,
                item.subject,
                item.due_date.format("%Y-%m-%d %H:%M")
            );
        }
        None => {
            println!("No upcoming deadlines");
        }
    }

    Ok(())
}

fn show_stats(file: &Path) -> Result<()> {
    let messages = parse_messages_file(file)?;
    let now = Utc::now();
    let state = AgendaState::build(&messages, now);

    let archived = messages.iter().filter(|m| m.is_archived).count();
    let deadlines: usize = state.sections().iter().map(|s| s.items().len()).sum();

    println!("Deadline Agenda Statistics");
    println!("================================");
    println!("Total messages: {}", messages.len());
    println!("  With deadline: {}", deadlines);
    println!("  Archived: {}", archived);
    println!("Day sections: {}", state.sections().len());

    if let Some(last) = state.sections().last().and_then(Section::first_item) {
        println!("Oldest deadline: {}", last.due_date.format("%Y-%m-%d %H:%M"));
    }
    if let Some(first) = state.sections().first().and_then(Section::first_item) {
        println!("Furthest deadline: {}", first.due_date.format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}

fn print_section(section: &Section) {
    match section {
        Section::Day(day_section) => {
            println!("{}", day_section.day.format("%Y-%m-%d"));
            for item in &day_section.items {
                let marker = if item.is_read { " " } else { "*" };
                println!("  {} {}  {}", marker, item.id, item.subject);
            }
        }
        Section::EmptyMonth { month_start } => {
            println!("{} (no deadlines)", month_start.format("%B %Y"));
        }
    }
}
