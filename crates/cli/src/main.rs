//! Bootcamp CLI - enroll developers and track their progress.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use bootcamp_core::{ContentItem, ContentKind, Developer};
use bootcamp_progress::{Academy, BasicProgressTracker, Catalog, ProgressTracker};

#[derive(Parser)]
#[command(name = "bootcamp")]
#[command(about = "Bootcamp enrollment and progress tracking", long_about = None)]
struct Cli {
    /// Catalog file (JSON). The built-in sample catalog is used when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bootcamps and their content
    List,
    /// Enroll developers in a bootcamp and advance them
    Run {
        /// Developer name (repeatable)
        #[arg(long = "developer", required = true)]
        developers: Vec<String>,
        /// Bootcamp name
        #[arg(long)]
        bootcamp: String,
        /// How many content items each developer advances
        #[arg(long, default_value = "1")]
        steps: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a bootcamp summary
    Report {
        /// Bootcamp name
        #[arg(long)]
        bootcamp: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path).await?,
        None => Catalog::sample(),
    };
    let mut academy = catalog.into_academy()?;

    match cli.command {
        Commands::List => {
            for bootcamp in academy.bootcamps() {
                println!("{} - {}", bootcamp.name, bootcamp.description);
                println!("  Runs: {} to {}", bootcamp.starts_at.date_naive(), bootcamp.ends_at.date_naive());
                for item in bootcamp.content_items() {
                    println!("  {}", format_content(item));
                }
                println!("  Total XP: {:.1}", bootcamp.total_experience());
            }
        }
        Commands::Run { developers, bootcamp, steps, json } => {
            let bootcamp_id = find_bootcamp(&academy, &bootcamp)?;

            for name in &developers {
                academy.register_developer(name.clone())?;
                academy.enroll(name, bootcamp_id)?;
            }
            info!("Enrolled {} developers in {}", developers.len(), bootcamp);

            for _ in 0..steps {
                for name in &developers {
                    academy.progress(name)?;
                }
            }

            let tracker = BasicProgressTracker::new(&academy);
            if json {
                let report = serde_json::json!({
                    "developers": academy.developers().collect::<Vec<_>>(),
                    "leaderboard": tracker.leaderboard(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for developer in academy.developers() {
                    print_developer(developer);
                }
                println!("Leaderboard");
                for (rank, entry) in tracker.leaderboard().iter().enumerate() {
                    println!(
                        "  {}. {} - {:.1} XP ({:.0}%)",
                        rank + 1,
                        entry.name,
                        entry.total_experience,
                        entry.percentage,
                    );
                }
            }
        }
        Commands::Report { bootcamp, json } => {
            let bootcamp_id = find_bootcamp(&academy, &bootcamp)?;
            let tracker = BasicProgressTracker::new(&academy);
            let report = tracker
                .bootcamp_progress(bootcamp_id)
                .ok_or_else(|| anyhow!("Bootcamp not found: {}", bootcamp))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Bootcamp: {}", report.name);
                println!("  ID: {}", report.bootcamp_id);
                println!("  Content items: {}", report.content_items);
                println!("  Available XP: {:.1}", report.available_experience);
                println!("  Enrolled: {}", report.enrolled_developers.len());
            }
        }
    }

    Ok(())
}

fn find_bootcamp(academy: &Academy, name: &str) -> Result<bootcamp_core::BootcampId> {
    academy
        .find_bootcamp(name)
        .map(|b| b.id)
        .ok_or_else(|| anyhow!("Bootcamp not found: {}", name))
}

fn print_developer(developer: &Developer) {
    println!("Developer: {}", developer.name());
    println!("  Enrolled:");
    for item in developer.enrolled_content() {
        println!("    {}", format_content(item));
    }
    println!("  Completed:");
    for item in developer.completed_content() {
        println!("    {}", format_content(item));
    }
    println!("  XP: {:.1}", developer.calculate_total_experience());
}

fn format_content(item: &ContentItem) -> String {
    let kind = match &item.kind {
        ContentKind::Course { workload_hours } => format!("course, {}h", workload_hours),
        ContentKind::Mentorship { date } => format!("mentorship, {}", date.date_naive()),
    };
    format!("{} ({}) - {:.1} XP", item.title, kind, item.experience_value())
}
