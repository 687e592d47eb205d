use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rvdb_application::prelude as flows;
use rvdb_db_sqlite::Connections;
use rvdb_entities::id::Id;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "reviewdb",
    about = "Rating aggregation & review moderation engine",
    version
)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Re-derive every provider's rating summary from the review store.
    RecomputeSummaries,
    /// Print the current rating summary of a provider.
    Summary { provider_id: String },
    /// Print the audit trail of a review.
    AuditTrail { review_id: String },
}

pub fn run(args: Args) -> Result<()> {
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;
    let connections = Connections::init(
        &config.db.connection_sqlite,
        config.db.connection_pool_size.into(),
    )?;
    rvdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match args.command {
        Command::RecomputeSummaries => {
            let count = flows::recompute_rating_summaries(&connections)?;
            println!("Recomputed the rating summaries of {count} providers");
        }
        Command::Summary { provider_id } => {
            let summary =
                flows::load_rating_summary(&connections, &Id::from(provider_id.as_str()))?;
            println!("Provider {provider_id}");
            println!("  average rating : {:.2}", f64::from(summary.average));
            println!("  visible reviews: {}", summary.review_count);
            for (stars, count) in summary.histogram.counts() {
                println!("  {} star(s)      : {count}", i8::from(stars));
            }
        }
        Command::AuditTrail { review_id } => {
            let entries = flows::load_audit_trail(&connections, &review_id)?;
            if entries.is_empty() {
                println!("No audit entries for review {review_id}");
            }
            for entry in entries {
                println!(
                    "{} {:<17} by {} {}",
                    entry.created_at,
                    entry.action.to_string(),
                    entry.actor_id,
                    entry.reason.as_deref().unwrap_or("")
                );
            }
        }
    }
    Ok(())
}
