use super::PrepOperation;
use clap::Parser;

/// command line tool for extracting occupied taxi trips from raw GPS files
/// and preparing them for trajectory models
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PrepApp {
    #[command(subcommand)]
    pub op: PrepOperation,
    /// number of worker threads, defaults to one per core
    #[arg(long)]
    pub parallelism: Option<usize>,
}
