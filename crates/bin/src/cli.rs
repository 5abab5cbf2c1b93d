//! CLI argument definitions for the deeptree binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and compare nested JSON documents leaf by leaf
#[derive(Parser, Debug)]
#[command(name = "deeptree")]
#[command(about = "deeptree: deep traversal, diffing and rebuilding of JSON documents")]
#[command(version)]
pub struct Cli {
    /// Print documents as indented JSON
    #[arg(long, global = true, env = "DEEPTREE_PRETTY")]
    pub pretty: bool,

    /// Always create maps for missing intermediate containers when setting values
    #[arg(long, global = true)]
    pub mapping_intermediates: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every leaf as `<path>\t<json>`
    Each(FileArgs),
    /// Print the value at a dot path
    Get(GetArgs),
    /// Print the document with a value stored at a dot path
    Set(SetArgs),
    /// Print the entries of A that B lacks or holds differently
    Diff(PairArgs),
    /// Print the differences from both sides as `[a, b]` pairs
    Outersect(PairArgs),
    /// Print the entries A and B share with equal values
    Intersect(PairArgs),
    /// Print every leaf of A paired with B's value at the same path
    Zip(PairArgs),
}

/// Arguments for commands reading a single document
#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// JSON document to read
    pub file: PathBuf,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// JSON document to read
    pub file: PathBuf,

    /// Dot-separated path; all-digit segments are indexes (e.g. `events.0.title`)
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// JSON document to read
    pub file: PathBuf,

    /// Dot-separated path; all-digit segments are indexes (e.g. `events.0.title`)
    pub path: String,

    /// JSON text of the value to store
    pub value: String,
}

/// Arguments for commands comparing two documents
#[derive(clap::Args, Debug)]
pub struct PairArgs {
    /// Left-hand document; the result takes its shape
    pub a: PathBuf,

    /// Right-hand document
    pub b: PathBuf,
}
