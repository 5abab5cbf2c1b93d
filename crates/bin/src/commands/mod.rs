//! Command implementations.
//!
//! Every command reads its documents, runs one deep operation and returns the text to
//! print, so the binary entry point stays the only place that writes to stdout.

mod compare;
mod inspect;

use std::{error::Error, fs, path::Path};

use deeptree::{Container, ContainerKind, Intermediate, Key, PathKey, Value};

use crate::{
    cli::{Cli, Commands},
    output::OutputFormat,
};

pub use compare::Combinator;

/// What a command produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Text to print on stdout
    Text(String),
    /// The requested path holds nothing
    Missing(PathKey),
}

/// Run the parsed command line
pub fn run(cli: &Cli) -> Result<Outcome, Box<dyn Error>> {
    let format = OutputFormat::from_flag(cli.pretty);
    match &cli.command {
        Commands::Each(args) => inspect::each(&args.file),
        Commands::Get(args) => inspect::get(&args.file, &args.path, format),
        Commands::Set(args) => inspect::set(args, cli.mapping_intermediates, format),
        Commands::Diff(args) => compare::run(Combinator::Diff, args, format),
        Commands::Outersect(args) => compare::run(Combinator::Outersect, args, format),
        Commands::Intersect(args) => compare::run(Combinator::Intersect, args, format),
        Commands::Zip(args) => compare::run(Combinator::Zip, args, format),
    }
}

/// Read a JSON document whose top level is an object or an array.
pub(crate) fn load_document(path: &Path) -> Result<Value, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let value = Value::from_json_str(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    if !value.is_branch() {
        return Err(format!(
            "{}: top level must be an object or an array, found {}",
            path.display(),
            value.type_name()
        )
        .into());
    }
    tracing::debug!(path = %path.display(), kind = value.type_name(), "loaded document");
    Ok(value)
}

/// Parse a dot path given on the command line.
pub(crate) fn parse_path(text: &str) -> Result<PathKey, Box<dyn Error>> {
    text.parse::<PathKey>()
        .map_err(|e| format!("invalid path {text:?}: {e}").into())
}

/// Adapts a parsed dot path to the JSON document it addresses.
///
/// Dot notation reads all-digit segments as indexes, but JSON object keys are always names.
/// A digit segment stays an index where it addresses a list, existing or about to be created
/// by `intermediate`, and becomes the equal name where it addresses an object.
pub(crate) fn resolve_path(
    document: &Value,
    key: &PathKey,
    intermediate: Intermediate,
) -> PathKey {
    let Some(root) = document.as_container() else {
        return key.clone();
    };
    let mut kind = root.kind();
    let mut node = Some(root);
    let mut segments = Vec::with_capacity(key.len());
    let mut rest = Some(key);

    while let Some(current) = rest {
        let (segment, tail) = current.split();
        let resolved = match (kind, segment) {
            (ContainerKind::Map, Key::Index(n)) => Key::Name(n.to_string()),
            _ => segment.clone(),
        };
        if let Some(tail) = tail {
            let child = node
                .and_then(|container| container.try_get(&resolved))
                .and_then(Value::as_container);
            kind = match child {
                Some(child) => child.kind(),
                None => intermediate
                    .create(kind, tail.head())
                    .as_container()
                    .map_or(ContainerKind::Map, |created| created.kind()),
            };
            node = child;
        }
        segments.push(resolved);
        rest = tail;
    }

    match segments.pop() {
        Some(leaf) => PathKey::from_parts(&segments, leaf),
        None => key.clone(),
    }
}
