//! Two-document commands built on the structural combinators.

use std::error::Error;

use deeptree::{Container, DeepEnumerable, Value};

use super::{Outcome, load_document};
use crate::{cli::PairArgs, output::OutputFormat};

/// Structural combinator selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Diff,
    Outersect,
    Intersect,
    Zip,
}

impl Combinator {
    /// Apply the combinator with `a` as the receiver.
    pub fn apply<C: DeepEnumerable>(self, a: &C, b: &dyn Container) -> C {
        match self {
            Combinator::Diff => a.deep_diff(b),
            Combinator::Outersect => a.deep_outersect(b),
            Combinator::Intersect => a.deep_intersect(b),
            Combinator::Zip => a.deep_zip(b),
        }
    }
}

pub fn run(
    combinator: Combinator,
    args: &PairArgs,
    format: OutputFormat,
) -> Result<Outcome, Box<dyn Error>> {
    let a = load_document(&args.a)?;
    let b = load_document(&args.b)?;
    let other = b
        .as_container()
        .ok_or_else(|| format!("{} is not a container", args.b.display()))?;

    tracing::debug!(?combinator, "combining documents");
    let result = match &a {
        Value::Map(map) => Value::Map(combinator.apply(map, other)),
        Value::List(list) => Value::List(combinator.apply(list, other)),
        _ => return Err(format!("{} is not a container", args.a.display()).into()),
    };
    Ok(Outcome::Text(format.render(&result)?))
}
