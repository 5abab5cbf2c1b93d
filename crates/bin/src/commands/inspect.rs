//! Single-document commands: each, get and set.

use std::{error::Error, path::Path};

use deeptree::{DeepEnumerable, Intermediate, Value};

use super::{Outcome, load_document, parse_path, resolve_path};
use crate::{
    cli::SetArgs,
    output::{OutputFormat, render_leaves},
};

pub fn each(file: &Path) -> Result<Outcome, Box<dyn Error>> {
    let document = load_document(file)?;
    let text = match &document {
        Value::Map(map) => render_leaves(&map.deep_each()),
        Value::List(list) => render_leaves(&list.deep_each()),
        _ => String::new(),
    };
    Ok(Outcome::Text(text))
}

pub fn get(file: &Path, path: &str, format: OutputFormat) -> Result<Outcome, Box<dyn Error>> {
    let document = load_document(file)?;
    let key = resolve_path(&document, &parse_path(path)?, Intermediate::Auto);
    let found = match &document {
        Value::Map(map) => map.deep_get(&key),
        Value::List(list) => list.deep_get(&key),
        _ => None,
    };
    match found {
        Some(value) => Ok(Outcome::Text(format.render(value)?)),
        None => Ok(Outcome::Missing(key)),
    }
}

pub fn set(
    args: &SetArgs,
    mapping_intermediates: bool,
    format: OutputFormat,
) -> Result<Outcome, Box<dyn Error>> {
    let mut document = load_document(&args.file)?;
    let value = Value::from_json_str(&args.value)
        .map_err(|e| format!("invalid JSON value {:?}: {e}", args.value))?;
    let intermediate = if mapping_intermediates {
        Intermediate::Mapping
    } else {
        Intermediate::Auto
    };
    let key = resolve_path(&document, &parse_path(&args.path)?, intermediate);

    match &mut document {
        Value::Map(map) => {
            map.deep_set_with(&key, value, intermediate);
        }
        Value::List(list) => {
            if key.head().as_index().is_none() {
                return Err(format!("cannot address a list with segment `{}`", key.head()).into());
            }
            list.deep_set_with(&key, value, intermediate);
        }
        _ => {}
    }
    Ok(Outcome::Text(format.render(&document)?))
}
