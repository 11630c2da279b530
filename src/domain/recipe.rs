use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::warn;

use crate::io::{self, Format};

/// A recipe file bound to its loaded contents.
///
/// Loading never fails from the caller's point of view: an unreadable or
/// malformed file yields an empty dictionary and keeps the load error for
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    path: PathBuf,
    contents: Value,
    load_error: Option<String>,
}

impl Recipe {
    pub fn new(path: impl Into<PathBuf>, contents: Value) -> Self {
        Self {
            path: path.into(),
            contents,
            load_error: None,
        }
    }

    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match io::reader::read_document(&path) {
            Ok(contents) => Self::new(path, contents),
            Err(error) => {
                warn!(recipe = %path.display(), %error, "failed to load recipe");
                Self {
                    path,
                    contents: Value::Object(Map::new()),
                    load_error: Some(error.to_string()),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &Value {
        &self.contents
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Outer extension of the recipe name, with its dot (`.recipe`).
    ///
    /// A trailing serialization extension such as `.yaml` is skipped first.
    /// Empty when the name has no extension.
    pub fn extension(&self) -> String {
        recipe_extension(&self.path)
    }

    /// Secondary extension naming the recipe type (`.munki`, `.download`).
    pub fn recipe_type(&self) -> String {
        recipe_type(&self.path)
    }
}

pub fn recipe_extension(path: &Path) -> String {
    dotted(recipe_stem_path(path).extension())
}

pub fn recipe_type(path: &Path) -> String {
    let stem_path = recipe_stem_path(path);
    let Some(stem) = stem_path.file_stem() else {
        return String::new();
    };
    dotted(Path::new(stem).extension())
}

fn recipe_stem_path(path: &Path) -> PathBuf {
    let format = io::resolve_format(path);
    match (format, path.file_stem()) {
        (Format::Yaml, Some(stem)) => path.with_file_name(stem),
        _ => path.to_path_buf(),
    }
}

fn dotted(extension: Option<&std::ffi::OsStr>) -> String {
    extension
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
