pub mod error;
pub mod format;
pub mod reader;

use std::fmt;
use std::path::Path;

pub use error::IoError;

/// Serialization of a recipe file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plist,
    Yaml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plist => "plist",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the recipe serialization from the final path extension.
///
/// Anything that is not explicitly YAML is treated as a property list, which
/// covers both `.recipe` and extension-less files.
pub fn resolve_format(path: &Path) -> Format {
    let Some(ext) = path.extension() else {
        return Format::Plist;
    };
    match ext.to_string_lossy().to_ascii_lowercase().as_str() {
        "yaml" | "yml" => Format::Yaml,
        _ => Format::Plist,
    }
}
