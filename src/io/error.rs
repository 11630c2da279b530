use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plist parse error: {0}")]
    PlistParse(#[from] plist::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("json conversion error: {0}")]
    JsonConvert(#[from] serde_json::Error),

    #[error("recipe top level must be a dictionary, found {found}")]
    NotADictionary { found: &'static str },
}
