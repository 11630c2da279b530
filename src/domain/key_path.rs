use std::fmt;

/// Ordered dictionary keys leading from the recipe root to one value.
///
/// Rendered in canonical bracket form: `$["Input"]["pkginfo"]["name"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath {
    keys: Vec<String>,
}

impl KeyPath {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Path up to and including the key at `index`.
    pub fn prefix(&self, index: usize) -> KeyPath {
        let end = (index + 1).min(self.keys.len());
        Self {
            keys: self.keys[..end].to_vec(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(keys: [&str; N]) -> Self {
        Self::new(keys)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("$")?;
        for key in &self.keys {
            let encoded = serde_json::to_string(key).map_err(|_| fmt::Error)?;
            write!(formatter, "[{encoded}]")?;
        }
        Ok(())
    }
}
