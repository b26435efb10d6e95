use std::collections::HashMap;
use thiserror::Error;

pub mod builtin;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate policy name: {0}")]
    DuplicateName(String),
    #[error("Invalid policy name {0:?}: must be a single file name")]
    InvalidName(String),
}

/// A named block of static text that gets written out as one file.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDocument {
    pub name: String,
    pub body: &'static str,
}

impl PolicyDocument {
    pub fn new(name: impl Into<String>, body: &'static str) -> Result<Self, CatalogError> {
        let name = name.into();
        if !is_plain_file_name(&name) {
            return Err(CatalogError::InvalidName(name));
        }
        Ok(Self { name, body })
    }
}

/// Unordered set of documents keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct PolicySet {
    documents: HashMap<String, PolicyDocument>,
}

impl PolicySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (&'a str, &'static str)>,
    {
        let mut set = Self::new();
        for (name, body) in entries {
            set.insert(PolicyDocument::new(name, body)?)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, document: PolicyDocument) -> Result<(), CatalogError> {
        if self.documents.contains_key(&document.name) {
            return Err(CatalogError::DuplicateName(document.name));
        }
        self.documents.insert(document.name.clone(), document);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyDocument> {
        self.documents.values()
    }

    /// Names in sorted order, for display only.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    !name.contains(['/', '\\', '\0'])
}
