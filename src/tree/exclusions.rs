use std::collections::BTreeSet;

/// Folder names excluded from a render.
///
/// Names are plain folder names, never paths, and compare case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    /// Folders omitted from output and traversal together with their subtree
    pub skip_entirely: BTreeSet<String>,

    /// Folders listed once, with nothing beneath them
    pub skip_contents: BTreeSet<String>,
}

/// Split a comma-separated list of names, trimming entries and dropping empty ones.
pub fn parse_name_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build both sets from comma-separated lists.
    pub fn from_lists(skip_entirely: &str, skip_contents: &str) -> Self {
        Self::new()
            .with_skip_entirely(parse_name_list(skip_entirely))
            .with_skip_contents(parse_name_list(skip_contents))
    }

    /// Add folders to omit entirely
    pub fn with_skip_entirely<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_entirely.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add folders whose contents are omitted
    pub fn with_skip_contents<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_contents.extend(names.into_iter().map(Into::into));
        self
    }

    /// Union of both exclusion sets.
    pub fn merge(mut self, other: Exclusions) -> Self {
        self.skip_entirely.extend(other.skip_entirely);
        self.skip_contents.extend(other.skip_contents);
        self
    }

    pub fn skips_entirely(&self, name: &str) -> bool {
        self.skip_entirely.contains(name)
    }

    pub fn skips_contents(&self, name: &str) -> bool {
        self.skip_contents.contains(name)
    }

    /// True if the name is in either set.
    pub fn excludes(&self, name: &str) -> bool {
        self.skips_entirely(name) || self.skips_contents(name)
    }

    pub fn is_empty(&self) -> bool {
        self.skip_entirely.is_empty() && self.skip_contents.is_empty()
    }
}
