use std::path::PathBuf;

/// What to collect: the roots to scan and how to filter what is found under them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    pub roots: Vec<PathBuf>,
    /// Lower-cased, with the leading dot (e.g. ".go"). Empty means every extension.
    pub include_extensions: Vec<String>,
    /// Lower-cased. Checked before `include_extensions`.
    pub exclude_extensions: Vec<String>,
    pub include_hidden: bool,
}

impl Request {
    pub fn new<P, S>(
        roots: impl IntoIterator<Item = P>,
        include_extensions: impl IntoIterator<Item = S>,
        exclude_extensions: impl IntoIterator<Item = S>,
        include_hidden: bool,
    ) -> Self
    where
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        Request {
            roots: roots.into_iter().map(Into::into).collect(),
            include_extensions: lowercase_all(include_extensions),
            exclude_extensions: lowercase_all(exclude_extensions),
            include_hidden,
        }
    }

    /// Builds a request from raw flag values, each a whitespace separated list.
    pub fn from_inputs(files: &str, reg: &str, ireg: &str, include_hidden: bool) -> Self {
        Request::new(
            split_list(files),
            split_list(reg),
            split_list(ireg),
            include_hidden,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

pub fn split_list(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

fn lowercase_all<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect()
}
