use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against `base` without touching the filesystem.
/// `.` components are dropped, `..` is kept as written.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Renders a path with `/` separators whatever the host uses.
/// A drive prefix is kept as written and a root becomes a leading `/`.
pub fn to_slash_path(path: &Path) -> String {
    let mut prefix = String::new();
    let mut segments = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => prefix.push('/'),
            Component::CurDir => {}
            Component::ParentDir => segments.push("..".to_owned()),
            Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
        }
    }
    prefix + &segments.join("/")
}

/// The extension including its leading dot, lower-cased. Empty when there is none.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Sorted set of the extensions appearing in `paths`, as written.
pub fn file_extensions<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| {
            Path::new(p.as_ref())
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
