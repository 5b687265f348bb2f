use crate::deliver::DeliveryReport;
use crate::formatter::FormattedOutput;
use crate::trie::{Trie, TrieNode};
use crate::utils::file_extensions;
use std::path::Path;
use tracing::debug;

/// Prints what was melded and where it went.
pub fn print_summary(output: &FormattedOutput, report: &DeliveryReport) {
    println!("{}", render_summary(output, report));
}

pub fn render_summary(output: &FormattedOutput, report: &DeliveryReport) -> String {
    let mut lines = Vec::new();

    let root = output
        .common_root
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    lines.push(format!("Root path: {}", root));
    lines.push(String::new());
    lines.push(format!("{} file(s):", output.relative_paths.len()));

    let mut trie = Trie::new();
    for (path, size) in output.relative_paths.iter().zip(&output.sizes) {
        trie.insert(path, *size);
    }
    render_tree(trie.root(), "", &mut lines);

    if !output.failed_reads.is_empty() {
        lines.push(format!(
            "{} file(s) could not be read and are marked inline",
            output.failed_reads.len()
        ));
    }

    lines.push(format!("Content size: {} bytes", output.content.len()));

    match &report.cache {
        Ok(entry) => {
            lines.push(format!("Cache ID: {}", entry.id));
            lines.push(format!("Cache file: {}", entry.path.display()));
        }
        Err(e) => lines.push(format!("Failed to save to cache: {}", e)),
    }

    match &report.clipboard {
        Ok(()) => lines.push("Content copied to clipboard".to_owned()),
        Err(e) => {
            lines.push(format!("Failed to copy to clipboard: {}", e));
            if report.cache.is_ok() {
                lines.push("The content is still available in the cache file".to_owned());
            }
        }
    }

    lines.push(format!(
        "File types: ({})",
        file_extensions(&output.relative_paths).join(", ")
    ));

    lines.join("\n")
}

fn render_tree(node: &TrieNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗━━" } else { "┣━━" };

        if child.children.is_empty() {
            lines.push(format!(
                "{}{} {} {} ({} bytes)",
                prefix,
                connector,
                get_file_icon(Path::new(name)),
                name,
                child.size.unwrap_or(0)
            ));
        } else {
            lines.push(format!(
                "{}{}📂 {} ({} bytes)",
                prefix,
                connector,
                name,
                child.total_size()
            ));
            let child_prefix = format!("{}{}    ", prefix, if is_last { " " } else { "┃" });
            render_tree(child, &child_prefix, lines);
        }
    }
}

pub fn get_file_icon(path: &Path) -> &'static str {
    debug!("Getting file icon for path: {:?}", path);
    match path.extension().and_then(|e| e.to_str()) {
        Some("py") | Some("pyi") => "🐍",
        Some("js") | Some("jsx") => "🟨",
        Some("ts") | Some("tsx") | Some("cs") => "🔷",
        Some("html") | Some("htm") => "🌐",
        Some("css") | Some("scss") | Some("sass") => "🎨",
        Some("java") => "☕",
        Some("c") | Some("h") | Some("cpp") | Some("hpp") | Some("cc") => "🇨",
        Some("go") => "🐹",
        Some("rb") => "💎",
        Some("php") => "🐘",
        Some("rs") => "🦀",
        Some("json") => "🔖",
        Some("yaml") | Some("yml") | Some("toml") | Some("ini") | Some("conf") => "⚙️",
        Some("lock") => "🔒",
        Some("md") | Some("markdown") => "📝",
        Some("sh") | Some("bash") | Some("zsh") | Some("fish") => "🐚",
        Some("sql") => "🗃️",
        _ => "📄",
    }
}
