use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Transient nested mapping from path segment to children. Directories are
/// non-empty maps, files empty ones; discarded after rendering.
#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

/// Renders a prefix drawing of `files` (paths relative to the walk root).
///
/// Siblings are sorted lexicographically at every level. The result carries
/// no trailing newline and depends only on the path list, never on content.
pub fn generate_tree(files: &[PathBuf]) -> String {
    let mut root = TreeNode::default();

    for file in files {
        insert_path(&mut root, file);
    }

    let mut lines = Vec::new();
    render_level(&root, "", &mut lines);
    lines.join("\n")
}

fn insert_path(root: &mut TreeNode, path: &Path) {
    let mut current = root;
    for component in path.components() {
        let Component::Normal(name) = component else {
            continue;
        };
        current = current
            .children
            .entry(name.to_string_lossy().into_owned())
            .or_default();
    }
}

fn render_level(node: &TreeNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));

        if !child.children.is_empty() {
            let extension = if is_last { "    " } else { "│   " };
            render_level(child, &format!("{prefix}{extension}"), lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_input_renders_empty_string() {
        assert_eq!(generate_tree(&[]), "");
    }

    #[test]
    fn single_file() {
        assert_eq!(generate_tree(&paths(&["a.txt"])), "└── a.txt");
    }

    #[test]
    fn nested_directories_use_continuation_prefixes() {
        let rendered = generate_tree(&paths(&["src/main.rs", "src/lib.rs", "README.md"]));
        let expected = "\
├── README.md
└── src
    ├── lib.rs
    └── main.rs";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn mid_list_directory_gets_pipe_prefix() {
        let rendered = generate_tree(&paths(&["a/x.txt", "b.txt"]));
        let expected = "\
├── a
│   └── x.txt
└── b.txt";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn siblings_are_sorted_lexicographically() {
        let rendered = generate_tree(&paths(&["z.txt", "a.txt", "m/deep.txt"]));
        let expected = "\
├── a.txt
├── m
│   └── deep.txt
└── z.txt";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn rendering_is_independent_of_input_order() {
        let forward = generate_tree(&paths(&["a/1.txt", "a/2.txt", "b/3.txt"]));
        let reversed = generate_tree(&paths(&["b/3.txt", "a/2.txt", "a/1.txt"]));
        assert_eq!(forward, reversed);
    }
}
