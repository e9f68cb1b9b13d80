//! Internal module for building a tree representation from a list of walked entries.

use crate::engine::WalkedEntry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

#[derive(Debug)]
struct TreeNode {
    name: String,
    is_dir: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: String, is_dir: bool) -> Self {
        Self {
            name,
            is_dir,
            children: Vec::new(),
        }
    }

    /// Inserts an entry below this node. Entries arrive in pre-order, so the
    /// parent directory is normally the most recently added child with that name.
    fn insert(&mut self, parts: &[String], is_dir: bool) {
        let Some((first, rest)) = parts.split_first() else {
            return;
        };
        if rest.is_empty() {
            self.children.push(TreeNode::new(first.clone(), is_dir));
            return;
        }
        let index = match self
            .children
            .iter()
            .rposition(|child| child.is_dir && child.name == *first)
        {
            Some(index) => index,
            None => {
                self.children.push(TreeNode::new(first.clone(), true));
                self.children.len() - 1
            }
        };
        self.children[index].insert(rest, is_dir);
    }
}

/// Builds a visual tree string from the entries below a root.
///
/// The root itself is not printed. Each entry gets `├── ` or `└── ` depending on
/// whether it is the last of its (already filtered) siblings, and directories
/// are suffixed with `/`.
pub(crate) fn build_tree_from_entries(entries: &[WalkedEntry]) -> String {
    let mut root = TreeNode::new(String::new(), true);
    for entry in entries {
        let parts: Vec<String> = entry
            .relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        root.insert(&parts, entry.is_dir);
    }

    let mut output = String::with_capacity(1024);
    render_children(&mut output, &root, "");
    output
}

fn render_children(output: &mut String, node: &TreeNode, prefix: &str) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        output.push_str(prefix);
        output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        output.push_str(&child.name);
        if child.is_dir {
            output.push('/');
        }
        output.push('\n');

        if !child.children.is_empty() {
            let next = format!("{}{}", prefix, if is_last { SPACE } else { VERTICAL });
            render_children(output, child, &next);
        }
    }
}
