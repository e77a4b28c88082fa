use crate::domain::Note;
use std::collections::BTreeMap;

/// One category directory in a [`CategoryTree`].
#[derive(Debug)]
pub struct CategoryNode<'n> {
    /// Last path segment. Empty for the root.
    pub name: &'n str,
    /// Number of segments from the root; the root itself is 0.
    pub depth: usize,
    /// Notes filed directly in this category, sorted by path.
    pub notes: Vec<&'n Note>,
    /// Child segment name to node index, ordered by byte-wise name.
    pub children: BTreeMap<&'n str, usize>,
}

impl<'n> CategoryNode<'n> {
    fn new(name: &'n str, depth: usize) -> Self {
        Self {
            name,
            depth,
            notes: Vec::new(),
            children: BTreeMap::new(),
        }
    }
}

/// Notes grouped by category, stored as an arena of nodes.
///
/// Built in a single pass over the notes and rebuilt on every render.
#[derive(Debug)]
pub struct CategoryTree<'n> {
    nodes: Vec<CategoryNode<'n>>,
}

impl<'n> CategoryTree<'n> {
    pub const ROOT: usize = 0;

    /// Groups `notes` by category.
    ///
    /// Notes are visited in path order whatever order they are passed in.
    pub fn build(notes: &'n [Note]) -> Self {
        let mut sorted: Vec<&'n Note> = notes.iter().collect();
        sorted.sort_by(|a, b| a.path.cmp(&b.path));

        let mut tree = CategoryTree {
            nodes: vec![CategoryNode::new("", 0)],
        };

        for note in sorted {
            let mut current = Self::ROOT;
            for segment in &note.category {
                current = tree.child_or_insert(current, segment);
            }
            tree.nodes[current].notes.push(note);
        }

        tree
    }

    fn child_or_insert(&mut self, parent: usize, name: &'n str) -> usize {
        if let Some(&index) = self.nodes[parent].children.get(name) {
            return index;
        }

        let index = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(CategoryNode::new(name, depth));
        self.nodes[parent].children.insert(name, index);
        index
    }

    pub fn root(&self) -> &CategoryNode<'n> {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, index: usize) -> &CategoryNode<'n> {
        &self.nodes[index]
    }

    /// Child node indices of `index` in ascending name order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes[index].children.values().copied()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty() && self.root().notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::path::Path;

    fn note(path: &str) -> Note {
        Note::from_relative_path(Path::new(path), Local::now())
    }

    #[test]
    fn groups_notes_by_full_category() {
        let notes = vec![
            note("work/meetings/2025-01-03 standup.md"),
            note("2025-01-01 root note.md"),
            note("work/2025-01-02 work note.md"),
            note("personal/2025-01-04 groceries.md"),
        ];
        let tree = CategoryTree::build(&notes);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root().notes.len(), 1);

        let top: Vec<&str> = tree
            .children(CategoryTree::ROOT)
            .map(|i| tree.node(i).name)
            .collect();
        assert_eq!(top, vec!["personal", "work"]);

        let work = tree.root().children["work"];
        assert_eq!(tree.node(work).depth, 1);
        assert_eq!(tree.node(work).notes[0].title, "work note");

        let meetings = tree.node(work).children["meetings"];
        assert_eq!(tree.node(meetings).depth, 2);
        assert_eq!(tree.node(meetings).notes[0].title, "standup");
    }

    #[test]
    fn intermediate_categories_exist_without_notes() {
        let notes = vec![note("a/b/c/deep.md")];
        let tree = CategoryTree::build(&notes);

        let a = tree.root().children["a"];
        assert!(tree.node(a).notes.is_empty());
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn empty_input_builds_bare_root() {
        let tree = CategoryTree::build(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
    }
}
