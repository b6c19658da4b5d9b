use crate::item::Item;
use std::cmp::Ordering;

type Subtree = Option<Box<BstNode>>;

#[derive(Debug)]
struct BstNode {
    item: Item,
    left: Subtree,
    right: Subtree,
}

impl BstNode {
    fn leaf(item: Item) -> Box<Self> {
        Box::new(BstNode {
            item,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree of items ordered by name
///
/// Built fresh from a snapshot for each lookup and thrown away afterwards.
/// The tree is never rebalanced, so sorted input degrades it into a list:
/// lookups stay correct but cost O(n) instead of O(log n).
///
/// Names compare by Unicode code point. Inserting a name that is already
/// present is a no-op, so the first item inserted under a name wins.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Subtree,
    len: usize,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, keyed by its name
    ///
    /// Returns false if an item with the same name was already present.
    pub fn insert(&mut self, item: Item) -> bool {
        let inserted = insert_into(&mut self.root, item);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns true if an item with exactly this name is in the tree
    pub fn search(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks up the item stored under `name`
    pub fn get(&self, name: &str) -> Option<&Item> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match name.cmp(node.item.name()) {
                Ordering::Equal => return Some(&node.item),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree)
    pub fn height(&self) -> usize {
        height_of(&self.root)
    }

    /// All stored names in ascending order
    pub fn in_order_names(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.len);
        let mut stack: Vec<&BstNode> = Vec::new();
        let mut current = self.root.as_deref();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                names.push(node.item.name());
                current = node.right.as_deref();
            }
        }

        names
    }
}

fn insert_into(slot: &mut Subtree, item: Item) -> bool {
    match slot {
        None => {
            *slot = Some(BstNode::leaf(item));
            true
        }
        Some(node) => match item.name().cmp(node.item.name()) {
            Ordering::Less => insert_into(&mut node.left, item),
            Ordering::Greater => insert_into(&mut node.right, item),
            Ordering::Equal => false,
        },
    }
}

fn height_of(subtree: &Subtree) -> usize {
    match subtree {
        None => 0,
        Some(node) => 1 + height_of(&node.left).max(height_of(&node.right)),
    }
}

impl FromIterator<Item> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for item in iter {
            tree.insert(item);
        }
        tree
    }
}
