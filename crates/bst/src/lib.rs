use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree.
///
/// - For every node, values in the left subtree are `<=` the node's value
///   and values in the right subtree are strictly greater.
/// - Duplicates are permitted and always routed into the left subtree.
/// - Nothing rebalances; the shape is a function of insertion order, and
///   inserting sorted input degenerates into a chain.
pub struct BinarySearchTree<T: Ord> {
    root: Link<T>,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds one copy of `value` to the tree.
    pub fn add(&mut self, value: T) {
        self.root = Self::add_node(self.root.take(), value);
    }

    fn add_node(root: Link<T>, value: T) -> Link<T> {
        let Some(mut node) = root else {
            return Some(Node::leaf(value));
        };
        if value <= node.value {
            node.left = Self::add_node(node.left.take(), value);
        } else {
            node.right = Self::add_node(node.right.take(), value);
        }
        Some(node)
    }

    /// Whether the tree holds at least one copy of `value`.
    pub fn contains(&self, value: &T) -> bool {
        Self::contains_node(self.root.as_deref(), value)
    }

    fn contains_node(root: Option<&Node<T>>, value: &T) -> bool {
        let Some(node) = root else {
            return false;
        };
        match value.cmp(&node.value) {
            Ordering::Equal => true,
            Ordering::Less => Self::contains_node(node.left.as_deref(), value),
            Ordering::Greater => Self::contains_node(node.right.as_deref(), value),
        }
    }

    /// Removes one copy of `value` if at least one is present, reporting
    /// whether anything was removed. Absence is not an error.
    pub fn remove(&mut self, value: &T) -> bool {
        let (root, removed) = Self::remove_node(self.root.take(), value);
        self.root = root;
        removed
    }

    fn remove_node(root: Link<T>, value: &T) -> (Link<T>, bool) {
        let Some(mut node) = root else {
            return (None, false);
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, removed) = Self::remove_node(node.left.take(), value);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::remove_node(node.right.take(), value);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => {
                if node.left.is_none() {
                    return (node.right.take(), true);
                }
                if node.right.is_none() {
                    return (node.left.take(), true);
                }
                // Two children: splice out the in-order predecessor (the
                // left subtree's maximum) and adopt its value. With
                // duplicates routed left, the promoted value is never equal
                // to anything in the right subtree.
                let (new_left, pred) = Self::pop_max(node.left.take().unwrap());
                node.left = new_left;
                node.value = pred.value;
                (Some(node), true)
            }
        }
    }

    fn pop_max(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
        if node.right.is_none() {
            let left = node.left.take();
            return (left, node);
        }
        let (new_right, max_node) = Self::pop_max(node.right.take().unwrap());
        node.right = new_right;
        (Some(node), max_node)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        Self::size_node(self.root.as_deref())
    }

    fn size_node(root: Option<&Node<T>>) -> usize {
        root.map_or(0, |node| {
            1 + Self::size_node(node.left.as_deref()) + Self::size_node(node.right.as_deref())
        })
    }

    /// Length of the longest root-to-leaf path: -1 for the empty tree, 0
    /// for a single node.
    pub fn depth(&self) -> i32 {
        Self::depth_node(self.root.as_deref())
    }

    fn depth_node(root: Option<&Node<T>>) -> i32 {
        match root {
            None => -1,
            Some(node) => {
                1 + Self::depth_node(node.left.as_deref())
                    .max(Self::depth_node(node.right.as_deref()))
            }
        }
    }

    /// Values in pre-order (node, left, right).
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        Self::collect_pre(self.root.as_deref(), &mut out);
        out
    }

    fn collect_pre<'a>(root: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
        if let Some(node) = root {
            out.push(&node.value);
            Self::collect_pre(node.left.as_deref(), out);
            Self::collect_pre(node.right.as_deref(), out);
        }
    }

    /// Values in in-order (left, node, right); non-decreasing for any tree
    /// built through `add`/`remove`.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        Self::collect_in(self.root.as_deref(), &mut out);
        out
    }

    fn collect_in<'a>(root: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
        if let Some(node) = root {
            Self::collect_in(node.left.as_deref(), out);
            out.push(&node.value);
            Self::collect_in(node.right.as_deref(), out);
        }
    }

    /// Values in post-order (left, right, node).
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        Self::collect_post(self.root.as_deref(), &mut out);
        out
    }

    fn collect_post<'a>(root: Option<&'a Node<T>>, out: &mut Vec<&'a T>) {
        if let Some(node) = root {
            Self::collect_post(node.left.as_deref(), out);
            Self::collect_post(node.right.as_deref(), out);
            out.push(&node.value);
        }
    }
}

fn push_copies(out: &mut String, piece: &str, copies: usize) {
    for _ in 0..copies {
        out.push_str(piece);
    }
}

fn push_center(out: &mut String, text: &str, field_width: usize) {
    let missing = field_width.saturating_sub(text.len());
    push_copies(out, " ", missing / 2);
    out.push_str(text);
    push_copies(out, " ", missing - missing / 2);
}

impl<T: Ord + fmt::Display> BinarySearchTree<T> {
    fn widest_width(root: Option<&Node<T>>) -> usize {
        root.map_or(0, |node| {
            node.value
                .to_string()
                .len()
                .max(Self::widest_width(node.left.as_deref()))
                .max(Self::widest_width(node.right.as_deref()))
        })
    }

    fn push_level(
        out: &mut String,
        node: &Node<T>,
        root_level: usize,
        target_level: usize,
        spacing: usize,
        total_height: usize,
    ) {
        let spaces_after = spacing * ((1usize << (total_height - target_level)) - 1) * 2;
        if root_level == target_level {
            push_center(out, &node.value.to_string(), spacing * 2);
            push_copies(out, " ", spaces_after);
        } else {
            let blank = (spacing * 2 + spaces_after) * (1usize << (target_level - root_level - 1));
            match node.left.as_deref() {
                None => push_copies(out, " ", blank),
                Some(left) => {
                    Self::push_level(out, left, root_level + 1, target_level, spacing, total_height)
                }
            }
            match node.right.as_deref() {
                None => push_copies(out, " ", blank),
                Some(right) => Self::push_level(
                    out,
                    right,
                    root_level + 1,
                    target_level,
                    spacing,
                    total_height,
                ),
            }
        }
    }
}

/// Level-by-level rendering: a centered `root` header, one line per level,
/// each element centered in a field sized from the widest element so that
/// siblings align under their parent. The empty tree renders as the
/// literal `empty tree`.
impl<T: Ord + fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root.as_deref() else {
            return f.write_str("empty tree");
        };
        let height = Self::depth_node(Some(root)) as usize;
        let spacing = Self::widest_width(Some(root)) + 1;
        let mut out = String::new();
        push_copies(&mut out, " ", spacing * ((1usize << height) - 1));
        push_center(&mut out, "root", spacing * 2);
        out.push('\n');
        for level in 0..=height {
            push_copies(&mut out, " ", spacing * ((1usize << (height - level)) - 1));
            Self::push_level(&mut out, root, 0, level, spacing, height);
            out.push('\n');
        }
        f.write_str(&out)
    }
}
