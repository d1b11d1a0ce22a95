use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::Violation;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.is_red(),
    }
}

// Returns `true` if the root of the tree exists and has a red left child.
pub fn is_left_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => is_red(&node.left),
    }
}

pub fn len<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.len,
    }
}

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => 1 + cmp::max(height(&node.left), height(&node.right)),
    }
}

// Borrows red from the root's children before a deletion descends into the tree.
pub fn redden_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

pub fn insert<T, U, C>(tree: &mut Tree<T, U>, new_node: Node<T, U>, cmp: &C) -> Option<U>
where
    C: Fn(&T, &T) -> Ordering,
{
    let ret = match tree {
        Some(ref mut node) => {
            match cmp(&new_node.entry.key, &node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node, cmp),
                Ordering::Greater => insert(&mut node.right, new_node, cmp),
                Ordering::Equal => Some(mem::replace(&mut node.entry.value, new_node.entry.value)),
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.balance();
    }

    ret
}

// precondition: there exists a minimum node in the tree
pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if !is_red(&node.left) && !is_left_red(&node.left) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// precondition: there exists a maximum node in the tree
pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if node.right.is_some() {
            if !is_red(&node.right) && !is_left_red(&node.right) {
                node.move_red_right();
            }

            let ret = remove_max(&mut node.right);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

// precondition: the key exists in the tree
pub fn remove<T, U, C>(tree: &mut Tree<T, U>, key: &T, cmp: &C) -> Entry<T, U>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut node = tree.take().expect("Expected a non-empty tree.");

    let ret = if cmp(key, &node.entry.key) == Ordering::Less {
        if !is_red(&node.left) && !is_left_red(&node.left) {
            node.move_red_left();
        }
        remove(&mut node.left, key, cmp)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if cmp(key, &node.entry.key) == Ordering::Equal && node.right.is_none() {
            let Node { entry, left, .. } = *node;
            *tree = left;
            return entry;
        }

        if !is_red(&node.right) && !is_left_red(&node.right) {
            node.move_red_right();
        }

        if cmp(key, &node.entry.key) == Ordering::Equal {
            let Node { entry, .. } = *remove_min(&mut node.right);
            mem::replace(&mut node.entry, entry)
        } else {
            remove(&mut node.right, key, cmp)
        }
    };

    node.balance();
    *tree = Some(node);
    ret
}

pub fn get<'a, T, U, C>(tree: &'a Tree<T, U>, key: &T, cmp: &C) -> Option<&'a Entry<T, U>>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match cmp(key, &node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, C>(
    tree: &'a mut Tree<T, U>,
    key: &T,
    cmp: &C,
) -> Option<&'a mut Entry<T, U>>
where
    C: Fn(&T, &T) -> Ordering,
{
    tree.as_mut().and_then(|node| {
        match cmp(key, &node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key, cmp),
            Ordering::Greater => get_mut(&mut node.right, key, cmp),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, C>(tree: &'a Tree<T, U>, key: &T, cmp: &C) -> Option<&'a Entry<T, U>>
where
    C: Fn(&T, &T) -> Ordering,
{
    tree.as_ref().and_then(|node| {
        match cmp(key, &node.entry.key) {
            Ordering::Greater => ceil(&node.right, key, cmp),
            Ordering::Less => {
                match ceil(&node.left, key, cmp) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, C>(tree: &'a Tree<T, U>, key: &T, cmp: &C) -> Option<&'a Entry<T, U>>
where
    C: Fn(&T, &T) -> Ordering,
{
    tree.as_ref().and_then(|node| {
        match cmp(key, &node.entry.key) {
            Ordering::Less => floor(&node.left, key, cmp),
            Ordering::Greater => {
                match floor(&node.right, key, cmp) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

/// Returns the number of keys in the tree that are strictly less than `key`, and whether `key`
/// itself exists in the tree.
pub fn rank<T, U, C>(tree: &Tree<T, U>, key: &T, cmp: &C) -> (usize, bool)
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut curr = tree;
    let mut ret = 0;
    while let Some(ref node) = curr {
        match cmp(key, &node.entry.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret += 1 + len(&node.left);
                curr = &node.right;
            },
            Ordering::Equal => return (ret + len(&node.left), true),
        }
    }
    (ret, false)
}

pub fn select<T, U>(tree: &Tree<T, U>, mut index: usize) -> Option<&Entry<T, U>> {
    let mut curr = tree;
    while let Some(ref node) = curr {
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                index -= left_len + 1;
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

/// Walks the entire tree and checks the ordering, length, and left-leaning red black
/// invariants. Returns the black height of the tree.
pub fn validate<T, U, C>(tree: &Tree<T, U>, cmp: &C) -> Result<usize, Violation>
where
    C: Fn(&T, &T) -> Ordering,
{
    if is_red(tree) {
        return Err(Violation::RedRoot);
    }
    validate_subtree(tree, None, None, cmp)
}

fn validate_subtree<T, U, C>(
    tree: &Tree<T, U>,
    lower: Option<&T>,
    upper: Option<&T>,
    cmp: &C,
) -> Result<usize, Violation>
where
    C: Fn(&T, &T) -> Ordering,
{
    let node = match tree {
        None => return Ok(0),
        Some(ref node) => node,
    };

    let key = &node.entry.key;
    let above_lower = lower.map_or(true, |lower| cmp(key, lower) == Ordering::Greater);
    let below_upper = upper.map_or(true, |upper| cmp(key, upper) == Ordering::Less);
    if !above_lower || !below_upper {
        return Err(Violation::UnorderedKeys);
    }
    if node.len != 1 + len(&node.left) + len(&node.right) {
        return Err(Violation::InconsistentLen);
    }
    if is_red(&node.right) {
        return Err(Violation::RedRightLink);
    }
    if node.is_red() && is_red(&node.left) {
        return Err(Violation::ConsecutiveReds);
    }

    let left_blacks = validate_subtree(&node.left, lower, Some(key), cmp)?;
    let right_blacks = validate_subtree(&node.right, Some(key), upper, cmp)?;
    if left_blacks != right_blacks {
        return Err(Violation::UnbalancedBlacks);
    }

    match node.color {
        Color::Red => Ok(left_blacks),
        Color::Black => Ok(left_blacks + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::{insert, rank, remove, remove_max, remove_min, select, validate, Tree};
    use crate::red_black_tree::node::{Color, Node};
    use crate::red_black_tree::Violation;
    use std::cmp::Ordering;

    fn cmp(a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    fn build(keys: &[u32]) -> Tree<u32, u32> {
        let mut tree = None;
        for key in keys {
            insert(&mut tree, Node::new(*key, *key), &cmp);
            super::blacken_root(&mut tree);
        }
        tree
    }

    fn keys(tree: &Tree<u32, u32>, acc: &mut Vec<u32>) {
        if let Some(ref node) = tree {
            keys(&node.left, acc);
            acc.push(node.entry.key);
            keys(&node.right, acc);
        }
    }

    #[test]
    fn test_insert_ascending() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        let mut acc = Vec::new();
        keys(&tree, &mut acc);
        assert_eq!(acc, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(super::len(&tree), 7);
        assert_eq!(validate(&tree, &cmp), Ok(3));
        assert_eq!(super::height(&tree), 3);
    }

    #[test]
    fn test_remove_min_max() {
        let mut tree = build(&[5, 3, 8, 1, 4]);

        super::redden_root(&mut tree);
        assert_eq!(remove_min(&mut tree).entry.key, 1);
        super::blacken_root(&mut tree);
        assert!(validate(&tree, &cmp).is_ok());

        super::redden_root(&mut tree);
        assert_eq!(remove_max(&mut tree).entry.key, 8);
        super::blacken_root(&mut tree);
        assert!(validate(&tree, &cmp).is_ok());
        assert_eq!(super::len(&tree), 3);
    }

    #[test]
    fn test_remove_internal_node() {
        let mut tree = build(&(0..32).collect::<Vec<u32>>());
        super::redden_root(&mut tree);
        let entry = remove(&mut tree, &15, &cmp);
        super::blacken_root(&mut tree);

        assert_eq!(entry.key, 15);
        assert_eq!(super::len(&tree), 31);
        assert!(validate(&tree, &cmp).is_ok());
        assert_eq!(rank(&tree, &15, &cmp), (15, false));
        assert_eq!(rank(&tree, &16, &cmp), (15, true));
    }

    #[test]
    fn test_select() {
        let tree = build(&[10, 20, 30, 40]);
        assert_eq!(select(&tree, 0).map(|entry| entry.key), Some(10));
        assert_eq!(select(&tree, 3).map(|entry| entry.key), Some(40));
        assert!(select(&tree, 4).is_none());
    }

    #[test]
    fn test_validate_red_root() {
        let mut tree = build(&[1]);
        if let Some(ref mut node) = tree {
            node.color = Color::Red;
        }
        assert_eq!(validate(&tree, &cmp), Err(Violation::RedRoot));
    }

    #[test]
    fn test_validate_red_right_link() {
        let mut node = Node::new(1, 1);
        node.color = Color::Black;
        node.right = Some(Box::new(Node::new(2, 2)));
        node.update();
        let tree = Some(Box::new(node));
        assert_eq!(validate(&tree, &cmp), Err(Violation::RedRightLink));
    }

    #[test]
    fn test_validate_inconsistent_len() {
        let mut tree = build(&[1, 2, 3]);
        if let Some(ref mut node) = tree {
            node.len = 7;
        }
        assert_eq!(validate(&tree, &cmp), Err(Violation::InconsistentLen));
    }

    #[test]
    fn test_validate_unordered_keys() {
        let mut tree = build(&[1, 2, 3]);
        if let Some(ref mut node) = tree {
            node.entry.key = 0;
        }
        assert_eq!(validate(&tree, &cmp), Err(Violation::UnorderedKeys));
    }

    #[test]
    fn test_validate_unbalanced_blacks() {
        let mut node = Node::new(2, 2);
        node.color = Color::Black;
        let mut child = Node::new(1, 1);
        child.color = Color::Black;
        node.left = Some(Box::new(child));
        node.update();
        let tree = Some(Box::new(node));
        assert_eq!(validate(&tree, &cmp), Err(Violation::UnbalancedBlacks));
    }
}
