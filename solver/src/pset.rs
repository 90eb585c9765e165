//! A persistent, reference-counted, ordered set of signed integers.
//!
//! Used to hold the residual literal set of a clause. `insert` and `remove`
//! never mutate their input: they return a new root that shares whatever
//! subtrees it did not touch with the old one. That sharing is what lets two
//! sibling branches of the search see two different shrinkings of the same
//! original clause without copying it.
//!
//! The tree is an ordinary, unbalanced BST. It is not self-balancing;
//! pathological insertion orders can make it degenerate into a list. That
//! tradeoff is accepted in exchange for simplicity, matching the reference
//! implementation this module is modeled on.
//!
//! `Rc<Node>` already gives us reference counting and the "refdown to zero
//! frees, and recursively drops both children" behavior for free via Rust's
//! ordinary drop glue, so `refup`/`refdown` below are thin, explicit names
//! over `Rc::clone` and drop rather than a hand-rolled counter.

use std::rc::Rc;

pub type Value = i64;

#[derive(Debug)]
struct Node {
    val: Value,
    cnt: usize,
    left: Pset,
    right: Pset,
}

/// A possibly-empty persistent set. `None` is the empty set.
pub type Pset = Option<Rc<Node>>;

/// Number of elements held in `set`.
pub fn len(set: &Pset) -> usize {
    set.as_ref().map_or(0, |n| n.cnt)
}

/// `refup`: bump a holder's reference count. With `Rc` this is `clone`.
pub fn refup(set: &Pset) -> Pset {
    set.clone()
}

/// `refdown`: release a holder's reference. With `Rc` this is just letting
/// the value drop; the function exists so call sites can name the operation
/// explicitly rather than relying on scope-exit drop alone.
pub fn refdown(set: Pset) {
    drop(set)
}

/// Current reference count of the set's root node, or 0 for the empty set.
/// Exposed for the reference-count testable property.
pub fn ref_count(set: &Pset) -> usize {
    set.as_ref().map_or(0, Rc::strong_count)
}

pub fn contains(set: &Pset, val: Value) -> bool {
    match set {
        None => false,
        Some(node) => {
            if val == node.val {
                true
            } else if val < node.val {
                contains(&node.left, val)
            } else {
                contains(&node.right, val)
            }
        }
    }
}

/// Inserts `val` into `set`, returning a new root. `set` itself is left
/// intact. Panics if `val` is already present (callers guarantee
/// uniqueness at insert sites).
pub fn insert(set: &Pset, val: Value) -> Pset {
    match set {
        None => Some(Rc::new(Node {
            val,
            cnt: 1,
            left: None,
            right: None,
        })),
        Some(node) => {
            assert!(val != node.val, "pset: insert of a value already present");
            if val < node.val {
                Some(Rc::new(Node {
                    val: node.val,
                    cnt: node.cnt + 1,
                    left: insert(&node.left, val),
                    right: refup(&node.right),
                }))
            } else {
                Some(Rc::new(Node {
                    val: node.val,
                    cnt: node.cnt + 1,
                    left: refup(&node.left),
                    right: insert(&node.right, val),
                }))
            }
        }
    }
}

fn max_val(node: &Rc<Node>) -> Value {
    match &node.right {
        None => node.val,
        Some(r) => max_val(r),
    }
}

fn min_val(node: &Rc<Node>) -> Value {
    match &node.left {
        None => node.val,
        Some(l) => min_val(l),
    }
}

/// Removes the node itself (its value already matched the target), promoting
/// from whichever child subtree is larger (ties prefer min-of-right).
fn delete(node: &Rc<Node>) -> Pset {
    match (&node.left, &node.right) {
        (None, None) => None,
        (None, Some(r)) => Some(Rc::clone(r)),
        (Some(l), None) => Some(Rc::clone(l)),
        (Some(l), Some(r)) => {
            if r.cnt < l.cnt {
                let promoted = max_val(l);
                Some(Rc::new(Node {
                    val: promoted,
                    cnt: node.cnt - 1,
                    left: remove(&node.left, promoted),
                    right: refup(&node.right),
                }))
            } else {
                let promoted = min_val(r);
                Some(Rc::new(Node {
                    val: promoted,
                    cnt: node.cnt - 1,
                    left: refup(&node.left),
                    right: remove(&node.right, promoted),
                }))
            }
        }
    }
}

/// Removes `val` from `set`, returning a new root. `set` itself is left
/// intact. Panics if `val` is not present.
pub fn remove(set: &Pset, val: Value) -> Pset {
    let node = set
        .as_ref()
        .expect("pset: remove of a value that is not present");

    if val == node.val {
        delete(node)
    } else if val < node.val {
        Some(Rc::new(Node {
            val: node.val,
            cnt: node.cnt - 1,
            left: remove(&node.left, val),
            right: refup(&node.right),
        }))
    } else {
        Some(Rc::new(Node {
            val: node.val,
            cnt: node.cnt - 1,
            left: refup(&node.left),
            right: remove(&node.right, val),
        }))
    }
}

/// In-order enumeration, ascending.
pub fn iterate(set: &Pset) -> Vec<Value> {
    let mut out = Vec::with_capacity(len(set));
    iterate_into(set, &mut out);
    out
}

fn iterate_into(set: &Pset, out: &mut Vec<Value>) {
    if let Some(node) = set {
        iterate_into(&node.left, out);
        out.push(node.val);
        iterate_into(&node.right, out);
    }
}

/// Builds a set from an iterator of distinct values, in insertion order.
pub fn from_iter(values: impl IntoIterator<Item = Value>) -> Pset {
    let mut set = None;
    for v in values {
        set = insert(&set, v);
    }
    set
}

/// The sole element of a singleton set. Panics if `len(set) != 1`.
pub fn singleton(set: &Pset) -> Value {
    let node = set.as_ref().expect("pset: singleton of the empty set");
    assert!(
        node.left.is_none() && node.right.is_none(),
        "pset: singleton of a set with more than one element"
    );
    node.val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_iterate_is_sorted_unique() {
        let set = from_iter([5, 8, 6, 7, 2, 3, 1, 4]);
        assert_eq!(iterate(&set), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(len(&set), 8);
    }

    #[test]
    fn remove_does_not_mutate_the_original() {
        let original = from_iter([5, 8, 6, 7, 2, 3, 1, 4]);
        let mut derived = refup(&original);

        for v in [2, 4, 6, 8] {
            let next = remove(&derived, v);
            refdown(derived);
            derived = next;
        }

        assert_eq!(iterate(&original), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(len(&original), 8);
        assert_eq!(iterate(&derived), vec![1, 3, 5, 7]);
        assert_eq!(len(&derived), 4);
        assert!(!contains(&derived, 4));

        refdown(derived);
        refdown(original);
    }

    #[test]
    fn remove_shrinks_size_by_one_and_drops_the_value() {
        let set = from_iter([1, 2, 3]);
        let removed = remove(&set, 2);
        assert_eq!(len(&removed), 2);
        assert!(!contains(&removed, 2));
        assert_eq!(iterate(&set), vec![1, 2, 3]);
    }

    #[test]
    fn contains_reflects_membership() {
        let set = from_iter([3, 1, 4, 15, 9]);
        assert!(!contains(&set, 10));
        let with_ten = insert(&set, 10);
        assert!(contains(&with_ten, 10));
    }

    #[test]
    #[should_panic]
    fn duplicate_insert_panics() {
        let set = from_iter([1]);
        insert(&set, 1);
    }

    #[test]
    fn refdown_to_zero_frees_without_leaking() {
        let set = from_iter([1, 2, 3]);
        let clone = refup(&set);
        assert_eq!(ref_count(&set), 2);
        refdown(clone);
        assert_eq!(ref_count(&set), 1);
    }
}
