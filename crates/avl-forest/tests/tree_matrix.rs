use avl_forest::{Tree, TreeError};

#[test]
fn tree_works_matrix() {
    let mut tree = Tree::with_comparator(|a: &f64, b: &f64| a.total_cmp(b));
    assert_eq!(tree.len(), 0);

    tree.insert(1.0, "a");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(&1.0), Some(&"a"));
    assert_eq!(tree.get_or_next_lower(&1.0), Some(&"a"));
    assert_eq!(tree.get_or_next_lower(&2.0), Some(&"a"));

    tree.insert(5.0, "b");
    assert_eq!(tree.get(&1.0), Some(&"a"));
    assert_eq!(tree.get(&5.0), Some(&"b"));
    assert_eq!(tree.get_or_next_lower(&2.0), Some(&"a"));
    assert_eq!(tree.get_or_next_lower(&5.0), Some(&"b"));
    assert_eq!(tree.get_or_next_lower(&6.0), Some(&"b"));

    tree.insert(6.0, "c");
    assert_eq!(tree.get_or_next_lower(&6.0), Some(&"c"));
    assert_eq!(tree.get_or_next_lower(&6.1), Some(&"c"));

    tree.insert(5.5, "d");
    assert_eq!(tree.get_or_next_lower(&5.5), Some(&"d"));
    assert_eq!(tree.get_or_next_lower(&5.6), Some(&"d"));

    tree.insert(5.4, "e");
    assert_eq!(tree.get_or_next_lower(&5.45), Some(&"e"));

    tree.insert(5.45, "f");
    assert_eq!(tree.get_or_next_lower(&5.45), Some(&"f"));
    assert_eq!(tree.get_or_next_lower(&0.5), None);
    tree.assert_valid().unwrap();
}

#[test]
fn tree_iterator_delete_matrix() {
    let mut tree = Tree::<i32, i32>::new();
    tree.insert(3, 30);
    tree.insert(1, 10);
    tree.insert(2, 20);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.max(), Some(&30));

    let mut it = tree.iter();
    assert_eq!(it.next(), Some((&1, &10)));
    assert_eq!(it.next(), Some((&2, &20)));
    assert_eq!(it.next(), Some((&3, &30)));
    assert_eq!(it.next(), None);

    assert!(tree.contains_key(&2));
    assert_eq!(tree.remove(&2), Some(20));
    assert!(!tree.contains_key(&2));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.remove(&2), None);
    assert_eq!(tree.try_get(&2), Err(TreeError::KeyNotFound));
    assert_eq!(tree.try_get(&3), Ok(&30));
    tree.assert_valid().unwrap();
}

#[test]
fn tree_stays_unbalanced_matrix() {
    let mut tree = Tree::<i32, ()>::new();
    for i in 0..32 {
        tree.insert(i, ());
    }
    assert_eq!(tree.height(), 32);
    assert!(tree.equal_paths());
    tree.assert_valid().unwrap();

    tree.insert(-1, ());
    assert!(!tree.equal_paths());
}

#[test]
fn tree_remove_two_children_matrix() {
    let mut tree = Tree::<i32, i32>::new();
    for k in [50, 30, 70, 20, 40, 60, 80, 35] {
        tree.insert(k, k);
    }
    assert!(!tree.equal_paths());

    assert_eq!(tree.remove(&50), Some(50));
    let root = tree.root_index().unwrap();
    assert_eq!(tree.node(root).k, 40);
    assert_eq!(
        tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        vec![20, 30, 35, 40, 60, 70, 80]
    );
    tree.assert_valid().unwrap();

    assert_eq!(tree.remove(&40), Some(40));
    assert_eq!(tree.node(tree.root_index().unwrap()).k, 35);
    assert!(tree.equal_paths());
    tree.assert_valid().unwrap();
}

#[test]
fn tree_to_string_matrix() {
    let mut tree = Tree::<i32, i32>::new();
    assert_eq!(tree.to_string(""), "Tree ∅");

    tree.insert(2, 0);
    tree.insert(1, 0);
    tree.insert(3, 0);
    assert_eq!(tree.to_string(""), "Tree\n└─ TreeNode 2\n  ← TreeNode 1\n  → TreeNode 3");
}
