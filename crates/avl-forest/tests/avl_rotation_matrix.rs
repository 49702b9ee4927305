use avl_forest::avl::{assert_avl_tree, node_swap, rotate_left, rotate_right, AvlNode};
use avl_forest::{AvlMap, TreeError};

type N = AvlNode<i32, ()>;

fn node(k: i32, bf: i8) -> N {
    let mut n = AvlNode::new(k, ());
    n.bf = bf;
    n
}

fn link_l(arena: &mut [N], p: u32, c: u32) {
    arena[p as usize].l = Some(c);
    arena[c as usize].p = Some(p);
}

fn link_r(arena: &mut [N], p: u32, c: u32) {
    arena[p as usize].r = Some(c);
    arena[c as usize].p = Some(p);
}

fn shape(map: &AvlMap<i32, i32>) -> (i32, Option<i32>, Option<i32>) {
    let root = map.root_index().unwrap();
    let n = map.node(root);
    (n.k, n.l.map(|i| *map.key(i)), n.r.map(|i| *map.key(i)))
}

#[test]
fn rotate_left_resolves_right_chain_matrix() {
    // 1 → 2 → 3, balances as right after inserting 3 and before fix-up.
    let mut arena = vec![node(1, 2), node(2, 1), node(3, 0)];
    link_r(&mut arena, 0, 1);
    link_r(&mut arena, 1, 2);
    let mut root = Some(0);

    rotate_left(&mut arena, &mut root, 0);

    assert_eq!(root, Some(1));
    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[1].r, Some(2));
    assert_eq!(arena[0].p, Some(1));
    assert_eq!(arena[0].r, None);
    assert_eq!((arena[0].bf, arena[1].bf, arena[2].bf), (0, 0, 0));
    assert_avl_tree(&arena, root, &i32::cmp).unwrap();
}

#[test]
fn rotate_right_recomputes_balances_analytically_matrix() {
    //     2            1
    //    / \            \
    //   1   3    →       2
    //                     \
    //                      3
    let mut arena = vec![node(2, 0), node(1, 0), node(3, 0)];
    link_l(&mut arena, 0, 1);
    link_r(&mut arena, 0, 2);
    let mut root = Some(0);

    rotate_right(&mut arena, &mut root, 0);

    assert_eq!(root, Some(1));
    assert_eq!(arena[1].r, Some(0));
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, Some(2));
    assert_eq!(arena[0].bf, 1);
    assert_eq!(arena[1].bf, 2);
}

#[test]
fn rotate_moves_inner_grandchild_across_matrix() {
    //       4              2
    //      / \            / \
    //     2   5    →     1   4
    //    / \                / \
    //   1   3              3   5
    let mut arena = vec![node(4, -1), node(2, 0), node(5, 0), node(1, 0), node(3, 0)];
    link_l(&mut arena, 0, 1);
    link_r(&mut arena, 0, 2);
    link_l(&mut arena, 1, 3);
    link_r(&mut arena, 1, 4);
    let mut root = Some(0);

    rotate_right(&mut arena, &mut root, 0);

    assert_eq!(root, Some(1));
    assert_eq!(arena[0].l, Some(4));
    assert_eq!(arena[4].p, Some(0));
    assert_eq!(arena[1].l, Some(3));
    assert_eq!(arena[1].r, Some(0));
    assert_eq!(arena[0].bf, 0);
    assert_eq!(arena[1].bf, 1);
}

#[test]
fn rotate_below_root_updates_parent_link_matrix() {
    //   10
    //     \
    //      20 → 30
    let mut arena = vec![node(10, 2), node(20, 1), node(30, 0)];
    link_r(&mut arena, 0, 1);
    link_r(&mut arena, 1, 2);
    let mut root = Some(0);

    rotate_left(&mut arena, &mut root, 1);

    assert_eq!(root, Some(0));
    assert_eq!(arena[0].r, Some(2));
    assert_eq!(arena[2].p, Some(0));
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[1].p, Some(2));
}

#[test]
fn rotate_without_child_is_noop_matrix() {
    let mut arena = vec![node(1, 0)];
    let mut root = Some(0);

    rotate_left(&mut arena, &mut root, 0);
    rotate_right(&mut arena, &mut root, 0);

    assert_eq!(root, Some(0));
    assert_eq!((arena[0].p, arena[0].l, arena[0].r), (None, None, None));
    assert_eq!(arena[0].bf, 0);
}

#[test]
fn node_swap_keeps_balances_with_positions_matrix() {
    //     2            1
    //    / \          / \
    //   1   3   →    2   3
    //        \            \
    //         4            4
    let mut arena = vec![node(2, 1), node(1, 0), node(3, 1), node(4, 0)];
    link_l(&mut arena, 0, 1);
    link_r(&mut arena, 0, 2);
    link_r(&mut arena, 2, 3);
    let mut root = Some(0);

    node_swap(&mut arena, &mut root, 0, 1);

    assert_eq!(root, Some(1));
    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[1].r, Some(2));
    assert_eq!(arena[0].p, Some(1));
    assert_eq!((arena[0].l, arena[0].r), (None, None));
    assert_eq!(arena[2].p, Some(1));
    assert_eq!(arena[3].p, Some(2));
    assert_eq!(arena[1].bf, 1);
    assert_eq!(arena[0].bf, 0);
}

#[test]
fn insert_single_rotation_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.insert(1, 1);
    map.insert(2, 2);
    map.insert(3, 3);

    assert_eq!(shape(&map), (2, Some(1), Some(3)));
    for i in map.handles() {
        assert_eq!(map.balance(i), 0);
    }
    map.assert_valid().unwrap();

    let mut mirror = AvlMap::<i32, i32>::new();
    mirror.extend([(3, 3), (2, 2), (1, 1)]);
    assert_eq!(shape(&mirror), (2, Some(1), Some(3)));
    mirror.assert_valid().unwrap();
}

#[test]
fn insert_double_rotation_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.insert(3, 3);
    map.insert(1, 1);
    map.insert(2, 2);

    assert_eq!(shape(&map), (2, Some(1), Some(3)));
    for i in map.handles() {
        assert_eq!(map.balance(i), 0);
    }
    map.assert_valid().unwrap();

    let mut mirror = AvlMap::<i32, i32>::new();
    mirror.extend([(1, 1), (3, 3), (2, 2)]);
    assert_eq!(shape(&mirror), (2, Some(1), Some(3)));
    mirror.assert_valid().unwrap();
}

#[test]
fn insert_absorbed_without_rotation_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.extend([(2, 0), (1, 0)]);
    let root = map.root_index().unwrap();
    assert_eq!(map.balance(root), -1);

    map.insert(3, 0);
    assert_eq!(shape(&map), (2, Some(1), Some(3)));
    assert_eq!(map.balance(root), 0);
}

#[test]
fn remove_two_children_root_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.extend([(2, 20), (1, 10), (3, 30)]);

    assert_eq!(map.remove(&2), Some(20));

    assert_eq!(shape(&map), (1, None, Some(3)));
    let root = map.root_index().unwrap();
    assert_eq!(map.balance(root), 1);
    assert_eq!(map.get(&1), Some(&10));
    assert_eq!(map.get(&3), Some(&30));
    assert_eq!(map.len(), 2);
    map.assert_valid().unwrap();
}

#[test]
fn remove_single_rotation_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.extend([(2, 0), (1, 0), (3, 0), (4, 0)]);

    map.remove(&1);

    assert_eq!(shape(&map), (3, Some(2), Some(4)));
    for i in map.handles() {
        assert_eq!(map.balance(i), 0);
    }
    map.assert_valid().unwrap();
}

#[test]
fn remove_single_rotation_keeps_height_matrix() {
    // The heavy child is balanced, so the rotated subtree keeps its height.
    let mut map = AvlMap::<i32, i32>::new();
    map.extend([(2, 0), (1, 0), (4, 0), (3, 0), (5, 0)]);

    map.remove(&1);

    assert_eq!(shape(&map), (4, Some(2), Some(5)));
    let root = map.root_index().unwrap();
    assert_eq!(map.balance(root), -1);
    let left = map.find(&2).unwrap();
    assert_eq!(map.balance(left), 1);
    map.assert_valid().unwrap();
}

#[test]
fn remove_double_rotation_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.extend([(3, 0), (1, 0), (4, 0), (2, 0)]);

    map.remove(&4);

    assert_eq!(shape(&map), (2, Some(1), Some(3)));
    for i in map.handles() {
        assert_eq!(map.balance(i), 0);
    }
    map.assert_valid().unwrap();
}

#[test]
fn remove_fix_continues_past_rotation_matrix() {
    // Level-order inserts build the tree without rotations:
    //
    //            16
    //        /        \
    //       8          20
    //     /   \       /  \
    //    4     12    18   21
    //   ...   ...   /
    //              17
    //
    // Removing 21 rotates at 20, which shortens the right side of 16, so 16
    // has to rotate as well.
    let keys = [16, 8, 20, 4, 12, 18, 21, 2, 6, 10, 14, 17, 1, 3, 5, 7, 9, 11, 13, 15];
    let mut map = AvlMap::<i32, i32>::new();
    map.extend(keys.map(|k| (k, k)));
    map.assert_valid().unwrap();
    assert_eq!(shape(&map), (16, Some(8), Some(20)));
    assert_eq!(map.height(), 5);

    map.remove(&21);

    map.assert_valid().unwrap();
    assert_eq!(shape(&map), (8, Some(4), Some(16)));
    assert_eq!(map.balance(map.root_index().unwrap()), 1);
    let sixteen = map.find(&16).unwrap();
    assert_eq!(map.key(map.node(sixteen).r.unwrap()), &18);
    assert_eq!(map.height(), 5);
    let expected: Vec<i32> = (1..=18).chain([20]).collect();
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn assert_avl_tree_detects_balance_mismatch_matrix() {
    // Root claims to be balanced over a lone left child.
    let mut arena = vec![node(2, 0), node(1, 0)];
    link_l(&mut arena, 0, 1);

    let err = assert_avl_tree(&arena, Some(0), &i32::cmp).unwrap_err();
    assert_eq!(
        err,
        TreeError::BalanceMismatch {
            node: 0,
            expected: -1,
            actual: 0
        }
    );
    assert_eq!(err.to_string(), "node 0: balance factor is 0, subtree heights give -1");

    arena[0].bf = -1;
    assert_eq!(assert_avl_tree(&arena, Some(0), &i32::cmp), Ok(()));
}

#[test]
fn assert_avl_tree_detects_unbalanced_matrix() {
    // 3 ← 2 ← 1 with truthful balances, left-heavy past the AVL bound.
    let mut arena = vec![node(3, -2), node(2, -1), node(1, 0)];
    link_l(&mut arena, 0, 1);
    link_l(&mut arena, 1, 2);

    assert_eq!(
        assert_avl_tree(&arena, Some(0), &i32::cmp),
        Err(TreeError::Unbalanced {
            node: 0,
            balance: -2
        })
    );

    let mut root = Some(0);
    rotate_right(&mut arena, &mut root, 0);
    assert_eq!(root, Some(1));
    assert_eq!(assert_avl_tree(&arena, root, &i32::cmp), Ok(()));
}
