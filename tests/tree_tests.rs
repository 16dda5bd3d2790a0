use phylolabel::model::{BranchLength, NameIndex, Tree, TreeError};

/// Builds ((A:0.2,B:0.2)AB:0.2,C:0.4); and returns the tree together
/// with the indices (a, b, c, ab, root).
fn build_small_tree() -> (Tree, [usize; 5]) {
    let mut tree = Tree::new();
    let a = tree.add_vertex(Some("A".into()), Some(BranchLength::new(0.2)));
    let b = tree.add_vertex(Some("B".into()), Some(BranchLength::new(0.2)));
    let c = tree.add_vertex(Some("C".into()), Some(BranchLength::new(0.4)));
    let ab = tree.add_vertex(Some("AB".into()), Some(BranchLength::new(0.2)));
    let root = tree.add_vertex(None, None);

    tree.attach(ab, a);
    tree.attach(ab, b);
    tree.attach(root, ab);
    tree.attach(root, c);
    tree.set_root(root);

    (tree, [a, b, c, ab, root])
}

#[test]
fn test_building_tree() {
    let (tree, [a, b, c, ab, root]) = build_small_tree();

    assert!(tree.is_valid());
    assert_eq!(tree.num_vertices(), 5);
    assert_eq!(tree.num_leaves(), 3);

    assert_eq!(tree.root().index(), root);
    assert!(!tree.root().has_parent());

    assert!(tree[a].is_leaf());
    assert!(tree[b].is_leaf());
    assert!(tree[c].is_leaf());
    assert!(!tree[ab].is_leaf());
    assert_eq!(tree[a].parent_index(), Some(ab));
    assert_eq!(tree[ab].parent_index(), Some(root));
    assert_eq!(tree[ab].children(), &[a, b]);

    assert_eq!(tree[c].name(), Some("C"));
    assert_eq!(tree[c].branch_length(), Some(BranchLength::new(0.4)));
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree = Tree::new();
    tree.root(); // Should panic
}

#[test]
fn test_terminals_in_pre_order() {
    let (tree, [a, b, c, _, _]) = build_small_tree();
    assert_eq!(tree.terminals(), vec![a, b, c]);
}

#[test]
fn test_pre_order_parents_before_children() {
    let (tree, [a, b, c, ab, root]) = build_small_tree();
    let order: Vec<usize> = tree.pre_order().map(|v| v.index()).collect();
    assert_eq!(order, vec![root, ab, a, b, c]);
}

#[test]
fn test_ancestors_nearest_first() {
    let (tree, [a, _, _, ab, root]) = build_small_tree();
    assert_eq!(tree.ancestors_of(a), vec![ab, root]);
    assert_eq!(tree.ancestors_of(root), Vec::<usize>::new());
}

#[test]
fn test_common_ancestor() {
    let (tree, [a, b, c, ab, root]) = build_small_tree();

    assert_eq!(tree.common_ancestor(&[a, b]), Ok(ab));
    assert_eq!(tree.common_ancestor(&[a, c]), Ok(root));
    assert_eq!(tree.common_ancestor(&[a, b, c]), Ok(root));
    // Ancestor-descendant pair resolves to the ancestor
    assert_eq!(tree.common_ancestor(&[ab, a]), Ok(ab));
}

#[test]
fn test_common_ancestor_of_single_vertex_is_itself() {
    let (tree, [a, _, _, _, _]) = build_small_tree();
    assert_eq!(tree.common_ancestor(&[a]), Ok(a));
}

#[test]
fn test_common_ancestor_of_empty_set_is_error() {
    let (tree, _) = build_small_tree();
    assert_eq!(tree.common_ancestor(&[]), Err(TreeError::InvalidQuery));
}

#[test]
fn test_detach_and_reattach() {
    let (mut tree, [_, _, c, ab, root]) = build_small_tree();

    tree.detach(ab);
    assert!(!tree[ab].has_parent());
    assert_eq!(tree[root].children(), &[c]);
    assert_eq!(tree.num_leaves(), 1);

    tree.attach(root, ab);
    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 3);
    // Re-attached as last child
    assert_eq!(tree[root].children(), &[c, ab]);
}

#[test]
fn test_detached_subtree_stays_queryable() {
    let (mut tree, [_, _, c, ab, _]) = build_small_tree();

    // Subsetting to a clade: detach it and make it the new root.
    tree.detach(ab);
    tree.set_root(ab);
    assert!(tree.is_valid());
    assert_eq!(tree.num_vertices(), 3);
    assert_eq!(tree.num_leaves(), 2);
    // The old root and C linger in the arena but are unreachable.
    assert!(tree.terminals().iter().all(|&leaf| leaf != c));
}

#[test]
fn test_replace_child_preserves_position() {
    let (mut tree, [_, _, c, ab, root]) = build_small_tree();

    let wrapper = tree.add_vertex(Some("W".into()), Some(BranchLength::ZERO));
    tree.replace_child(root, ab, wrapper);
    tree.attach(wrapper, ab);

    assert!(tree.is_valid());
    // Wrapper takes AB's place as first child of the root.
    assert_eq!(tree[root].children(), &[wrapper, c]);
    assert_eq!(tree[wrapper].children(), &[ab]);
    assert_eq!(tree[ab].parent_index(), Some(wrapper));
}

#[test]
fn test_zero_branch_detection() {
    let mut tree = Tree::new();
    let zero = tree.add_vertex(None, Some(BranchLength::ZERO));
    let short = tree.add_vertex(None, Some(BranchLength::new(0.001)));
    let unset = tree.add_vertex(None, None);

    assert!(tree[zero].has_zero_branch());
    assert!(!tree[short].has_zero_branch());
    assert!(!tree[unset].has_zero_branch());
}

#[test]
#[should_panic]
fn test_negative_branch_length_panics() {
    BranchLength::new(-0.1);
}

// ============= NameIndex Tests =============

#[test]
fn test_name_index_lookup() {
    let (tree, [a, _, _, ab, _]) = build_small_tree();
    let index = NameIndex::build(&tree);

    assert_eq!(index.len(), 4); // root is anonymous
    assert_eq!(index.find("A"), Some(a));
    assert_eq!(index.find("AB"), Some(ab));
    assert_eq!(index.find("Z"), None);
    assert!(!index.is_ambiguous("A"));
}

#[test]
fn test_name_index_first_occurrence_wins() {
    // (X,(X)Y); - the name X occurs twice
    let mut tree = Tree::new();
    let x1 = tree.add_vertex(Some("X".into()), None);
    let x2 = tree.add_vertex(Some("X".into()), None);
    let y = tree.add_vertex(Some("Y".into()), None);
    let root = tree.add_vertex(None, None);
    tree.attach(y, x2);
    tree.attach(root, x1);
    tree.attach(root, y);
    tree.set_root(root);

    let index = NameIndex::build(&tree);
    assert_eq!(index.find("X"), Some(x1));
    assert!(index.is_ambiguous("X"));
    assert!(!index.is_ambiguous("Y"));
}

#[test]
fn test_name_index_rebuild_after_mutation() {
    let (mut tree, [_, _, _, ab, _]) = build_small_tree();
    let mut index = NameIndex::build(&tree);

    tree.detach(ab);
    tree.set_root(ab);
    index.rebuild(&tree);

    assert_eq!(index.len(), 3); // A, B, AB
    assert_eq!(index.find("C"), None);
    assert_eq!(index.find("AB"), Some(ab));
}

#[test]
fn test_name_index_record_keeps_first_on_collision() {
    let (tree, [a, _, _, _, root]) = build_small_tree();
    let mut index = NameIndex::build(&tree);

    index.record("A", root);
    assert_eq!(index.find("A"), Some(a));
    assert!(index.is_ambiguous("A"));
}
