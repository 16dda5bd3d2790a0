use phylolabel::nexus::{parse_str, write_nexus};
use phylolabel::newick::to_newick;
use phylolabel::parser::ParseErrorKind;

const SIMPLE_NEXUS: &str = "#NEXUS\n\
    Begin Trees;\n\
    \tTree tree1 = ((A:0.1,B:0.2):0.3,C:0.4);\n\
    End;\n";

#[test]
fn test_parse_simple_nexus() {
    let tree = parse_str(SIMPLE_NEXUS).unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(to_newick(&tree), "((A:0.1,B:0.2):0.3,C:0.4);");
}

#[test]
fn test_parse_with_translate() {
    let nexus = "#NEXUS\n\
        Begin Trees;\n\
        \tTranslate\n\
        \t\t1 Homo_sapiens,\n\
        \t\t2 Homo_erectus,\n\
        \t\t3 Pan_troglodytes;\n\
        \tTree tree1 = ((1:0.1,2:0.2):0.3,3:0.4);\n\
        End;\n";
    let tree = parse_str(nexus).unwrap();

    let leaves = tree.terminals();
    assert_eq!(tree[leaves[0]].name(), Some("Homo_sapiens"));
    assert_eq!(tree[leaves[1]].name(), Some("Homo_erectus"));
    assert_eq!(tree[leaves[2]].name(), Some("Pan_troglodytes"));
}

#[test]
fn test_parse_skips_other_blocks() {
    let nexus = "#NEXUS\n\
        Begin Taxa;\n\
        \tDimensions ntax=2;\n\
        \tTaxlabels A B;\n\
        End;\n\
        Begin Trees;\n\
        \tTree tree1 = (A:1,B:2);\n\
        End;\n";
    let tree = parse_str(nexus).unwrap();

    assert_eq!(tree.num_leaves(), 2);
    assert_eq!(to_newick(&tree), "(A:1,B:2);");
}

#[test]
fn test_parse_rooted_comment_in_tree_command() {
    let nexus = "#NEXUS\n\
        Begin Trees;\n\
        \tTree tree1 = [&R] (A,(B,C));\n\
        End;\n";
    let tree = parse_str(nexus).unwrap();
    assert_eq!(to_newick(&tree), "(A,(B,C));");
}

#[test]
fn test_parse_is_case_insensitive() {
    let nexus = "#nexus\n\
        BEGIN TREES;\n\
        \tTREE t1 = (A,B);\n\
        END;\n";
    let tree = parse_str(nexus).unwrap();
    assert_eq!(tree.num_leaves(), 2);
}

#[test]
fn test_first_tree_is_returned() {
    let nexus = "#NEXUS\n\
        Begin Trees;\n\
        \tTree first = (A,B);\n\
        \tTree second = (C,D);\n\
        End;\n";
    let tree = parse_str(nexus).unwrap();
    assert_eq!(to_newick(&tree), "(A,B);");
}

#[test]
fn test_missing_header_is_error() {
    let err = parse_str("Begin Trees;\nTree t = (A,B);\nEnd;\n").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::MissingNexusHeader));
}

#[test]
fn test_missing_trees_block_is_error() {
    let nexus = "#NEXUS\nBegin Taxa;\nTaxlabels A B;\nEnd;\n";
    let err = parse_str(nexus).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::InvalidTreesBlock(_)));
}

#[test]
fn test_trees_block_without_tree_is_error() {
    let nexus = "#NEXUS\nBegin Trees;\nEnd;\n";
    let err = parse_str(nexus).unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::InvalidTreesBlock(_)));
}

#[test]
fn test_translate_without_terminator_is_error() {
    let nexus = "#NEXUS\nBegin Trees;\nTranslate 1 A, 2 B\n";
    assert!(parse_str(nexus).is_err());
}

// ============= Writer Tests =============

#[test]
fn test_write_nexus_output() {
    let tree = phylolabel::newick::parse_str("((A:0.1,B:0.2)AB:0.3,C:0.4);").unwrap();
    let mut out = Vec::new();
    write_nexus(&mut out, &tree).unwrap();
    let written = String::from_utf8(out).unwrap();

    assert_eq!(
        written,
        "#NEXUS\n\
         Begin Taxa;\n\
         \tDimensions ntax=3;\n\
         \tTaxlabels A B C;\n\
         End;\n\
         Begin Trees;\n\
         \tTree tree1 = ((A:0.1,B:0.2)AB:0.3,C:0.4);\n\
         End;\n"
    );
}

#[test]
fn test_write_then_parse_round_trip() {
    let newick = "((Homo_sapiens:0.1,Homo_erectus:0.2)Homo:0.3,Pan_troglodytes:0.4);";
    let tree = phylolabel::newick::parse_str(newick).unwrap();

    let mut out = Vec::new();
    write_nexus(&mut out, &tree).unwrap();
    let reparsed = parse_str(String::from_utf8(out).unwrap()).unwrap();

    assert_eq!(to_newick(&reparsed), newick);
}
