use phylolabel::model::BranchLength;
use phylolabel::newick::{parse_str, to_newick};
use phylolabel::parser::ParseErrorKind;

#[test]
fn test_parse_simple_tree() {
    let tree = parse_str("((A:0.1,B:0.2):0.3,C:0.4);").unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_vertices(), 5);

    let leaves = tree.terminals();
    assert_eq!(tree[leaves[0]].name(), Some("A"));
    assert_eq!(tree[leaves[0]].branch_length(), Some(BranchLength::new(0.1)));
    assert_eq!(tree[leaves[2]].name(), Some("C"));
}

#[test]
fn test_parse_nary_tree() {
    let tree = parse_str("(A,B,C,D,E);").unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 5);
    assert_eq!(tree.root().children().len(), 5);
}

#[test]
fn test_parse_internal_labels() {
    let tree = parse_str("((Homo_sapiens,Homo_erectus)Homo,Pan_troglodytes)Hominidae;").unwrap();

    assert_eq!(tree.root().name(), Some("Hominidae"));
    let inner = tree.root().children()[0];
    assert_eq!(tree[inner].name(), Some("Homo"));
    // Parsing does not normalize; underscores are kept as read.
    assert_eq!(tree[tree.terminals()[0]].name(), Some("Homo_sapiens"));
}

#[test]
fn test_parse_quoted_labels() {
    let tree = parse_str("('Wilson''s petrel','Pu(ke)ko');").unwrap();
    let leaves = tree.terminals();

    assert_eq!(tree[leaves[0]].name(), Some("Wilson's petrel"));
    assert_eq!(tree[leaves[1]].name(), Some("Pu(ke)ko"));
}

#[test]
fn test_parse_anonymous_vertices() {
    let tree = parse_str("((,),);").unwrap();

    assert!(tree.is_valid());
    assert_eq!(tree.num_leaves(), 3);
    assert!(tree.pre_order().all(|v| v.name().is_none()));
}

#[test]
fn test_parse_scientific_notation_branch_length() {
    let tree = parse_str("(A:1.5e-10,B:2E3);").unwrap();
    let leaves = tree.terminals();

    assert_eq!(tree[leaves[0]].branch_length(), Some(BranchLength::new(1.5e-10)));
    assert_eq!(tree[leaves[1]].branch_length(), Some(BranchLength::new(2000.0)));
}

#[test]
fn test_parse_skips_comments_and_whitespace() {
    let tree = parse_str(" [&R] ( A : 0.1 , [comment] B : 0.2 ) ;\n").unwrap();

    assert_eq!(tree.num_leaves(), 2);
    let leaves = tree.terminals();
    assert_eq!(tree[leaves[0]].name(), Some("A"));
    assert_eq!(tree[leaves[1]].branch_length(), Some(BranchLength::new(0.2)));
}

#[test]
fn test_parse_zero_branch_lengths() {
    let tree = parse_str("((A)Genus:0,B);").unwrap();
    let genus = tree.root().children()[0];

    assert_eq!(tree[genus].name(), Some("Genus"));
    assert!(tree[genus].has_zero_branch());
}

#[test]
fn test_missing_semicolon_is_error() {
    let err = parse_str("(A,B)").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::InvalidNewick(_)));
}

#[test]
fn test_unbalanced_parentheses_is_error() {
    assert!(parse_str("((A,B;").is_err());
}

#[test]
fn test_negative_branch_length_is_error() {
    let err = parse_str("(A:-0.5,B);").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::InvalidNewick(_)));
}

#[test]
fn test_invalid_branch_length_is_error() {
    let err = parse_str("(A:abc,B);").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::InvalidNewick(_)));
}

#[test]
fn test_unclosed_comment_is_error() {
    let err = parse_str("(A,B[unclosed;").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::UnclosedComment));
}

#[test]
fn test_unterminated_quote_is_error() {
    let err = parse_str("('Wilson,B);").unwrap_err();
    assert!(matches!(err.kind(), ParseErrorKind::UnexpectedEof));
}

#[test]
fn test_error_carries_position() {
    let err = parse_str("(A:abc,B);").unwrap_err();
    assert!(err.position() > 0);
}

#[test]
fn test_parse_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "((A:0.1,B:0.2):0.3,C:0.4);").unwrap();

    let tree = phylolabel::newick::parse_file(file.path()).unwrap();
    assert_eq!(tree.num_leaves(), 3);
}

// ============= Writer Tests =============

#[test]
fn test_write_round_trip() {
    let newick = "((A:0.1,B:0.2)AB:0.3,C:0.4);";
    let tree = parse_str(newick).unwrap();
    assert_eq!(to_newick(&tree), newick);
}

#[test]
fn test_write_nary_round_trip() {
    let newick = "(A,B,(C,D,E)CDE)Root;";
    let tree = parse_str(newick).unwrap();
    assert_eq!(to_newick(&tree), newick);
}

#[test]
fn test_write_escapes_labels() {
    let tree = parse_str("('Wilson''s petrel','Homo sapiens');").unwrap();
    // Quotes where structural characters require them, underscores for
    // plain spaces.
    assert_eq!(to_newick(&tree), "('Wilson''s petrel',Homo_sapiens);");
}

#[test]
fn test_write_omits_root_branch_length() {
    let tree = parse_str("(A:1,B:2):5;").unwrap();
    assert_eq!(to_newick(&tree), "(A:1,B:2);");
}
