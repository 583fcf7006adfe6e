use tex2mml::arena::NodeRef;
use tex2mml::ast::MathKind;

const WORD: usize = std::mem::size_of::<usize>();

#[test]
fn test_struct_sizes() {
    assert!(
        std::mem::size_of::<MathKind>() <= 5 * WORD,
        "size of MathKind"
    );
    assert_eq!(std::mem::size_of::<NodeRef>(), WORD, "size of NodeRef");
    assert_eq!(
        std::mem::size_of::<Option<NodeRef>>(),
        WORD,
        "size of Option<NodeRef>"
    );
}
