use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_interner_dedup() {
    let interner = StringInterner::new();
    let x1 = interner.intern("x");
    let y = interner.intern("y");
    let x2 = interner.intern("x");

    assert_eq!(x1, x2);
    assert_ne!(x1, y);
    assert_eq!(interner.lookup(x1), "x");
    assert_eq!(interner.lookup(y), "y");
    assert_eq!(interner.len(), 2);
    assert_eq!(interner.get("y"), Some(y));
    assert_eq!(interner.get("z"), None);
}

#[test]
fn test_op_text_roundtrip() {
    for op in Op::ALL {
        assert_eq!(Op::from_text(op.text()), Some(op));
    }
    assert_eq!(Op::from_text("=="), None);
    assert_eq!(Op::from_text("If"), None);
}

#[test]
fn test_op_precedence_table() {
    assert_eq!(Op::And.precedence(), Some(0));
    assert_eq!(Op::Or.precedence(), Some(1));
    assert_eq!(Op::Lt.precedence(), Op::Gt.precedence());
    assert_eq!(Op::Plus.precedence(), Some(3));
    assert_eq!(Op::Slash.precedence(), Op::Star.precedence());
    assert!(Op::LParen.precedence() < Op::And.precedence());
    assert_eq!(Op::While.precedence(), None);
    assert_eq!(Op::RParen.precedence(), None);
}

#[test]
fn test_push_end_collapses() {
    let mut tokens = TokenList::new();
    tokens.push_end(Span::point(0));
    assert!(tokens.is_empty(), "leading terminator must not emit End");

    tokens.push(Token::new(TokenKind::Number(1), Span::new(0, 1)));
    tokens.push_end(Span::new(1, 2));
    tokens.push_end(Span::new(2, 3));
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens.kind(1), Some(TokenKind::End));
}

#[test]
fn test_span_of_range() {
    let mut tokens = TokenList::new();
    tokens.push(Token::new(TokenKind::Number(1), Span::new(0, 1)));
    tokens.push(Token::new(TokenKind::Operator(Op::Plus), Span::new(2, 3)));
    tokens.push(Token::new(TokenKind::Number(2), Span::new(4, 5)));

    assert_eq!(tokens.span_of(TokenRange::new(0, 3)), Span::new(0, 5));
    assert_eq!(tokens.span_of(TokenRange::new(1, 2)), Span::new(2, 3));
    assert_eq!(tokens.span_of(TokenRange::new(2, 2)), Span::point(3));
    assert_eq!(tokens.span_of(TokenRange::new(0, 0)), Span::point(0));
}

#[test]
fn test_chain_iteration() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = StmtArena::new();

    let root = arena.alloc(StmtKind::Start);
    let a = arena.alloc(StmtKind::Assign {
        target: x,
        rvalue: TokenRange::new(2, 3),
    });
    let b = arena.alloc(StmtKind::Assign {
        target: x,
        rvalue: TokenRange::new(6, 7),
    });
    arena.set_next(root, a);
    arena.set_next(a, b);

    let ids: Vec<_> = arena.chain(Some(root)).collect();
    assert_eq!(ids, vec![root, a, b]);
    assert_eq!(arena.chain(None).count(), 0);
    assert_eq!(arena.get(b).next, None);
}
