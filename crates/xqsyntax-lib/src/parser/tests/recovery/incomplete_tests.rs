use crate::parser::tests::{dump_invalid, xpath, xquery};

#[test]
fn missing_right_operand() {
    insta::assert_snapshot!(dump_invalid("1 or", xpath()), @r#"
    Root
      OrExpr
        IntegerLiteral "1"
        KwOr "or"
        Error
    ---
    error[XPST0003] at 4..4: expected an expression
    "#);
}

#[test]
fn missing_operand_before_closer() {
    insta::assert_snapshot!(dump_invalid("(1 +)", xpath()), @r#"
    Root
      ParenthesizedExpr
        ParenOpen "("
        AdditiveExpr
          IntegerLiteral "1"
          Plus "+"
          Error
        ParenClose ")"
    ---
    error[XPST0003] at 4..4: expected an expression
    "#);
}

#[test]
fn missing_then_keeps_both_branches() {
    insta::assert_snapshot!(dump_invalid("if (1) 2 else 3", xpath()), @r#"
    Root
      IfExpr
        KwIf "if"
        ParenOpen "("
        IntegerLiteral "1"
        ParenClose ")"
        Error
        IntegerLiteral "2"
        KwElse "else"
        IntegerLiteral "3"
    ---
    error[XPST0003] at 7..7: expected `then`
    "#);
}

#[test]
fn missing_prolog_separator() {
    insta::assert_snapshot!(dump_invalid("declare variable $x := 1 $x", xquery()), @r#"
    Root
      MainModule
        Prolog
          AnnotatedDecl
            KwDeclare "declare"
            VarDecl
              KwVariable "variable"
              Dollar "$"
              Name
                NCName "x"
              Assign ":="
              IntegerLiteral "1"
          Error
        QueryBody
          VarRef
            Dollar "$"
            Name
              NCName "x"
    ---
    error[XPST0003] at 25..25: expected `;`
    "#);
}

#[test]
fn empty_xquery_body_after_prolog() {
    let parse = crate::parser::parse("declare variable $x := 1;", xquery());
    insta::assert_snapshot!(
        parse.diagnostics().printer().render(),
        @"error[XPST0003] at 25..25: expected an expression"
    );
}

#[test]
fn missing_for_binding_sequence() {
    insta::assert_snapshot!(dump_invalid("for $x in return $x", xquery()), @r#"
    Root
      MainModule
        QueryBody
          FlworExpr
            ForClause
              KwFor "for"
              ForBinding
                Dollar "$"
                Name
                  NCName "x"
                KwIn "in"
                Error
            ReturnClause
              KwReturn "return"
              VarRef
                Dollar "$"
                Name
                  NCName "x"
    ---
    error[XPST0003] at 10..10: expected an expression
    "#);
}

#[test]
fn missing_let_value() {
    insta::assert_snapshot!(dump_invalid("let $x := return $x", xpath()), @r#"
    Root
      LetExpr
        LetClause
          KwLet "let"
          LetBinding
            Dollar "$"
            Name
              NCName "x"
            Assign ":="
            Error
        ReturnClause
          KwReturn "return"
          VarRef
            Dollar "$"
            Name
              NCName "x"
    ---
    error[XPST0003] at 10..10: expected an expression
    "#);
}

#[test]
fn missing_then_branch() {
    insta::assert_snapshot!(dump_invalid("if (1) then else 2", xpath()), @r#"
    Root
      IfExpr
        KwIf "if"
        ParenOpen "("
        IntegerLiteral "1"
        ParenClose ")"
        KwThen "then"
        Error
        KwElse "else"
        IntegerLiteral "2"
    ---
    error[XPST0003] at 12..12: expected an expression
    "#);
}

#[test]
fn missing_then_branch_in_xquery() {
    let parse = crate::parser::parse("if (1) then else 2", xquery());
    let kinds: Vec<_> = parse.errors().iter().map(|e| (e.kind, e.range)).collect();
    assert_eq!(
        kinds,
        vec![(
            crate::DiagnosticKind::ExpectedExpression,
            rowan::TextRange::empty(12.into())
        )]
    );
    assert!(parse.debug_tree().contains("KwElse \"else\""));
}

#[test]
fn missing_quantified_sequence() {
    insta::assert_snapshot!(dump_invalid("some $x in satisfies 1", xpath()), @r#"
    Root
      QuantifiedExpr
        KwSome "some"
        QuantifiedBinding
          Dollar "$"
          Name
            NCName "x"
          KwIn "in"
          Error
        KwSatisfies "satisfies"
        IntegerLiteral "1"
    ---
    error[XPST0003] at 11..11: expected an expression
    "#);
}

#[test]
fn clause_keywords_stay_names_in_paths_and_operators() {
    for input in [
        "return/a",
        "count(.)",
        "count#1",
        "$a[order > 1]",
        "for $x in count return $x",
        "some $x in at satisfies $x",
    ] {
        let parse = crate::parser::parse(input, xquery());
        assert!(parse.is_valid(), "{input}: {:?}", parse.errors());
    }
}
