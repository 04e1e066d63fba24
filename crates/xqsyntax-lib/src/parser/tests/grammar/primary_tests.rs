use crate::parser::tests::{dump_invalid, dump_valid, xpath};

#[test]
fn function_call_with_context_item() {
    insta::assert_snapshot!(dump_valid("count(.)", xpath()), @r#"
    Root
      FunctionCall
        Name
          NCName "count"
        ArgumentList
          ParenOpen "("
          Dot "."
          ParenClose ")"
    "#);
}

#[test]
fn map_constructor() {
    insta::assert_snapshot!(dump_valid(r#"map { "a": 1 }"#, xpath()), @r#"
    Root
      MapConstructor
        KwMap "map"
        BraceOpen "{"
        MapConstructorEntry
          StringLiteral
            DoubleQuote "\""
            StringContents "a"
            DoubleQuote "\""
          Colon ":"
          IntegerLiteral "1"
        BraceClose "}"
    "#);
}

#[test]
fn square_array() {
    insta::assert_snapshot!(dump_valid("[1, 2]", xpath()), @r#"
    Root
      SquareArrayConstructor
        BracketOpen "["
        IntegerLiteral "1"
        Comma ","
        IntegerLiteral "2"
        BracketClose "]"
    "#);
}

#[test]
fn lookup() {
    insta::assert_snapshot!(dump_valid("$m?key", xpath()), @r#"
    Root
      PostfixExpr
        VarRef
          Dollar "$"
          Name
            NCName "m"
        Lookup
          Question "?"
          Name
            NCName "key"
    "#);
}

#[test]
fn inline_function() {
    insta::assert_snapshot!(dump_valid("function($a) { $a }", xpath()), @r#"
    Root
      InlineFunctionExpr
        KwFunction "function"
        ParamList
          ParenOpen "("
          Param
            Dollar "$"
            Name
              NCName "a"
          ParenClose ")"
        EnclosedExpr
          BraceOpen "{"
          VarRef
            Dollar "$"
            Name
              NCName "a"
          BraceClose "}"
    "#);
}

#[test]
fn named_function_reference() {
    insta::assert_snapshot!(dump_valid("fn:abs#1", xpath()), @r##"
    Root
      NamedFunctionRef
        QName
          NCName "fn"
          Colon ":"
          NCName "abs"
        Hash "#"
        IntegerLiteral "1"
    "##);
}

#[test]
fn argument_placeholder() {
    insta::assert_snapshot!(dump_valid("f(?, 1)", xpath()), @r#"
    Root
      FunctionCall
        Name
          NCName "f"
        ArgumentList
          ParenOpen "("
          ArgumentPlaceholder
            Question "?"
          Comma ","
          IntegerLiteral "1"
          ParenClose ")"
    "#);
}

#[test]
fn reserved_function_name() {
    insta::assert_snapshot!(dump_invalid("item(1)", xpath()), @r#"
    Root
      FunctionCall
        Error
          NCName "item"
        ArgumentList
          ParenOpen "("
          IntegerLiteral "1"
          ParenClose ")"
    ---
    error[XPST0003] at 0..4: `item` is a reserved function name
    "#);
}
