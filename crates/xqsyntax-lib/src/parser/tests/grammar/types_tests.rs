use crate::dialect::{DialectConfig, Version};
use crate::parser::tests::{dump_valid, xpath};

fn xpath40() -> DialectConfig {
    DialectConfig::xpath(Version::V4_0)
}

#[test]
fn any_map_test() {
    insta::assert_snapshot!(dump_valid(". instance of map(*)", xpath()), @r#"
    Root
      InstanceofExpr
        Dot "."
        KwInstance "instance"
        KwOf "of"
        AnyMapTest
          KwMap "map"
          ParenOpen "("
          Star "*"
          ParenClose ")"
    "#);
}

#[test]
fn cast_to_optional_type() {
    insta::assert_snapshot!(dump_valid("$x cast as xs:integer?", xpath()), @r#"
    Root
      CastExpr
        VarRef
          Dollar "$"
          Name
            NCName "x"
        KwCast "cast"
        KwAs "as"
        SingleType
          QName
            NCName "xs"
            Colon ":"
            NCName "integer"
          Question "?"
    "#);
}

#[test]
fn typed_function_test() {
    insta::assert_snapshot!(
        dump_valid("$f instance of function(xs:string) as item()*", xpath()),
        @r#"
    Root
      InstanceofExpr
        VarRef
          Dollar "$"
          Name
            NCName "f"
        KwInstance "instance"
        KwOf "of"
        TypedFunctionTest
          KwFunction "function"
          ParenOpen "("
          QName
            NCName "xs"
            Colon ":"
            NCName "string"
          ParenClose ")"
          KwAs "as"
          SequenceType
            AnyItemType
              KwItem "item"
              ParenOpen "("
              ParenClose ")"
            Star "*"
    "#
    );
}

#[test]
fn parenthesized_item_type() {
    insta::assert_snapshot!(dump_valid("$x instance of (xs:int)", xpath()), @r#"
    Root
      InstanceofExpr
        VarRef
          Dollar "$"
          Name
            NCName "x"
        KwInstance "instance"
        KwOf "of"
        ParenthesizedItemType
          ParenOpen "("
          QName
            NCName "xs"
            Colon ":"
            NCName "int"
          ParenClose ")"
    "#);
}

#[test]
fn parenthesized_sequence_type_is_reparsed() {
    insta::assert_snapshot!(dump_valid("$x instance of (xs:int*)", xpath40()), @r#"
    Root
      InstanceofExpr
        VarRef
          Dollar "$"
          Name
            NCName "x"
        KwInstance "instance"
        KwOf "of"
        ParenthesizedSequenceType
          ParenOpen "("
          SequenceType
            QName
              NCName "xs"
              Colon ":"
              NCName "int"
            Star "*"
          ParenClose ")"
    "#);
}

#[test]
fn choice_item_type() {
    insta::assert_snapshot!(dump_valid("$x instance of (xs:int | xs:string)", xpath40()), @r#"
    Root
      InstanceofExpr
        VarRef
          Dollar "$"
          Name
            NCName "x"
        KwInstance "instance"
        KwOf "of"
        ChoiceItemType
          ParenOpen "("
          QName
            NCName "xs"
            Colon ":"
            NCName "int"
          Pipe "|"
          QName
            NCName "xs"
            Colon ":"
            NCName "string"
          ParenClose ")"
    "#);
}

#[test]
fn record_test() {
    insta::assert_snapshot!(
        dump_valid("$r instance of record(a as xs:int, b?, *)", xpath40()),
        @r#"
    Root
      InstanceofExpr
        VarRef
          Dollar "$"
          Name
            NCName "r"
        KwInstance "instance"
        KwOf "of"
        RecordTest
          KwRecord "record"
          ParenOpen "("
          FieldDeclaration
            Name
              NCName "a"
            KwAs "as"
            QName
              NCName "xs"
              Colon ":"
              NCName "int"
          Comma ","
          FieldDeclaration
            Name
              NCName "b"
            Question "?"
          Comma ","
          Star "*"
          ParenClose ")"
    "#
    );
}
