use crate::dialect::{DialectConfig, Vendor, Version};
use crate::parser::tests::{dump_invalid, dump_valid, xpath};

#[test]
fn multiplication_binds_tighter() {
    insta::assert_snapshot!(dump_valid("1 + 2 * 3", xpath()), @r#"
    Root
      AdditiveExpr
        IntegerLiteral "1"
        Plus "+"
        MultiplicativeExpr
          IntegerLiteral "2"
          Star "*"
          IntegerLiteral "3"
    "#);
}

#[test]
fn additive_is_left_associative() {
    insta::assert_snapshot!(dump_valid("1 - 2 - 3", xpath()), @r#"
    Root
      AdditiveExpr
        AdditiveExpr
          IntegerLiteral "1"
          Minus "-"
          IntegerLiteral "2"
        Minus "-"
        IntegerLiteral "3"
    "#);
}

#[test]
fn comparison_is_not_associative() {
    insta::assert_snapshot!(dump_invalid("1 = 2 = 3", xpath()), @r#"
    Root
      ComparisonExpr
        ComparisonExpr
          IntegerLiteral "1"
          Equals "="
          IntegerLiteral "2"
        Equals "="
        IntegerLiteral "3"
    ---
    error[XPST0003] at 6..7: operator is not associative: `=`
    "#);
}

#[test]
fn unary_signs_stack() {
    insta::assert_snapshot!(dump_valid("-+1", xpath()), @r#"
    Root
      UnaryExpr
        Minus "-"
        Plus "+"
        IntegerLiteral "1"
    "#);
}

#[test]
fn sequence_and_range() {
    insta::assert_snapshot!(dump_valid("(1 to 3, 5)", xpath()), @r#"
    Root
      ParenthesizedExpr
        ParenOpen "("
        Expr
          RangeExpr
            IntegerLiteral "1"
            KwTo "to"
            IntegerLiteral "3"
          Comma ","
          IntegerLiteral "5"
        ParenClose ")"
    "#);
}

#[test]
fn conditional() {
    insta::assert_snapshot!(dump_valid("if ($a) then 1 else 2", xpath()), @r#"
    Root
      IfExpr
        KwIf "if"
        ParenOpen "("
        VarRef
          Dollar "$"
          Name
            NCName "a"
        ParenClose ")"
        KwThen "then"
        IntegerLiteral "1"
        KwElse "else"
        IntegerLiteral "2"
    "#);
}

#[test]
fn arrow_call() {
    insta::assert_snapshot!(dump_valid("$s => upper-case()", xpath()), @r#"
    Root
      ArrowExpr
        VarRef
          Dollar "$"
          Name
            NCName "s"
        Arrow "=>"
        Name
          NCName "upper-case"
        ArgumentList
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn instance_of_with_occurrence() {
    insta::assert_snapshot!(dump_valid("1 instance of xs:integer+", xpath()), @r#"
    Root
      InstanceofExpr
        IntegerLiteral "1"
        KwInstance "instance"
        KwOf "of"
        SequenceType
          QName
            NCName "xs"
            Colon ":"
            NCName "integer"
          Plus "+"
    "#);
}

#[test]
fn quantified() {
    insta::assert_snapshot!(dump_valid("some $x in (1, 2) satisfies $x = 2", xpath()), @r#"
    Root
      QuantifiedExpr
        KwSome "some"
        QuantifiedBinding
          Dollar "$"
          Name
            NCName "x"
          KwIn "in"
          ParenthesizedExpr
            ParenOpen "("
            Expr
              IntegerLiteral "1"
              Comma ","
              IntegerLiteral "2"
            ParenClose ")"
        KwSatisfies "satisfies"
        ComparisonExpr
          VarRef
            Dollar "$"
            Name
              NCName "x"
          Equals "="
          IntegerLiteral "2"
    "#);
}

#[test]
fn keywords_are_names_in_name_positions() {
    insta::assert_snapshot!(dump_valid("$return", xpath()), @r#"
    Root
      VarRef
        Dollar "$"
        Name
          NCName "return"
    "#);
}

#[test]
fn saxon_logical_operators() {
    let dialect = DialectConfig::xpath(Version::V3_1).with_vendor(Vendor::Saxon { major: 9, minor: 9 });
    insta::assert_snapshot!(dump_valid("a orElse b", dialect), @r#"
    Root
      OrExpr
        Name
          NCName "a"
        KwOrElse "orElse"
        Name
          NCName "b"
    "#);
}
