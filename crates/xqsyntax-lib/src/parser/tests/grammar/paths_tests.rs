use crate::parser::tests::{dump_invalid, dump_valid, xpath};

#[test]
fn absolute_path_with_axis_and_predicate() {
    insta::assert_snapshot!(dump_valid("/child::a/b[1]", xpath()), @r#"
    Root
      PathExpr
        Slash "/"
        AxisStep
          ForwardAxis
            KwChild "child"
            ColonColon "::"
          Name
            NCName "a"
        Slash "/"
        AxisStep
          Name
            NCName "b"
          Predicate
            BracketOpen "["
            IntegerLiteral "1"
            BracketClose "]"
    "#);
}

#[test]
fn abbreviated_steps() {
    insta::assert_snapshot!(dump_valid("../@id", xpath()), @r#"
    Root
      PathExpr
        DotDot ".."
        Slash "/"
        AxisStep
          At "@"
          Name
            NCName "id"
    "#);
}

#[test]
fn descendant_shorthand() {
    insta::assert_snapshot!(dump_valid("//para", xpath()), @r#"
    Root
      PathExpr
        SlashSlash "//"
        Name
          NCName "para"
    "#);
}

#[test]
fn lone_slash_is_the_root() {
    insta::assert_snapshot!(dump_valid("/", xpath()), @r#"
    Root
      PathExpr
        Slash "/"
    "#);
}

#[test]
fn wildcards() {
    insta::assert_snapshot!(dump_valid("*:a/p:*", xpath()), @r#"
    Root
      PathExpr
        Wildcard
          Star "*"
          Colon ":"
          NCName "a"
        Slash "/"
        Wildcard
          NCName "p"
          Colon ":"
          Star "*"
    "#);
}

#[test]
fn kind_test_step() {
    insta::assert_snapshot!(dump_valid("//text()", xpath()), @r#"
    Root
      PathExpr
        SlashSlash "//"
        TextTest
          KwText "text"
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn unknown_axis() {
    insta::assert_snapshot!(dump_invalid("foo::bar", xpath()), @r#"
    Root
      AxisStep
        Error
          NCName "foo"
          ColonColon "::"
        Name
          NCName "bar"
    ---
    error[XPST0003] at 0..5: `foo` is not an axis
    "#);
}
