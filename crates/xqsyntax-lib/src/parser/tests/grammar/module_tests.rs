use indoc::indoc;

use crate::parser::parse;
use crate::parser::tests::{dump_valid, xquery};

#[test]
fn empty_query() {
    insta::assert_snapshot!(parse("", xquery()).debug_tree(), @"Root");
}

#[test]
fn version_declaration() {
    insta::assert_snapshot!(dump_valid(r#"xquery version "3.1"; 1"#, xquery()), @r#"
    Root
      VersionDecl
        KwXquery "xquery"
        KwVersion "version"
        StringLiteral
          DoubleQuote "\""
          StringContents "3.1"
          DoubleQuote "\""
        Semicolon ";"
      MainModule
        QueryBody
          IntegerLiteral "1"
    "#);
}

#[test]
fn variable_declaration() {
    insta::assert_snapshot!(dump_valid("declare variable $x := 1; $x", xquery()), @r#"
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
          Semicolon ";"
        QueryBody
          VarRef
            Dollar "$"
            Name
              NCName "x"
    "#);
}

#[test]
fn library_module() {
    let input = indoc! {r#"
    module namespace m = "urn:m";
    declare function m:f() { 1 };
    "#};

    insta::assert_snapshot!(dump_valid(input, xquery()), @r#"
    Root
      LibraryModule
        ModuleDecl
          KwModule "module"
          KwNamespace "namespace"
          Name
            NCName "m"
          Equals "="
          StringLiteral
            DoubleQuote "\""
            StringContents "urn:m"
            DoubleQuote "\""
          Semicolon ";"
        Prolog
          AnnotatedDecl
            KwDeclare "declare"
            FunctionDecl
              KwFunction "function"
              QName
                NCName "m"
                Colon ":"
                NCName "f"
              ParamList
                ParenOpen "("
                ParenClose ")"
              EnclosedExpr
                BraceOpen "{"
                IntegerLiteral "1"
                BraceClose "}"
          Semicolon ";"
    "#);
}

#[test]
fn setters_and_imports_precede_declarations() {
    let input = indoc! {r#"
    declare boundary-space preserve;
    declare namespace p = "urn:p";
    import module namespace q = "urn:q" at "q.xq";
    declare option p:o "v";
    declare context item as node() external;
    p:f()
    "#};

    let parse = parse(input, xquery());
    assert!(parse.is_valid(), "{}", parse.diagnostics().printer().render());
    assert_eq!(parse.syntax().text().to_string(), input);
    let tree = parse.debug_tree();
    for kind in [
        "BoundarySpaceDecl",
        "NamespaceDecl",
        "ModuleImport",
        "OptionDecl",
        "ContextItemDecl",
        "QueryBody",
    ] {
        assert!(tree.contains(kind), "missing {kind} in\n{tree}");
    }
}
