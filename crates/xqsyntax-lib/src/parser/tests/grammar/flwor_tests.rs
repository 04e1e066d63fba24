use indoc::indoc;

use crate::parser::tests::{dump_valid, xpath, xquery};

#[test]
fn xquery_for_return() {
    insta::assert_snapshot!(dump_valid("for $x in 1 to 3 return $x", xquery()), @r#"
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
                RangeExpr
                  IntegerLiteral "1"
                  KwTo "to"
                  IntegerLiteral "3"
            ReturnClause
              KwReturn "return"
              VarRef
                Dollar "$"
                Name
                  NCName "x"
    "#);
}

#[test]
fn xquery_clause_chain() {
    let input = indoc! {r#"
    for $x at $i in (1, 2)
    let $y := $x * 2
    where $y > 2
    order by $y descending
    return $y
    "#};

    insta::assert_snapshot!(dump_valid(input, xquery()), @r#"
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
                PositionalVar
                  KwAt "at"
                  Dollar "$"
                  Name
                    NCName "i"
                KwIn "in"
                ParenthesizedExpr
                  ParenOpen "("
                  Expr
                    IntegerLiteral "1"
                    Comma ","
                    IntegerLiteral "2"
                  ParenClose ")"
            LetClause
              KwLet "let"
              LetBinding
                Dollar "$"
                Name
                  NCName "y"
                Assign ":="
                MultiplicativeExpr
                  VarRef
                    Dollar "$"
                    Name
                      NCName "x"
                  Star "*"
                  IntegerLiteral "2"
            WhereClause
              KwWhere "where"
              ComparisonExpr
                VarRef
                  Dollar "$"
                  Name
                    NCName "y"
                GreaterThan ">"
                IntegerLiteral "2"
            OrderByClause
              KwOrder "order"
              KwBy "by"
              OrderSpec
                VarRef
                  Dollar "$"
                  Name
                    NCName "y"
                OrderModifier
                  KwDescending "descending"
            ReturnClause
              KwReturn "return"
              VarRef
                Dollar "$"
                Name
                  NCName "y"
    "#);
}

#[test]
fn xpath_let() {
    insta::assert_snapshot!(dump_valid("let $x := 1 return $x", xpath()), @r#"
    Root
      LetExpr
        LetClause
          KwLet "let"
          LetBinding
            Dollar "$"
            Name
              NCName "x"
            Assign ":="
            IntegerLiteral "1"
        ReturnClause
          KwReturn "return"
          VarRef
            Dollar "$"
            Name
              NCName "x"
    "#);
}

#[test]
fn xpath_for_takes_several_bindings() {
    let parse = crate::parser::parse("for $a in 1, $b in 2 return $a + $b", xpath());
    assert!(parse.is_valid());
    let tree = parse.debug_tree();
    assert!(tree.starts_with("Root\n  ForExpr\n    ForClause\n"));
    assert_eq!(tree.matches("ForBinding").count(), 2);
}
