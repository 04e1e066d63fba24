use crate::dialect::*;

#[test]
fn parse_language_only_defaults_to_3_1() {
    let dialect: DialectConfig = "xpath".parse().unwrap();
    assert_eq!(dialect, DialectConfig::xpath(Version::V3_1));
}

#[test]
fn parse_with_vendor() {
    let dialect: DialectConfig = "xpath-4.0+saxon-10".parse().unwrap();
    assert_eq!(
        dialect,
        DialectConfig::xpath(Version::V4_0).with_vendor(Vendor::Saxon {
            major: 10,
            minor: 0
        })
    );

    let dialect: DialectConfig = "XQuery-3.1+BaseX-9.1".parse().unwrap();
    assert_eq!(
        dialect.vendor,
        Vendor::BaseX {
            major: 9,
            minor: 1
        }
    );
}

#[test]
fn display_round_trips() {
    for text in ["xpath-1.0", "xquery-3.1", "xpath-4.0+saxon-10.0", "xquery-3.0+basex-9.1"] {
        let dialect: DialectConfig = text.parse().unwrap();
        assert_eq!(dialect.to_string(), text);
    }
}

#[test]
fn parse_errors() {
    insta::assert_snapshot!(
        "xslt-3.0".parse::<DialectConfig>().unwrap_err().to_string(),
        @"unknown language `xslt` (expected `xpath` or `xquery`)"
    );
    insta::assert_snapshot!(
        "xquery-2.0".parse::<DialectConfig>().unwrap_err().to_string(),
        @"XQuery has no version 2.0"
    );
    insta::assert_snapshot!(
        "xpath-3.1+saxon-x".parse::<DialectConfig>().unwrap_err().to_string(),
        @"invalid vendor version `x`"
    );
    insta::assert_snapshot!(
        "xpath-3.1+oracle-1".parse::<DialectConfig>().unwrap_err().to_string(),
        @"unknown vendor `oracle` (expected `saxon` or `basex`)"
    );
}

#[test]
fn xpath_versions_are_cumulative() {
    let v1 = DialectConfig::xpath(Version::V1_0);
    assert!(!v1.is_enabled(Features::XPATH_20));
    assert!(!v1.is_enabled(Features::XQUERY));

    let v31 = DialectConfig::xpath(Version::V3_1);
    assert!(v31.is_enabled(Features::XPATH_20 | Features::XPATH_30 | Features::XPATH_31));
    assert!(!v31.is_enabled(Features::TERNARY));
    assert!(!v31.is_enabled(Features::XQUERY));
}

#[test]
fn xquery_1_0_has_xpath_2_0_expressions() {
    let dialect = DialectConfig::xquery(Version::V1_0);
    assert!(dialect.is_enabled(Features::XPATH_20));
    assert!(dialect.is_enabled(Features::XQUERY));
    assert!(!dialect.is_enabled(Features::XQUERY_30));
    assert!(!dialect.is_enabled(Features::XPATH_30));
}

#[test]
fn string_constructor_needs_xquery_3_1() {
    assert!(!DialectConfig::xquery(Version::V3_0).is_enabled(Features::STRING_CONSTRUCTOR));
    assert!(DialectConfig::xquery(Version::V3_1).is_enabled(Features::STRING_CONSTRUCTOR));
    assert!(!DialectConfig::xpath(Version::V4_0).is_enabled(Features::STRING_CONSTRUCTOR));
}

#[test]
fn vendor_features() {
    let basex = DialectConfig::xquery(Version::V3_1).with_vendor(Vendor::BaseX {
        major: 9,
        minor: 1,
    });
    assert!(basex.is_enabled(Features::TERNARY));
    assert!(basex.is_enabled(Features::ELVIS));
    assert!(!basex.is_enabled(Features::OTHERWISE));

    let old_basex = DialectConfig::xquery(Version::V3_1).with_vendor(Vendor::BaseX {
        major: 9,
        minor: 0,
    });
    assert!(!old_basex.is_enabled(Features::TERNARY));

    let saxon98 = DialectConfig::xpath(Version::V3_1).with_vendor(Vendor::Saxon {
        major: 9,
        minor: 8,
    });
    assert!(saxon98.is_enabled(Features::SAXON_TUPLE_TYPE));
    assert!(saxon98.is_enabled(Features::LOCAL_UNION_TYPE));
    assert!(!saxon98.is_enabled(Features::SAXON_LOGICAL_OPERATORS));
    assert!(!saxon98.is_enabled(Features::SAXON_LAMBDA));

    let saxon10 = DialectConfig::xpath(Version::V3_1).with_vendor(Vendor::Saxon {
        major: 10,
        minor: 0,
    });
    assert!(saxon10.is_enabled(Features::SAXON_LAMBDA | Features::OTHERWISE));
    assert!(!saxon10.is_enabled(Features::ELVIS));
}

#[test]
fn elvis_is_basex_only() {
    assert!(!DialectConfig::xquery(Version::V4_0).is_enabled(Features::ELVIS));
    assert!(DialectConfig::xquery(Version::V4_0).is_enabled(Features::TERNARY));
}

#[test]
fn accepted_by_names_a_dialect() {
    insta::assert_snapshot!(Features::XPATH_31.accepted_by(), @"XPath 3.1");
    insta::assert_snapshot!(Features::TERNARY.accepted_by(), @"XPath 4.0 or BaseX 9.1");
    insta::assert_snapshot!(Features::ELVIS.accepted_by(), @"BaseX 9.1");
    insta::assert_snapshot!(Features::SAXON_LAMBDA.accepted_by(), @"Saxon 10");
    insta::assert_snapshot!(Features::RECORD_TYPE.accepted_by(), @"XPath 4.0");
}

#[test]
fn serde_round_trip() {
    let dialect = DialectConfig::xpath(Version::V4_0).with_vendor(Vendor::Saxon {
        major: 10,
        minor: 0,
    });
    let json = serde_json::to_string(&dialect).unwrap();
    insta::assert_snapshot!(json, @r#"{"language":"xpath","version":"4.0","vendor":{"saxon":{"major":10,"minor":0}}}"#);
    let back: DialectConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dialect);
}
