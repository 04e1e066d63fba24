//! Dialect selection.
//!
//! A [`DialectConfig`] fixes the language, version and vendor profile for one
//! parse. The grammar asks it which optional productions exist through
//! [`DialectConfig::is_enabled`]; a disabled production is never attempted.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    XPath,
    XQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Version {
    #[serde(rename = "1.0")]
    V1_0,
    #[serde(rename = "2.0")]
    V2_0,
    #[serde(rename = "3.0")]
    V3_0,
    #[serde(rename = "3.1")]
    V3_1,
    #[serde(rename = "4.0")]
    V4_0,
}

impl Version {
    pub fn as_str(self) -> &'static str {
        match self {
            Version::V1_0 => "1.0",
            Version::V2_0 => "2.0",
            Version::V3_0 => "3.0",
            Version::V3_1 => "3.1",
            Version::V4_0 => "4.0",
        }
    }
}

/// Vendor extension profile, with the vendor's product version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    #[default]
    W3C,
    Saxon { major: u16, minor: u16 },
    BaseX { major: u16, minor: u16 },
}

impl Vendor {
    fn saxon_at_least(self, major: u16, minor: u16) -> bool {
        matches!(self, Vendor::Saxon { major: a, minor: b } if (a, b) >= (major, minor))
    }

    fn basex_at_least(self, major: u16, minor: u16) -> bool {
        matches!(self, Vendor::BaseX { major: a, minor: b } if (a, b) >= (major, minor))
    }
}

bitflags! {
    /// Optional grammar productions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Features: u32 {
        const XPATH_20 = 1 << 0;
        const XPATH_30 = 1 << 1;
        const XPATH_31 = 1 << 2;
        const XQUERY = 1 << 3;
        const XQUERY_30 = 1 << 4;
        const STRING_CONSTRUCTOR = 1 << 5;
        const TERNARY = 1 << 6;
        const ELVIS = 1 << 7;
        const OTHERWISE = 1 << 8;
        const FOR_MEMBER = 1 << 9;
        const FOCUS_FUNCTION = 1 << 10;
        const KEYWORD_ARGUMENTS = 1 << 11;
        const BRACED_IF = 1 << 12;
        const STRING_TEMPLATE = 1 << 13;
        const NUMERIC_LITERALS_40 = 1 << 14;
        const MAPPING_ARROW = 1 << 15;
        const THIN_ARROW = 1 << 16;
        const RECORD_TYPE = 1 << 17;
        const ENUM_TYPE = 1 << 18;
        const CHOICE_ITEM_TYPE = 1 << 19;
        const WHILE_CLAUSE = 1 << 20;
        const FINALLY_CLAUSE = 1 << 21;
        const LOCAL_UNION_TYPE = 1 << 22;
        const SAXON_TUPLE_TYPE = 1 << 23;
        const SAXON_TYPE_ALIAS = 1 << 24;
        const SAXON_LOGICAL_OPERATORS = 1 << 25;
        const SAXON_LAMBDA = 1 << 26;
        const SAXON_CONTEXT_FUNCTION = 1 << 27;

        /// Everything the 4.0 drafts add on top of 3.1.
        const V40 = Self::TERNARY.bits()
            | Self::OTHERWISE.bits()
            | Self::FOR_MEMBER.bits()
            | Self::FOCUS_FUNCTION.bits()
            | Self::KEYWORD_ARGUMENTS.bits()
            | Self::BRACED_IF.bits()
            | Self::STRING_TEMPLATE.bits()
            | Self::NUMERIC_LITERALS_40.bits()
            | Self::MAPPING_ARROW.bits()
            | Self::THIN_ARROW.bits()
            | Self::RECORD_TYPE.bits()
            | Self::ENUM_TYPE.bits()
            | Self::CHOICE_ITEM_TYPE.bits()
            | Self::WHILE_CLAUSE.bits()
            | Self::FINALLY_CLAUSE.bits()
            | Self::LOCAL_UNION_TYPE.bits();
    }
}

impl Features {
    /// The earliest dialect accepting this feature, for diagnostics.
    pub fn accepted_by(self) -> &'static str {
        if self.intersects(Features::V40) {
            if self.contains(Features::TERNARY) {
                return "XPath 4.0 or BaseX 9.1";
            }
            if self.intersects(Features::OTHERWISE | Features::FOR_MEMBER) {
                return "XPath 4.0 or Saxon 10";
            }
            if self.contains(Features::LOCAL_UNION_TYPE) {
                return "XPath 4.0 or Saxon 9.8";
            }
            return "XPath 4.0";
        }
        if self.contains(Features::XPATH_20) {
            "XPath 2.0"
        } else if self.contains(Features::XPATH_30) {
            "XPath 3.0"
        } else if self.contains(Features::XPATH_31) {
            "XPath 3.1"
        } else if self.contains(Features::XQUERY_30) {
            "XQuery 3.0"
        } else if self.contains(Features::STRING_CONSTRUCTOR) {
            "XQuery 3.1"
        } else if self.contains(Features::XQUERY) {
            "XQuery"
        } else if self.contains(Features::ELVIS) {
            "BaseX 9.1"
        } else if self.intersects(Features::SAXON_TUPLE_TYPE | Features::SAXON_TYPE_ALIAS) {
            "Saxon 9.8"
        } else if self.contains(Features::SAXON_LOGICAL_OPERATORS) {
            "Saxon 9.9"
        } else {
            "Saxon 10"
        }
    }
}

/// Language, version and vendor for one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialectConfig {
    pub language: Language,
    pub version: Version,
    #[serde(default)]
    pub vendor: Vendor,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::xquery(Version::V3_1)
    }
}

impl DialectConfig {
    pub fn xpath(version: Version) -> Self {
        Self {
            language: Language::XPath,
            version,
            vendor: Vendor::W3C,
        }
    }

    pub fn xquery(version: Version) -> Self {
        Self {
            language: Language::XQuery,
            version,
            vendor: Vendor::W3C,
        }
    }

    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = vendor;
        self
    }

    pub fn is_xquery(&self) -> bool {
        self.language == Language::XQuery
    }

    /// Every feature this dialect enables.
    pub fn features(&self) -> Features {
        let version = self.version;
        let vendor = self.vendor;
        let xquery = self.is_xquery();
        let mut features = Features::empty();

        if xquery || version >= Version::V2_0 {
            features |= Features::XPATH_20;
        }
        if version >= Version::V3_0 {
            features |= Features::XPATH_30;
        }
        if version >= Version::V3_1 {
            features |= Features::XPATH_31;
        }
        if xquery {
            features |= Features::XQUERY;
            if version >= Version::V3_0 {
                features |= Features::XQUERY_30;
            }
            if version >= Version::V3_1 {
                features |= Features::STRING_CONSTRUCTOR;
            }
        }
        if version >= Version::V4_0 {
            features |= Features::V40;
        }
        if vendor.basex_at_least(9, 1) {
            features |= Features::TERNARY | Features::ELVIS;
        }
        if vendor.saxon_at_least(9, 8) {
            features |=
                Features::LOCAL_UNION_TYPE | Features::SAXON_TUPLE_TYPE | Features::SAXON_TYPE_ALIAS;
        }
        if vendor.saxon_at_least(9, 9) {
            features |= Features::SAXON_LOGICAL_OPERATORS;
        }
        if vendor.saxon_at_least(10, 0) {
            features |= Features::OTHERWISE
                | Features::FOR_MEMBER
                | Features::SAXON_LAMBDA
                | Features::SAXON_CONTEXT_FUNCTION;
        }
        features
    }

    #[inline]
    pub fn is_enabled(&self, feature: Features) -> bool {
        self.features().contains(feature)
    }
}

impl fmt::Display for DialectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = match self.language {
            Language::XPath => "xpath",
            Language::XQuery => "xquery",
        };
        write!(f, "{language}-{}", self.version.as_str())?;
        match self.vendor {
            Vendor::W3C => Ok(()),
            Vendor::Saxon { major, minor } => write!(f, "+saxon-{major}.{minor}"),
            Vendor::BaseX { major, minor } => write!(f, "+basex-{major}.{minor}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectParseError {
    #[error("unknown language `{0}` (expected `xpath` or `xquery`)")]
    UnknownLanguage(String),
    #[error("unknown version `{0}`")]
    UnknownVersion(String),
    #[error("{language} has no version {version}")]
    UnsupportedVersion {
        language: &'static str,
        version: &'static str,
    },
    #[error("unknown vendor `{0}` (expected `saxon` or `basex`)")]
    UnknownVendor(String),
    #[error("invalid vendor version `{0}`")]
    InvalidVendorVersion(String),
}

impl FromStr for DialectConfig {
    type Err = DialectParseError;

    /// Accepts `xpath`, `xquery-3.1`, `xpath-4.0+saxon-10`, `xquery-3.1+basex-9.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let (base, vendor) = match s.split_once('+') {
            Some((base, vendor)) => (base, Some(vendor)),
            None => (s.as_str(), None),
        };
        let (language, version) = match base.split_once('-') {
            Some((language, version)) => (language, Some(version)),
            None => (base, None),
        };

        let language = match language {
            "xpath" => Language::XPath,
            "xquery" | "xq" => Language::XQuery,
            other => return Err(DialectParseError::UnknownLanguage(other.to_string())),
        };
        let version = match version {
            None => Version::V3_1,
            Some("1.0" | "1") => Version::V1_0,
            Some("2.0" | "2") => Version::V2_0,
            Some("3.0" | "3") => Version::V3_0,
            Some("3.1") => Version::V3_1,
            Some("4.0" | "4") => Version::V4_0,
            Some(other) => return Err(DialectParseError::UnknownVersion(other.to_string())),
        };
        if language == Language::XQuery && version == Version::V2_0 {
            return Err(DialectParseError::UnsupportedVersion {
                language: "XQuery",
                version: version.as_str(),
            });
        }

        let vendor = match vendor {
            None | Some("w3c") => Vendor::W3C,
            Some(vendor) => parse_vendor(vendor)?,
        };

        Ok(DialectConfig {
            language,
            version,
            vendor,
        })
    }
}

fn parse_vendor(text: &str) -> Result<Vendor, DialectParseError> {
    let (name, version) = text.split_once('-').unwrap_or((text, ""));
    let (major, minor) = match version.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (version, "0"),
    };
    let invalid = || DialectParseError::InvalidVendorVersion(version.to_string());
    let major: u16 = major.parse().map_err(|_| invalid())?;
    let minor: u16 = minor.parse().map_err(|_| invalid())?;
    match name {
        "saxon" => Ok(Vendor::Saxon { major, minor }),
        "basex" => Ok(Vendor::BaseX { major, minor }),
        other => Err(DialectParseError::UnknownVendor(other.to_string())),
    }
}
