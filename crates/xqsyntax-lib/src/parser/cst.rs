//! Syntax kinds for XPath and XQuery.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the parser).
//! Logos derives recognition of expression-mode tokens; kinds produced by the hand-written
//! scanners (strings, comments, XML constructor content) and node kinds carry no attributes.
//! `XqLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then the `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(".")]
    Dot,

    #[token("..")]
    DotDot,

    #[token("@")]
    At,

    /// Variable indicator.
    #[token("$")]
    Dollar,

    #[token("/")]
    Slash,

    #[token("//")]
    SlashSlash,

    #[token(":")]
    Colon,

    #[token("::")]
    ColonColon,

    #[token(":=")]
    Assign,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("=")]
    Equals,

    #[token("!=")]
    NotEquals,

    #[token("<")]
    LessThan,

    #[token("<=")]
    LessEquals,

    #[token(">")]
    GreaterThan,

    #[token(">=")]
    GreaterEquals,

    #[token("<<")]
    Precedes,

    #[token(">>")]
    Follows,

    #[token("|")]
    Pipe,

    /// String concatenation `||`.
    #[token("||")]
    Concat,

    /// Simple map `!`.
    #[token("!")]
    Bang,

    /// Ternary else marker `!!`.
    #[token("!!")]
    BangBang,

    #[token("?")]
    Question,

    /// Ternary then marker `??`.
    #[token("??")]
    QuestionQuestion,

    /// BaseX elvis operator `?:`.
    #[token("?:")]
    Elvis,

    #[token("#")]
    Hash,

    #[token("%")]
    Percent,

    #[token("=>")]
    Arrow,

    #[token("=!>")]
    MappingArrow,

    #[token("->")]
    ThinArrow,

    #[token("~")]
    Tilde,

    #[regex(r"[0-9]([0-9_]*[0-9])?")]
    IntegerLiteral,

    #[regex(r"\.[0-9]([0-9_]*[0-9])?")]
    #[regex(r"[0-9]([0-9_]*[0-9])?\.([0-9]([0-9_]*[0-9])?)?")]
    DecimalLiteral,

    /// Exponent digits are optional here; the parser reports an incomplete exponent.
    #[regex(r"(\.[0-9]([0-9_]*[0-9])?|[0-9]([0-9_]*[0-9])?(\.([0-9]([0-9_]*[0-9])?)?)?)[eE][+\-]?[0-9]*")]
    DoubleLiteral,

    #[regex(r"0[xX][0-9a-fA-F_]*[0-9a-fA-F]")]
    HexIntegerLiteral,

    #[regex(r"0[bB][01_]*[01]")]
    BinaryIntegerLiteral,

    /// `Q{uri}` prefix of a URIQualifiedName.
    #[regex(r"Q\{[^{}]*\}", allow_greedy = true)]
    BracedUriLiteral,

    /// Non-colonized name. Keywords are matched by their own tokens and
    /// reinterpreted as names by the parser where the grammar allows.
    #[regex(
        r"[A-Za-z_\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{2FF}\x{370}-\x{37D}\x{37F}-\x{1FFF}\x{200C}-\x{200D}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}\x{10000}-\x{EFFFF}][A-Za-z_\-.0-9\x{B7}\x{C0}-\x{D6}\x{D8}-\x{F6}\x{F8}-\x{37D}\x{37F}-\x{1FFF}\x{200C}-\x{200D}\x{203F}-\x{2040}\x{2070}-\x{218F}\x{2C00}-\x{2FEF}\x{3001}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFFD}\x{10000}-\x{EFFFF}]*",
        allow_greedy = true
    )]
    NCName,

    // --- Keywords (contiguous: `KwAllowing..=KwZeroDigit`) ---
    #[token("allowing")]
    KwAllowing,

    #[token("ancestor")]
    KwAncestor,

    #[token("ancestor-or-self")]
    KwAncestorOrSelf,

    #[token("and")]
    KwAnd,

    #[token("andAlso")]
    KwAndAlso,

    #[token("array")]
    KwArray,

    #[token("as")]
    KwAs,

    #[token("ascending")]
    KwAscending,

    #[token("at")]
    KwAt,

    #[token("attribute")]
    KwAttribute,

    #[token("base-uri")]
    KwBaseUri,

    #[token("boundary-space")]
    KwBoundarySpace,

    #[token("by")]
    KwBy,

    #[token("case")]
    KwCase,

    #[token("cast")]
    KwCast,

    #[token("castable")]
    KwCastable,

    #[token("catch")]
    KwCatch,

    #[token("child")]
    KwChild,

    #[token("collation")]
    KwCollation,

    #[token("comment")]
    KwComment,

    #[token("construction")]
    KwConstruction,

    #[token("context")]
    KwContext,

    #[token("copy-namespaces")]
    KwCopyNamespaces,

    #[token("count")]
    KwCount,

    #[token("decimal-format")]
    KwDecimalFormat,

    #[token("decimal-separator")]
    KwDecimalSeparator,

    #[token("declare")]
    KwDeclare,

    #[token("default")]
    KwDefault,

    #[token("descendant")]
    KwDescendant,

    #[token("descendant-or-self")]
    KwDescendantOrSelf,

    #[token("descending")]
    KwDescending,

    #[token("digit")]
    KwDigit,

    #[token("div")]
    KwDiv,

    #[token("document")]
    KwDocument,

    #[token("document-node")]
    KwDocumentNode,

    #[token("element")]
    KwElement,

    #[token("else")]
    KwElse,

    #[token("empty")]
    KwEmpty,

    #[token("empty-sequence")]
    KwEmptySequence,

    #[token("encoding")]
    KwEncoding,

    #[token("end")]
    KwEnd,

    #[token("enum")]
    KwEnum,

    #[token("eq")]
    KwEq,

    #[token("every")]
    KwEvery,

    #[token("except")]
    KwExcept,

    #[token("exponent-separator")]
    KwExponentSeparator,

    #[token("external")]
    KwExternal,

    #[token("finally")]
    KwFinally,

    #[token("fn")]
    KwFn,

    #[token("following")]
    KwFollowing,

    #[token("following-sibling")]
    KwFollowingSibling,

    #[token("for")]
    KwFor,

    #[token("function")]
    KwFunction,

    #[token("ge")]
    KwGe,

    #[token("greatest")]
    KwGreatest,

    #[token("group")]
    KwGroup,

    #[token("grouping-separator")]
    KwGroupingSeparator,

    #[token("gt")]
    KwGt,

    #[token("idiv")]
    KwIdiv,

    #[token("if")]
    KwIf,

    #[token("import")]
    KwImport,

    #[token("in")]
    KwIn,

    #[token("infinity")]
    KwInfinity,

    #[token("inherit")]
    KwInherit,

    #[token("instance")]
    KwInstance,

    #[token("intersect")]
    KwIntersect,

    #[token("is")]
    KwIs,

    #[token("item")]
    KwItem,

    #[token("lax")]
    KwLax,

    #[token("le")]
    KwLe,

    #[token("least")]
    KwLeast,

    #[token("let")]
    KwLet,

    #[token("lt")]
    KwLt,

    #[token("map")]
    KwMap,

    #[token("member")]
    KwMember,

    #[token("minus-sign")]
    KwMinusSign,

    #[token("mod")]
    KwMod,

    #[token("module")]
    KwModule,

    #[token("NaN")]
    KwNaN,

    #[token("namespace")]
    KwNamespace,

    #[token("namespace-node")]
    KwNamespaceNode,

    #[token("ne")]
    KwNe,

    #[token("next")]
    KwNext,

    #[token("no-inherit")]
    KwNoInherit,

    #[token("no-preserve")]
    KwNoPreserve,

    #[token("node")]
    KwNode,

    #[token("of")]
    KwOf,

    #[token("only")]
    KwOnly,

    #[token("option")]
    KwOption,

    #[token("or")]
    KwOr,

    #[token("orElse")]
    KwOrElse,

    #[token("order")]
    KwOrder,

    #[token("ordered")]
    KwOrdered,

    #[token("ordering")]
    KwOrdering,

    #[token("otherwise")]
    KwOtherwise,

    #[token("parent")]
    KwParent,

    #[token("pattern-separator")]
    KwPatternSeparator,

    #[token("per-mille")]
    KwPerMille,

    #[token("percent")]
    KwPercent,

    #[token("preceding")]
    KwPreceding,

    #[token("preceding-sibling")]
    KwPrecedingSibling,

    #[token("preserve")]
    KwPreserve,

    #[token("previous")]
    KwPrevious,

    #[token("processing-instruction")]
    KwProcessingInstruction,

    #[token("record")]
    KwRecord,

    #[token("return")]
    KwReturn,

    #[token("satisfies")]
    KwSatisfies,

    #[token("schema")]
    KwSchema,

    #[token("schema-attribute")]
    KwSchemaAttribute,

    #[token("schema-element")]
    KwSchemaElement,

    #[token("self")]
    KwSelf,

    #[token("sliding")]
    KwSliding,

    #[token("some")]
    KwSome,

    #[token("stable")]
    KwStable,

    #[token("start")]
    KwStart,

    #[token("strict")]
    KwStrict,

    #[token("strip")]
    KwStrip,

    #[token("switch")]
    KwSwitch,

    #[token("text")]
    KwText,

    #[token("then")]
    KwThen,

    #[token("to")]
    KwTo,

    #[token("treat")]
    KwTreat,

    #[token("try")]
    KwTry,

    #[token("tumbling")]
    KwTumbling,

    #[token("tuple")]
    KwTuple,

    #[token("type")]
    KwType,

    #[token("typeswitch")]
    KwTypeswitch,

    #[token("union")]
    KwUnion,

    #[token("unordered")]
    KwUnordered,

    #[token("validate")]
    KwValidate,

    #[token("variable")]
    KwVariable,

    #[token("version")]
    KwVersion,

    #[token("when")]
    KwWhen,

    #[token("where")]
    KwWhere,

    #[token("while")]
    KwWhile,

    #[token("window")]
    KwWindow,

    #[token("xquery")]
    KwXquery,

    #[token("zero-digit")]
    KwZeroDigit,


    // --- Tokens produced by the hand-written scanners ---
    /// `"` delimiting a string literal or attribute value.
    DoubleQuote,
    /// `'` delimiting a string literal or attribute value.
    SingleQuote,
    StringContents,
    /// Doubled quote inside a string literal or attribute value.
    EscapedQuote,
    /// `&lt;`, `&amp;`, ...
    PredefinedEntityRef,
    /// `&#123;` or `&#x7B;`
    CharRef,
    /// `(# `
    PragmaOpen,
    PragmaContents,
    /// ` #)`
    PragmaClose,
    /// `<` opening a direct element constructor.
    StartTagOpen,
    /// `</`
    EndTagOpen,
    /// `>` closing a start or end tag.
    TagClose,
    /// `/>`
    EmptyTagClose,
    XmlContentChars,
    AttrValueChars,
    /// `{{` or `}}`
    EscapedBrace,
    /// `<!--`
    XmlCommentOpen,
    XmlCommentContents,
    /// `-->`
    XmlCommentClose,
    /// `<?`
    PiOpen,
    PiContents,
    /// `?>`
    PiClose,
    /// `<![CDATA[`
    CDataOpen,
    CDataContents,
    /// `]]>`
    CDataClose,
    /// ``` ``[ ```
    StringConstructorOpen,
    StringConstructorChars,
    /// ``` ]`` ```
    StringConstructorClose,
    /// `` `{ ``
    InterpolationOpen,
    /// `` }` ``
    InterpolationClose,
    /// `` ` `` delimiting a string template.
    Backtick,
    StringTemplateChars,
    /// ` `` ` inside a string template.
    EscapedBacktick,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// `(: ... :)`, nestable.
    Comment,

    /// One unrecognized character.
    BadCharacter,

    // --- Node kinds (non-terminals) ---
    Root,
    Error,

    // Modules and prolog
    VersionDecl,
    MainModule,
    LibraryModule,
    ModuleDecl,
    Prolog,
    QueryBody,
    DefaultNamespaceDecl,
    NamespaceDecl,
    BoundarySpaceDecl,
    DefaultCollationDecl,
    BaseUriDecl,
    ConstructionDecl,
    OrderingModeDecl,
    EmptyOrderDecl,
    CopyNamespacesDecl,
    DecimalFormatDecl,
    DfPropertyAssignment,
    SchemaImport,
    SchemaPrefix,
    ModuleImport,
    LocationHints,
    ContextItemDecl,
    AnnotatedDecl,
    Annotation,
    VarDecl,
    FunctionDecl,
    ParamList,
    Param,
    OptionDecl,
    ItemTypeDecl,

    // Names
    Name,
    QName,
    UriQualifiedName,

    // Operators
    Expr,
    EnclosedExpr,
    TernaryConditionalExpr,
    ElvisExpr,
    OrExpr,
    AndExpr,
    ComparisonExpr,
    OtherwiseExpr,
    StringConcatExpr,
    RangeExpr,
    AdditiveExpr,
    MultiplicativeExpr,
    UnionExpr,
    IntersectExceptExpr,
    InstanceofExpr,
    TreatExpr,
    CastableExpr,
    CastExpr,
    ArrowExpr,
    UnaryExpr,
    SimpleMapExpr,

    // Paths
    PathExpr,
    AxisStep,
    ForwardAxis,
    ReverseAxis,
    Wildcard,
    Predicate,

    // Postfix and primary
    PostfixExpr,
    ArgumentList,
    ArgumentPlaceholder,
    KeywordArgument,
    Lookup,
    UnaryLookup,
    ParenthesizedExpr,
    VarRef,
    FunctionCall,
    NamedFunctionRef,
    InlineFunctionExpr,
    FocusFunctionExpr,
    LambdaFunctionExpr,
    MapConstructor,
    MapConstructorEntry,
    SquareArrayConstructor,
    CurlyArrayConstructor,
    StringLiteral,
    StringConstructor,
    StringInterpolation,
    StringTemplate,
    OrderedExpr,
    UnorderedExpr,
    ValidateExpr,
    ExtensionExpr,
    Pragma,

    // FLWOR and other compound expressions
    FlworExpr,
    ForExpr,
    LetExpr,
    ForClause,
    ForBinding,
    ForMemberClause,
    ForMemberBinding,
    AllowingEmpty,
    PositionalVar,
    LetClause,
    LetBinding,
    WindowClause,
    WindowStartCondition,
    WindowEndCondition,
    WindowVars,
    WhereClause,
    WhileClause,
    GroupByClause,
    GroupingSpec,
    OrderByClause,
    OrderSpec,
    OrderModifier,
    CountClause,
    ReturnClause,
    QuantifiedExpr,
    QuantifiedBinding,
    SwitchExpr,
    SwitchCaseClause,
    SwitchDefaultClause,
    TypeswitchExpr,
    CaseClause,
    DefaultCaseClause,
    SequenceTypeUnion,
    IfExpr,
    TryCatchExpr,
    TryClause,
    CatchClause,
    CatchErrorList,
    FinallyClause,

    // Types
    TypeDeclaration,
    SequenceType,
    EmptySequenceType,
    SingleType,
    ParenthesizedItemType,
    ParenthesizedSequenceType,
    ChoiceItemType,
    AnyItemType,
    AnyKindTest,
    DocumentTest,
    TextTest,
    CommentTest,
    NamespaceNodeTest,
    PiTest,
    AttributeTest,
    SchemaAttributeTest,
    ElementTest,
    SchemaElementTest,
    AnyFunctionTest,
    TypedFunctionTest,
    AnyMapTest,
    TypedMapTest,
    AnyArrayTest,
    TypedArrayTest,
    RecordTest,
    FieldDeclaration,
    TupleType,
    TupleField,
    EnumType,
    LocalUnionType,
    TypeAlias,

    // Constructors
    DirElemConstructor,
    DirAttributeList,
    DirAttribute,
    DirAttributeValue,
    DirCommentConstructor,
    DirPiConstructor,
    CDataSection,
    CompDocConstructor,
    CompElemConstructor,
    CompAttrConstructor,
    CompNamespaceConstructor,
    CompTextConstructor,
    CompCommentConstructor,
    CompPiConstructor,

    /// Placeholder left behind by abandoned markers; never reaches a tree.
    #[doc(hidden)]
    Tombstone,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// First node kind; every discriminant below it is a token.
    pub const FIRST_NODE: SyntaxKind = Root;

    #[inline]
    pub fn is_token(self) -> bool {
        self < Self::FIRST_NODE
    }

    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | BadCharacter)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwAllowing..=KwZeroDigit).contains(&self)
    }

    #[inline]
    pub fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            IntegerLiteral
                | DecimalLiteral
                | DoubleLiteral
                | HexIntegerLiteral
                | BinaryIntegerLiteral
        )
    }

    /// Terminals that would merge with a following terminal of the same class.
    #[inline]
    pub fn is_non_delimiting(self) -> bool {
        self.is_numeric_literal() || self == NCName || self.is_keyword()
    }

    /// Punctuation and operator tokens with fixed text.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        (ParenOpen..=Tilde).contains(&self)
    }

    /// Converts a raw discriminant back to a kind, `None` when out of range.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        if raw < __LAST as u16 && raw != Tombstone as u16 {
            // SAFETY: bounds checked above, and SyntaxKind is repr(u16) with contiguous discriminants
            Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
        } else {
            None
        }
    }

    /// All token kinds in discriminant order.
    pub fn tokens() -> impl Iterator<Item = SyntaxKind> {
        (0..Self::FIRST_NODE as u16).filter_map(Self::from_raw)
    }

    /// Looks a token kind up by its variant name (`IntegerLiteral`, `Dot`, `KwFor`).
    pub fn token_from_name(name: &str) -> Option<SyntaxKind> {
        Self::tokens().find(|kind| format!("{kind:?}") == name)
    }

    /// Fixed source text of punctuation and keyword tokens.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            ParenOpen => "(",
            ParenClose => ")",
            BracketOpen => "[",
            BracketClose => "]",
            BraceOpen => "{",
            BraceClose => "}",
            Comma => ",",
            Semicolon => ";",
            Dot => ".",
            DotDot => "..",
            At => "@",
            Dollar => "$",
            Slash => "/",
            SlashSlash => "//",
            Colon => ":",
            ColonColon => "::",
            Assign => ":=",
            Star => "*",
            Plus => "+",
            Minus => "-",
            Equals => "=",
            NotEquals => "!=",
            LessThan => "<",
            LessEquals => "<=",
            GreaterThan => ">",
            GreaterEquals => ">=",
            Precedes => "<<",
            Follows => ">>",
            Pipe => "|",
            Concat => "||",
            Bang => "!",
            BangBang => "!!",
            Question => "?",
            QuestionQuestion => "??",
            Elvis => "?:",
            Hash => "#",
            Percent => "%",
            Arrow => "=>",
            MappingArrow => "=!>",
            ThinArrow => "->",
            Tilde => "~",
            EndTagOpen => "</",
            EmptyTagClose => "/>",
            XmlCommentOpen => "<!--",
            XmlCommentClose => "-->",
            PiOpen => "<?",
            PiClose => "?>",
            CDataOpen => "<![CDATA[",
            CDataClose => "]]>",
            StringConstructorOpen => "``[",
            StringConstructorClose => "]``",
            InterpolationOpen => "`{",
            InterpolationClose => "}`",
            KwAllowing => "allowing",
            KwAncestor => "ancestor",
            KwAncestorOrSelf => "ancestor-or-self",
            KwAnd => "and",
            KwAndAlso => "andAlso",
            KwArray => "array",
            KwAs => "as",
            KwAscending => "ascending",
            KwAt => "at",
            KwAttribute => "attribute",
            KwBaseUri => "base-uri",
            KwBoundarySpace => "boundary-space",
            KwBy => "by",
            KwCase => "case",
            KwCast => "cast",
            KwCastable => "castable",
            KwCatch => "catch",
            KwChild => "child",
            KwCollation => "collation",
            KwComment => "comment",
            KwConstruction => "construction",
            KwContext => "context",
            KwCopyNamespaces => "copy-namespaces",
            KwCount => "count",
            KwDecimalFormat => "decimal-format",
            KwDecimalSeparator => "decimal-separator",
            KwDeclare => "declare",
            KwDefault => "default",
            KwDescendant => "descendant",
            KwDescendantOrSelf => "descendant-or-self",
            KwDescending => "descending",
            KwDigit => "digit",
            KwDiv => "div",
            KwDocument => "document",
            KwDocumentNode => "document-node",
            KwElement => "element",
            KwElse => "else",
            KwEmpty => "empty",
            KwEmptySequence => "empty-sequence",
            KwEncoding => "encoding",
            KwEnd => "end",
            KwEnum => "enum",
            KwEq => "eq",
            KwEvery => "every",
            KwExcept => "except",
            KwExponentSeparator => "exponent-separator",
            KwExternal => "external",
            KwFinally => "finally",
            KwFn => "fn",
            KwFollowing => "following",
            KwFollowingSibling => "following-sibling",
            KwFor => "for",
            KwFunction => "function",
            KwGe => "ge",
            KwGreatest => "greatest",
            KwGroup => "group",
            KwGroupingSeparator => "grouping-separator",
            KwGt => "gt",
            KwIdiv => "idiv",
            KwIf => "if",
            KwImport => "import",
            KwIn => "in",
            KwInfinity => "infinity",
            KwInherit => "inherit",
            KwInstance => "instance",
            KwIntersect => "intersect",
            KwIs => "is",
            KwItem => "item",
            KwLax => "lax",
            KwLe => "le",
            KwLeast => "least",
            KwLet => "let",
            KwLt => "lt",
            KwMap => "map",
            KwMember => "member",
            KwMinusSign => "minus-sign",
            KwMod => "mod",
            KwModule => "module",
            KwNaN => "NaN",
            KwNamespace => "namespace",
            KwNamespaceNode => "namespace-node",
            KwNe => "ne",
            KwNext => "next",
            KwNoInherit => "no-inherit",
            KwNoPreserve => "no-preserve",
            KwNode => "node",
            KwOf => "of",
            KwOnly => "only",
            KwOption => "option",
            KwOr => "or",
            KwOrElse => "orElse",
            KwOrder => "order",
            KwOrdered => "ordered",
            KwOrdering => "ordering",
            KwOtherwise => "otherwise",
            KwParent => "parent",
            KwPatternSeparator => "pattern-separator",
            KwPerMille => "per-mille",
            KwPercent => "percent",
            KwPreceding => "preceding",
            KwPrecedingSibling => "preceding-sibling",
            KwPreserve => "preserve",
            KwPrevious => "previous",
            KwProcessingInstruction => "processing-instruction",
            KwRecord => "record",
            KwReturn => "return",
            KwSatisfies => "satisfies",
            KwSchema => "schema",
            KwSchemaAttribute => "schema-attribute",
            KwSchemaElement => "schema-element",
            KwSelf => "self",
            KwSliding => "sliding",
            KwSome => "some",
            KwStable => "stable",
            KwStart => "start",
            KwStrict => "strict",
            KwStrip => "strip",
            KwSwitch => "switch",
            KwText => "text",
            KwThen => "then",
            KwTo => "to",
            KwTreat => "treat",
            KwTry => "try",
            KwTumbling => "tumbling",
            KwTuple => "tuple",
            KwType => "type",
            KwTypeswitch => "typeswitch",
            KwUnion => "union",
            KwUnordered => "unordered",
            KwValidate => "validate",
            KwVariable => "variable",
            KwVersion => "version",
            KwWhen => "when",
            KwWhere => "where",
            KwWhile => "while",
            KwWindow => "window",
            KwXquery => "xquery",
            KwZeroDigit => "zero-digit",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable description used in diagnostics.
    pub fn describe(self) -> String {
        if let Some(text) = self.text() {
            return format!("`{text}`");
        }
        let name = match self {
            IntegerLiteral => "integer literal",
            DecimalLiteral => "decimal literal",
            DoubleLiteral => "double literal",
            HexIntegerLiteral => "hexadecimal literal",
            BinaryIntegerLiteral => "binary literal",
            BracedUriLiteral => "`Q{...}`",
            NCName => "name",
            DoubleQuote | SingleQuote => "quote",
            StringContents => "string contents",
            EscapedQuote => "escaped quote",
            PredefinedEntityRef => "entity reference",
            CharRef => "character reference",
            PragmaOpen => "`(#`",
            PragmaClose => "`#)`",
            PragmaContents => "pragma contents",
            StartTagOpen => "`<`",
            TagClose => "`>`",
            XmlContentChars => "element content",
            AttrValueChars => "attribute value",
            EscapedBrace => "escaped brace",
            XmlCommentContents => "comment contents",
            PiContents => "processing instruction contents",
            CDataContents => "CDATA contents",
            StringConstructorChars => "string constructor contents",
            Backtick => "backtick",
            StringTemplateChars => "string template contents",
            EscapedBacktick => "escaped backtick",
            Whitespace => "whitespace",
            Comment => "comment",
            BadCharacter => "unrecognized character",
            _ => return format!("{self:?}"),
        };
        name.to_string()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum XqLang {}

impl Language for XqLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<XqLang>;
pub type SyntaxToken = rowan::SyntaxToken<XqLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

const TOKEN_SET_WORDS: usize = 4;
const TOKEN_SET_CAPACITY: u16 = (TOKEN_SET_WORDS * 64) as u16;

/// 256-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; TOKEN_SET_WORDS]);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet([0; TOKEN_SET_WORDS]);

    /// Panics at compile time if any kind's discriminant exceeds the capacity.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(
                kind < TOKEN_SET_CAPACITY,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= TOKEN_SET_CAPACITY {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = self.0;
        let mut i = 0;
        while i < TOKEN_SET_WORDS {
            bits[i] |= other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for kind in SyntaxKind::tokens() {
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

const _: () = assert!((SyntaxKind::FIRST_NODE as u16) <= TOKEN_SET_CAPACITY);

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const NUMERIC_LITERALS: TokenSet = TokenSet::new(&[
        IntegerLiteral,
        DecimalLiteral,
        DoubleLiteral,
        HexIntegerLiteral,
        BinaryIntegerLiteral,
    ]);

    pub const STRING_OPEN: TokenSet = TokenSet::new(&[DoubleQuote, SingleQuote]);

    /// Closing delimiters; never skipped by resynchronization.
    pub const CLOSERS: TokenSet = TokenSet::new(&[
        ParenClose,
        BracketClose,
        BraceClose,
        InterpolationClose,
        StringConstructorClose,
        EndTagOpen,
    ]);

    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[
        Equals,
        NotEquals,
        LessThan,
        LessEquals,
        GreaterThan,
        GreaterEquals,
        KwEq,
        KwNe,
        KwLt,
        KwLe,
        KwGt,
        KwGe,
        KwIs,
        Precedes,
        Follows,
    ]);

    pub const ADDITIVE_OPS: TokenSet = TokenSet::new(&[Plus, Minus]);

    pub const OCCURRENCE_INDICATORS: TokenSet = TokenSet::new(&[Question, Star, Plus]);

    pub const FORWARD_AXES: TokenSet = TokenSet::new(&[
        KwChild,
        KwDescendant,
        KwAttribute,
        KwSelf,
        KwDescendantOrSelf,
        KwFollowingSibling,
        KwFollowing,
        KwNamespace,
    ]);

    pub const REVERSE_AXES: TokenSet = TokenSet::new(&[
        KwParent,
        KwAncestor,
        KwPrecedingSibling,
        KwPreceding,
        KwAncestorOrSelf,
    ]);

    /// Clause keywords that may continue a FLWOR expression.
    pub const FLWOR_CLAUSE_FIRST: TokenSet = TokenSet::new(&[
        KwFor,
        KwLet,
        KwWhere,
        KwWhile,
        KwGroup,
        KwOrder,
        KwStable,
        KwCount,
        KwReturn,
    ]);

    /// Keywords that end an expression inside a compound construct.
    pub const EXPR_TERMINATORS: TokenSet = TokenSet::new(&[
        KwReturn,
        KwSatisfies,
        KwThen,
        KwElse,
        KwCase,
        KwDefault,
        KwWhere,
        KwWhile,
        KwGroup,
        KwOrder,
        KwStable,
        KwCount,
        KwCatch,
        KwFinally,
        KwAscending,
        KwDescending,
        KwEmpty,
        KwCollation,
        KwAt,
        KwIn,
        KwStart,
        KwEnd,
        KwWhen,
        KwOnly,
    ]);

    /// Synchronization points for statement-level recovery.
    pub const PROLOG_RECOVERY: TokenSet = TokenSet::new(&[Semicolon, KwDeclare, KwImport]);
}
