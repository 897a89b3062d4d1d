/// Classification of a lexical unit.
///
/// The tokeniser buffers characters until a delimiter and classifies the
/// buffered word against the reserved-word set, then the relation-operator
/// set, defaulting to an identifier. Quoted strings never pass through that
/// path and always arrive as [`TokenKind::Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// SQL keyword (`select`, `from`, `where`, `explain`, ...)
    Reserved,

    /// Relation operator (`=`, `!=`, `>`, `is`, ...)
    Relation,

    /// Bare word: column or table name, `*`, a numeral, or the `,`
    /// separator (which the parser treats as a field delimiter, not a
    /// field)
    Identifier,

    /// Quoted string, stored with quotes stripped and escapes resolved
    Literal,
}

/// Smallest classified lexical unit of a statement.
///
/// Tokens are immutable once produced and retain their text exactly as it
/// was scanned; numeric coercion happens during translation, never here.
///
/// # Examples
/// ```text
/// select        -> Reserved("select")
/// *             -> Identifier("*")
/// !=            -> Relation("!=")
/// 'Hello'       -> Literal("Hello")
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn reserved(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Reserved,
            text: text.into(),
        }
    }

    pub fn relation(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Relation,
            text: text.into(),
        }
    }

    pub fn identifier(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Identifier,
            text: text.into(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Literal,
            text: text.into(),
        }
    }

    /// True for the kinds that can stand as an operand (column name or
    /// value) inside an expression.
    pub fn is_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Literal)
    }
}
