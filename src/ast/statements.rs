use crate::ast::{RelationOp, Token};

/// Parsed statement.
///
/// The grammar currently accepts one statement form; the enum keeps the
/// dispatch in [`crate::translate`] explicit and leaves room for more.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `select` statement, with or without a leading `explain`
    Select(SelectStatement),
}

/// One parsed `select`.
///
/// # Example
/// ```text
/// explain select a, b from users where age > 21;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Fields to project. Never empty; a single `*` selects everything.
    pub fields: Vec<Token>,

    /// The collection (table) the statement reads from.
    pub from: Token,

    /// Filter clauses, implicitly conjunctive. Empty means no filter.
    pub where_clauses: Vec<Clause>,

    /// Whether the statement asks for a query plan instead of rows.
    pub explain: bool,
}

/// One `field relation value` filter condition inside a `where` modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub expression: Expression,
}

/// A single comparison.
///
/// Operands keep their raw token text; whether `rval` is a column name,
/// a numeral, or quoted prose is not decided here.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub lval: Token,
    pub rel: RelationOp,
    pub rval: Token,
}
