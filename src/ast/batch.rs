use crate::ast::Statement;

/// Ordered sequence of parsed statements.
///
/// One input string may carry several `;`-terminated statements; each is
/// parsed independently and appended in input order. Empty input parses to
/// an empty batch rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub statements: Vec<Statement>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}
