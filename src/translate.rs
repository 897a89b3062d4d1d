use std::collections::BTreeMap;
use std::fmt;

use crate::ast::{Batch, RelationOp, SelectStatement, Statement};
use crate::value::Value;

/// Errors raised while lowering an AST into query descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The grammar accepts this operator lexically but the translator
    /// intentionally narrows the supported set
    UnsupportedOperator(RelationOp),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnsupportedOperator(rel) => {
                write!(f, "Compilation Error: unsupported operator {}", rel)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// One filter condition, tagged by the comparison it performs.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Equality (`=`)
    Eq(Value),

    /// Not equal (`!=`)
    Ne(Value),

    /// Greater than (`>`)
    Gt(Value),
}

impl Predicate {
    pub fn value(&self) -> &Value {
        match self {
            Predicate::Eq(value) | Predicate::Ne(value) | Predicate::Gt(value) => value,
        }
    }
}

/// Everything a caller needs to run one query against a document store.
///
/// Maps are ordered so rendered descriptors come out deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    /// Collection the query reads from
    pub collection: String,

    /// Fields to return, each mapped to 1. Empty means all fields.
    pub projection: BTreeMap<String, u8>,

    /// Filter predicates keyed by field, implicitly conjunctive. A later
    /// clause on the same field overwrites an earlier one.
    pub filter: BTreeMap<String, Predicate>,

    /// Ask for the query plan instead of rows
    pub explain: bool,
}

/// Translator output.
///
/// Exactly one input statement collapses to the bare descriptor; anything
/// else, including an empty batch, stays a sequence. Callers replicating
/// the pipeline by hand must preserve this collapse.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    One(QueryDescriptor),
    Many(Vec<QueryDescriptor>),
}

impl Translation {
    /// View the descriptors uniformly, collapsed or not.
    pub fn descriptors(&self) -> &[QueryDescriptor] {
        match self {
            Translation::One(descriptor) => std::slice::from_ref(descriptor),
            Translation::Many(descriptors) => descriptors,
        }
    }
}

/// Lower every statement in the batch into a query descriptor.
pub fn translate(batch: &Batch) -> Result<Translation, CompileError> {
    let mut descriptors = Vec::with_capacity(batch.len());

    for statement in &batch.statements {
        match statement {
            Statement::Select(select) => descriptors.push(translate_select(select)?),
        }
    }

    if descriptors.len() == 1 {
        Ok(Translation::One(descriptors.remove(0)))
    } else {
        Ok(Translation::Many(descriptors))
    }
}

/// Projection is empty (all fields) exactly when the single field is `*`;
/// any other field list maps each name to 1.
fn translate_select(select: &SelectStatement) -> Result<QueryDescriptor, CompileError> {
    let mut projection = BTreeMap::new();
    let select_all = select.fields.len() == 1 && select.fields[0].text == "*";
    if !select_all {
        for field in &select.fields {
            projection.insert(field.text.clone(), 1);
        }
    }

    let mut filter = BTreeMap::new();
    for clause in &select.where_clauses {
        let expression = &clause.expression;
        let value = Value::from_literal_text(&expression.rval.text);

        let predicate = match expression.rel {
            RelationOp::Equal => Predicate::Eq(value),
            RelationOp::NotEqual => Predicate::Ne(value),
            RelationOp::GreaterThan => Predicate::Gt(value),
            rel => return Err(CompileError::UnsupportedOperator(rel)),
        };

        filter.insert(expression.lval.text.clone(), predicate);
    }

    Ok(QueryDescriptor {
        collection: select.from.text.clone(),
        projection,
        filter,
        explain: select.explain,
    })
}
