use indexmap::IndexMap;
use serde::Serialize;

/// A value expression as written in the source. May still contain
/// references that only the evaluator can resolve.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    String(String),
    Ref(Ref),
    Mapping(Vec<(String, Expr)>), // key order as written, keys unique
}

/// An inline `{name}` reference to a previously declared constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Ref {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

/// A `(def name value)` constant declaration. Position is that of the
/// name token.
#[derive(Debug, Clone, PartialEq)]
pub struct Def {
    pub name: String,
    pub value: Expr,
    pub line: usize,
    pub column: usize,
}

/// The top-level parse unit: constant declarations followed by exactly
/// one root value expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub defs: Vec<Def>,
    pub root: Expr,
}

/// A fully evaluated value tree. No references remain; mapping keys are
/// unique and keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    String(String),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Mapping(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self { Some(*n) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    /// Human-readable kind name used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "число",
            Value::String(_) => "строка",
            Value::Mapping(_) => "словарь",
        }
    }
}
