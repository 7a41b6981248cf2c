use std::fmt;

/// Chain of `Record.field` labels leading to the current position in a
/// shape walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitPath(Vec<String>);

impl VisitPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, label: String) {
        self.0.push(label);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VisitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

/// Shape definition errors found while deriving an operation.
///
/// Both variants point at a malformed shape rather than at bad data, so
/// they are reproducible: the same shape fails the same way every time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A field was reached again below itself without a recursion limit.
    ///
    /// The trail lists every `Record.field` on the way down, followed by the
    /// record in which the repeated field was found.
    #[error("cycle found: {trail}")]
    Cycle { trail: VisitPath },

    /// A recursion limit below 2 was configured.
    #[error("recursion limit on {record}.{field} must be greater than 1, got {limit}")]
    InvalidRecursionLimit {
        record: &'static str,
        field: &'static str,
        limit: u32,
    },
}

/// Result type for compilation.
pub type CompileResult<T> = std::result::Result<T, CompileError>;
