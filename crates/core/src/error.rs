#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// One message per violated rule, in rule order.
    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),
}

impl CoreError {
    /// The individual violation messages carried by this error.
    pub fn messages(&self) -> &[String] {
        match self {
            CoreError::Validation(messages) => messages,
        }
    }
}
