//! Form inputs feeding an invocation.

/// Source of the two values sent with each invocation.
///
/// Read once per invocation; later edits do not affect a request in flight.
pub trait FormInputs {
    fn keyword(&self) -> String;
    fn period(&self) -> String;
}

/// Fixed form values, e.g. from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticForm {
    pub keyword: String,
    pub period: String,
}

impl StaticForm {
    pub fn new(keyword: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            period: period.into(),
        }
    }
}

impl FormInputs for StaticForm {
    fn keyword(&self) -> String {
        self.keyword.clone()
    }

    fn period(&self) -> String {
        self.period.clone()
    }
}
