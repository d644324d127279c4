/// Matching options fixed when a token is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// Case-insensitive `==` and `!=` (default false). `~` always ignores case.
    pub ignore_case: bool,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}
