/// Default bound on nested lambda invocations and `EVAL` forcing.
pub const MAX_DEPTH: usize = 256;
/// Default bound on the number of values the stack may hold.
pub const MAX_STACK_SIZE: usize = 65_536;

/// Runtime limits for one evaluation.
///
/// The evaluator enforces these limits; the configuration only states them.
/// Both have defaults suitable for ordinary programs and can be raised from
/// the command line.
///
/// # Example
/// ```
/// use stackma::config::Config;
///
/// let config = Config::default().with_max_depth(16);
/// assert_eq!(config.max_depth, 16);
/// assert_eq!(config.max_stack_size, stackma::config::MAX_STACK_SIZE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting of lambda invocations and `EVAL`s.
    pub max_depth:      usize,
    /// Maximum number of values on the stack.
    pub max_stack_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth:      MAX_DEPTH,
               max_stack_size: MAX_STACK_SIZE, }
    }
}

impl Config {
    /// Returns a copy with a different recursion limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
    /// Returns a copy with a different stack size limit.
    #[must_use]
    pub const fn with_max_stack_size(mut self, max_stack_size: usize) -> Self {
        self.max_stack_size = max_stack_size;
        self
    }
}
