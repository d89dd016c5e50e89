/// Name given to the single output argument of every bound method.
pub const OUTPUT_ARGUMENT_NAME: &str = "Result";

pub const OUTPUT_ARGUMENT_DESCRIPTION: &str = "Result Value";

/// Input arguments are named by appending their 0-based position to this
/// prefix (`Arg0`, `Arg1`, ...).
pub const INPUT_ARGUMENT_NAME_PREFIX: &str = "Arg";

pub const INPUT_ARGUMENT_DESCRIPTION: &str = "Method Argument";

/// Every bound method produces exactly one output value.
pub const METHOD_OUTPUT_COUNT: usize = 1;

/// Highest callback arity a binding can be created for.
pub const MAX_METHOD_ARITY: usize = 12;
