use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                comparison::{eval_comparison, eval_equality},
                scalar::{eval_addition, eval_scalar_op},
            },
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// `Add` goes to `eval_addition`, which also concatenates strings. The other
/// arithmetic operators use `eval_scalar_op`. Relational operators use
/// `eval_comparison` and equality operators use `eval_equality`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tinylox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => eval_addition(left, right, line),
        Sub | Mul | Div => eval_scalar_op(op, left, right, line),
        Less | Greater | LessEqual | GreaterEqual => eval_comparison(op, left, right, line),
        Equal | NotEqual => Ok(eval_equality(op, left, right)),
    }
}
