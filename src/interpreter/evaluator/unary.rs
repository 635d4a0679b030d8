use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation; any other operand is an error.
/// - `Not`: negation of the operand's truthiness. Accepts every value.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tinylox::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("x"), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}
