use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `+`.
///
/// Two numbers are added. If either operand is a string, the textual forms of
/// both operands are concatenated. Any other combination is an error.
///
/// # Example
/// ```
/// use tinylox::interpreter::{evaluator::binary::scalar::eval_addition, value::core::Value};
///
/// let sum = eval_addition(&Value::Number(1.5), &Value::Number(2.0), 1).unwrap();
/// assert_eq!(sum, Value::Number(3.5));
///
/// let text = eval_addition(&Value::from("n = "), &Value::Number(4.0), 1).unwrap();
/// assert_eq!(text, Value::from("n = 4"));
///
/// assert!(eval_addition(&Value::Nil, &Value::Bool(true), 1).is_err());
/// ```
pub fn eval_addition(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::from(format!("{left}{right}"))),
        _ => Err(RuntimeError::InvalidAddition { line }),
    }
}

/// Evaluates a numeric arithmetic operation.
///
/// Both operands must be numbers. The result follows IEEE-754 double
/// arithmetic, so dividing by zero yields an infinity or NaN rather than an
/// error. The operator must be one of `Sub`, `Mul` or `Div`; `Add` is
/// handled by [`eval_addition`].
///
/// # Example
/// ```
/// use tinylox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let result = eval_scalar_op(BinaryOperator::Div, &Value::Number(7.0), &Value::Number(2.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(3.5));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(RuntimeError::ExpectedNumbers { op, line });
    };

    Ok(Value::Number(match op {
                         BinaryOperator::Sub => a - b,
                         BinaryOperator::Mul => a * b,
                         BinaryOperator::Div => a / b,
                         _ => unreachable!("eval_scalar_op used with non arithmetic operator"),
                     }))
}
