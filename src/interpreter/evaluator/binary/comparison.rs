use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a relational comparison of the form `Value <Operator> Value`.
///
/// Both operands must be numbers; the result is a boolean.
///
/// # Example
/// ```
/// use tinylox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(BinaryOperator::Less, &Value::Number(3.0), &Value::Number(5.0), 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(RuntimeError::ExpectedNumbers { op, line });
    };

    Ok(Value::Bool(match op {
                       BinaryOperator::Less => a < b,
                       BinaryOperator::Greater => a > b,
                       BinaryOperator::LessEqual => a <= b,
                       BinaryOperator::GreaterEqual => a >= b,
                       _ => unreachable!("eval_comparison used with non relational operator"),
                   }))
}

/// Evaluates `==` or `!=`.
///
/// Equality is defined over every value: operands of different types are
/// simply unequal, never an error. `!=` is always the negation of `==`.
///
/// # Example
/// ```
/// use tinylox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_equality, value::core::Value},
/// };
///
/// let result = eval_equality(BinaryOperator::Equal, &Value::Nil, &Value::Bool(false));
/// assert_eq!(result, Value::Bool(false));
/// ```
#[must_use]
pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let is_equal = left == right;

    Value::Bool(match op {
                    BinaryOperator::Equal => is_equal,
                    BinaryOperator::NotEqual => !is_equal,
                    _ => unreachable!("eval_equality used with non equality operator"),
                })
}
