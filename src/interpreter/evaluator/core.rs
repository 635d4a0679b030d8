use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator dispatches on the expression variant. Operands of unary and
/// binary operations are evaluated first, left before right.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The value of the expression.
///
/// # Example
/// ```
/// use tinylox::{
///     ast::{BinaryOperator, Expr, LiteralValue},
///     interpreter::{evaluator::core::evaluate, value::core::Value},
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2.0.into(),
///                                                             line:  1, }),
///                             op:    BinaryOperator::Mul,
///                             right: Box::new(Expr::Literal { value: 3.0.into(),
///                                                             line:  1, }),
///                             line:  1, };
///
/// assert_eq!(evaluate(&expr).unwrap(), Value::Number(6.0));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::from(value)),
        Expr::Grouping { expr, .. } => evaluate(expr),
        Expr::UnaryOp { op, expr, line } => {
            let operand = evaluate(expr)?;
            eval_unary(*op, &operand, *line)
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, &left, &right, *line)
        },
    }
}

/// Executes statements, writing printed values to an output sink.
///
/// `Interpreter` holds no program state besides the sink: every statement is
/// independent, and a run ends at the first runtime error.
///
/// ## Usage
///
/// Create one per run with any [`Write`] implementation, such as a locked
/// stdout or a `Vec<u8>` in tests.
pub struct Interpreter<W: Write> {
    out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter printing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the interpreter and hands back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes a program statement by statement.
    ///
    /// # Errors
    /// Stops at and returns the first runtime error. Output printed by earlier
    /// statements stays in the sink.
    ///
    /// # Example
    /// ```
    /// use tinylox::interpreter::{
    ///     evaluator::core::Interpreter, lexer::scan_tokens, parser::core::parse_program,
    /// };
    ///
    /// let tokens = scan_tokens("print 1 + 1 == 2;").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.interpret(&program).unwrap();
    ///
    /// assert_eq!(interpreter.into_output(), b"true\n");
    /// ```
    pub fn interpret(&mut self, program: &[Statement]) -> EvalResult<()> {
        for statement in program {
            self.execute(statement)?;
        }
        // A failed flush is blamed on the last statement that ran.
        let line = program.last().map_or(1, Statement::line_number);
        self.out
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line })
    }

    /// Executes a single statement.
    ///
    /// An expression statement is evaluated and its value discarded. A print
    /// statement writes the value's textual form followed by a newline.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Expression { expr, .. } => {
                evaluate(expr)?;
                Ok(())
            },
            Statement::Print { expr, line } => {
                let value = evaluate(expr)?;
                writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details:
                                                                                     e.to_string(),
                                                                                 line: *line, })
            },
        }
    }
}
