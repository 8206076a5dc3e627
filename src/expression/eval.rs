use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    complex::ComplexNumber,
    error::{MathError, MathResult},
};

/// Evaluates an expression tree over complex numbers.
///
/// Chains such as `1 + 2 + 3` are walked along their left spine in a loop, so
/// long operator chains do not grow the call stack.
///
/// # Errors
/// Returns `MathError::DivisionByZero` when a divisor evaluates to zero.
///
/// # Example
/// ```
/// use mathkit::{
///     complex::ComplexNumber,
///     expression::{eval_expr, parse_tokens, tokenize},
/// };
///
/// let tokens = tokenize("(1 + 2) * -3").unwrap();
/// let expr = parse_tokens(&tokens).unwrap();
/// assert_eq!(eval_expr(&expr).unwrap(), ComplexNumber::new(-9.0, 0.0));
/// ```
pub fn eval_expr(expr: &Expr) -> MathResult<ComplexNumber> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, .. } => {
            let value = eval_expr(expr)?;
            Ok(match op {
                UnaryOperator::Plus => value,
                UnaryOperator::Negate => -value,
            })
        },
        Expr::BinaryOp { .. } => eval_chain(expr),
    }
}

/// Evaluates a left-deep chain of binary operations from the innermost
/// operand outwards.
fn eval_chain(expr: &Expr) -> MathResult<ComplexNumber> {
    let mut pending = Vec::new();
    let mut node = expr;
    while let Expr::BinaryOp { left, op, right, .. } = node {
        pending.push((*op, right.as_ref()));
        node = left.as_ref();
    }

    let mut acc = eval_expr(node)?;
    for (op, right) in pending.into_iter().rev() {
        let rhs = eval_expr(right)?;
        acc = apply_binary(op, acc, rhs, right)?;
    }
    Ok(acc)
}

fn apply_binary(op: BinaryOperator,
                left: ComplexNumber,
                right: ComplexNumber,
                divisor: &Expr)
                -> MathResult<ComplexNumber> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right.is_zero() {
                return Err(MathError::DivisionByZero {
                    details: format!("divisor at position {} is zero", divisor.position()),
                });
            }
            Ok(left / right)
        },
    }
}
