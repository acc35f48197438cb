//! Evaluation of infix arithmetic expressions.
//!
//! ```
//! assert_eq!(infix::eval("3 + 5 * 2"), Ok(13.0));
//! assert_eq!(infix::to_postfix("3 + 5 * 2").as_deref(), Ok("3 5 2 * +"));
//! ```

pub mod errors;
pub mod source_pos;
pub mod syntax;

pub use errors::err::{Error, ErrorInfo};
pub use syntax::*;

pub fn tokenize(input: &str) -> Result<Vec<SpannedTok<'_>>, ErrorInfo<'_>> {
    Lexer::new(input).tokenize()
}

/// Rewrites an infix expression into its space separated postfix rendering,
/// keeping the literal text of every token.
pub fn to_postfix(input: &str) -> Result<String, ErrorInfo<'_>> {
    let tokens = tokenize(input)?;
    let postfix = shunting_yard::to_postfix(&tokens)?;
    let text: Vec<_> = postfix.iter().map(|t| t.elem.text()).collect();
    Ok(text.join(" "))
}

/// Evaluates a postfix expression.
pub fn eval_postfix(input: &str) -> Result<f64, ErrorInfo<'_>> {
    let tokens = tokenize(input)?;
    shunting_yard::eval_postfix(&tokens)
}

/// Evaluates an infix expression in a single pass.
pub fn eval(input: &str) -> Result<f64, ErrorInfo<'_>> {
    let tokens = tokenize(input)?;
    shunting_yard::eval(&tokens)
}
