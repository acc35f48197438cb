use infix::{eval, eval_postfix, to_postfix, tokenize, Error};

#[test]
fn precedence() {
    assert_eq!(14.0, eval("2+3*4").unwrap());
    assert_eq!(20.0, eval("(2+3)*4").unwrap());
}

#[test]
fn exponentiation_chains_right() {
    assert_eq!(512.0, eval("2^3^2").unwrap());
}

#[test]
fn unary_and_binary_minus() {
    assert_eq!(1.0, eval("-3+4").unwrap());
    assert_eq!(2.0, eval("5-3").unwrap());
}

#[test]
fn functions() {
    assert_eq!(0.0, eval("sin(0)").unwrap());
    assert_eq!(-5.0, eval("neg(5)").unwrap());
    assert_eq!(-6.0, eval("2*neg(3)").unwrap());
}

#[test]
fn postfix_rendering_and_evaluation() {
    assert_eq!("2 3 4 * +", to_postfix("2+3*4").unwrap());
    assert_eq!(14.0, eval_postfix("2 3 4 * +").unwrap());
}

#[test]
fn rendered_postfix_evaluates_like_the_infix_form() {
    let inputs = [
        "2+3*4",
        "(2+3)*4",
        "2^3^2",
        "-3+4",
        "2*neg(3.5)-sin(0)",
        "cos(0)/tan(1)^2",
    ];
    for input in &inputs {
        let rendered = to_postfix(input).unwrap();
        assert_eq!(
            eval(input).unwrap(),
            eval_postfix(&rendered).unwrap(),
            "input: {}",
            input
        );
    }
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(
        Error::MismatchedParenthesis,
        eval("(1+2").unwrap_err().error
    );
    assert_eq!(
        Error::MismatchedParenthesis,
        eval("1+2)").unwrap_err().error
    );
}

#[test]
fn lexical_errors() {
    let err = tokenize("2+#3").unwrap_err();
    assert_eq!(Error::UnexpectedChar('#'), err.error);
    assert_eq!(2..3, err.span);
}

#[test]
fn invalid_expressions() {
    assert_eq!(Error::InvalidExpression, eval_postfix("2 3").unwrap_err().error);
    assert_eq!(Error::InvalidExpression, eval("2 3").unwrap_err().error);
    assert_eq!(Error::InvalidExpression, eval("1+*2").unwrap_err().error);
}

#[test]
fn unknown_functions() {
    assert_eq!(
        Error::UnknownFunction("log"),
        eval("log(2)").unwrap_err().error
    );
}
