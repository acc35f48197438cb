use crate::{
    errors::err::{Error, ErrorInfo},
    syntax::{
        operators::{self, Operator},
        tokens::{Delimiter, Span, Spanned, SpannedTok, Token},
    },
};

/// Where resolved tokens go. The precedence loop is the same for both
/// engines, only the sink differs: postfix conversion emits tokens, direct
/// evaluation folds them into numbers right away.
trait Sink<'a> {
    fn number(&mut self, tok: &SpannedTok<'a>) -> Result<(), ErrorInfo<'a>>;
    fn operator(&mut self, op: &'static Operator, span: Span) -> Result<(), ErrorInfo<'a>>;
    fn function(&mut self, name: &'a str, span: Span) -> Result<(), ErrorInfo<'a>>;
}

// the operator stack entries, operators resolved against the registry when
// they are pushed
enum Pending<'a> {
    Op(&'static Operator, Span),
    Func(&'a str, Span),
    LParen(Span),
}

fn shunt<'a>(tokens: &[SpannedTok<'a>], sink: &mut impl Sink<'a>) -> Result<(), ErrorInfo<'a>> {
    let mut pending: Vec<Pending<'a>> = vec![];
    for tok in tokens {
        match tok.elem {
            Token::Num(_) => sink.number(tok)?,
            Token::Ident(name) => pending.push(Pending::Func(name, tok.span.clone())),
            Token::Op(sym) => {
                let op = binary_op(sym, &tok.span)?;
                // resolve everything that binds tighter. A pending function
                // name is opaque here, it only resolves at its `)`.
                while let Some(Pending::Op(top, span)) = pending.last() {
                    if !top.has_bigger_prec(op) {
                        break;
                    }
                    let (top, span) = (*top, span.clone());
                    pending.pop();
                    sink.operator(top, span)?;
                }
                pending.push(Pending::Op(op, tok.span.clone()));
            }
            Token::Delimiter(Delimiter::LParen) => pending.push(Pending::LParen(tok.span.clone())),
            Token::Delimiter(Delimiter::RParen) => {
                loop {
                    match pending.pop() {
                        Some(Pending::Op(op, span)) => sink.operator(op, span)?,
                        Some(Pending::Func(name, span)) => sink.function(name, span)?,
                        Some(Pending::LParen(_)) => break,
                        None => {
                            return Err(ErrorInfo {
                                span: tok.span.clone(),
                                error: Error::MismatchedParenthesis,
                            })
                        }
                    }
                }
                // the group was a function argument, resolve the call
                if let Some(Pending::Func(..)) = pending.last() {
                    if let Some(Pending::Func(name, span)) = pending.pop() {
                        sink.function(name, span)?;
                    }
                }
            }
        }
    }
    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Op(op, span) => sink.operator(op, span)?,
            Pending::Func(name, span) => sink.function(name, span)?,
            Pending::LParen(span) => {
                return Err(ErrorInfo {
                    span,
                    error: Error::MismatchedParenthesis,
                })
            }
        }
    }
    Ok(())
}

pub fn to_postfix<'a>(tokens: &[SpannedTok<'a>]) -> Result<Vec<SpannedTok<'a>>, ErrorInfo<'a>> {
    let mut sink = PostfixSink { out: vec![] };
    shunt(tokens, &mut sink)?;
    Ok(sink.out)
}

pub fn eval<'a>(tokens: &[SpannedTok<'a>]) -> Result<f64, ErrorInfo<'a>> {
    let mut sink = EvalSink { operands: vec![] };
    shunt(tokens, &mut sink)?;
    sink.finish(tokens_span(tokens))
}

pub fn eval_postfix<'a>(tokens: &[SpannedTok<'a>]) -> Result<f64, ErrorInfo<'a>> {
    let mut sink = EvalSink { operands: vec![] };
    for tok in tokens {
        match tok.elem {
            Token::Num(_) => sink.number(tok)?,
            Token::Ident(name) => sink.function(name, tok.span.clone())?,
            Token::Op(sym) => {
                let op = binary_op(sym, &tok.span)?;
                sink.operator(op, tok.span.clone())?;
            }
            // parentheses have no place in postfix notation
            Token::Delimiter(_) => {
                return Err(ErrorInfo {
                    span: tok.span.clone(),
                    error: Error::InvalidExpression,
                })
            }
        }
    }
    sink.finish(tokens_span(tokens))
}

fn binary_op<'a>(sym: &'a str, span: &Span) -> Result<&'static Operator, ErrorInfo<'a>> {
    operators::binary(sym).ok_or_else(|| ErrorInfo {
        span: span.clone(),
        error: Error::InvalidExpression,
    })
}

fn tokens_span(tokens: &[SpannedTok<'_>]) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.start..last.span.end,
        _ => 0..0,
    }
}

struct PostfixSink<'a> {
    out: Vec<SpannedTok<'a>>,
}

impl<'a> Sink<'a> for PostfixSink<'a> {
    fn number(&mut self, tok: &SpannedTok<'a>) -> Result<(), ErrorInfo<'a>> {
        self.out.push(tok.clone());
        Ok(())
    }

    fn operator(&mut self, op: &'static Operator, span: Span) -> Result<(), ErrorInfo<'a>> {
        self.out.push(Spanned {
            elem: Token::Op(op.sym),
            span,
        });
        Ok(())
    }

    fn function(&mut self, name: &'a str, span: Span) -> Result<(), ErrorInfo<'a>> {
        self.out.push(Spanned {
            elem: Token::Ident(name),
            span,
        });
        Ok(())
    }
}

struct EvalSink {
    operands: Vec<f64>,
}

impl EvalSink {
    fn finish<'a>(mut self, span: Span) -> Result<f64, ErrorInfo<'a>> {
        match self.operands.pop() {
            Some(value) if self.operands.is_empty() => Ok(value),
            _ => Err(ErrorInfo {
                span,
                error: Error::InvalidExpression,
            }),
        }
    }
}

impl<'a> Sink<'a> for EvalSink {
    fn number(&mut self, tok: &SpannedTok<'a>) -> Result<(), ErrorInfo<'a>> {
        let text = tok.elem.text();
        let value = text.parse::<f64>().map_err(|_| ErrorInfo {
            span: tok.span.clone(),
            error: Error::InvalidNumber(text),
        })?;
        self.operands.push(value);
        Ok(())
    }

    fn operator(&mut self, op: &'static Operator, span: Span) -> Result<(), ErrorInfo<'a>> {
        // the most recently pushed operand is the right hand side
        let (rhs, lhs) = match (self.operands.pop(), self.operands.pop()) {
            (Some(rhs), Some(lhs)) => (rhs, lhs),
            _ => {
                return Err(ErrorInfo {
                    span,
                    error: Error::InvalidExpression,
                })
            }
        };
        self.operands.push(op.apply(lhs, rhs));
        Ok(())
    }

    fn function(&mut self, name: &'a str, span: Span) -> Result<(), ErrorInfo<'a>> {
        let fun = operators::function(name).ok_or_else(|| ErrorInfo {
            span: span.clone(),
            error: Error::UnknownFunction(name),
        })?;
        let value = match self.operands.pop() {
            Some(value) => value,
            None => {
                return Err(ErrorInfo {
                    span,
                    error: Error::InvalidExpression,
                })
            }
        };
        self.operands.push(fun(value));
        Ok(())
    }
}
