use std::{iter::Peekable, str::CharIndices};

use crate::{
    errors::err::{Error, ErrorInfo},
    syntax::tokens::{Delimiter, Spanned, SpannedTok, Token},
};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    // the previously emitted token, the only lexer state. It decides whether
    // a `-` is the binary operator or the sign of the number following it.
    prev: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            prev: None,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<SpannedTok<'a>>, ErrorInfo<'a>> {
        let mut tokens = vec![];
        while let Some((pos, char)) = self.next() {
            let tok = match char {
                ' ' | '\t' | '\n' | '\r' => continue,
                c if c.is_ascii_digit() => self.num(pos),
                '.' if self.digit_at(pos + 1) => self.num(pos),
                c if c.is_ascii_lowercase() => self.ident(pos),
                '-' if self.unary_position() && self.number_ahead(pos) => self.num(pos),
                '+' | '-' | '*' | '/' | '^' => Spanned {
                    elem: Token::Op(&self.source[pos..pos + 1]),
                    span: pos..pos + 1,
                },
                '(' => Spanned {
                    elem: Token::Delimiter(Delimiter::LParen),
                    span: pos..pos + 1,
                },
                ')' => Spanned {
                    elem: Token::Delimiter(Delimiter::RParen),
                    span: pos..pos + 1,
                },
                c => {
                    return Err(ErrorInfo {
                        span: pos..pos + 1,
                        error: Error::UnexpectedChar(c),
                    })
                }
            };
            self.prev = Some(tok.elem);
            tokens.push(tok);
        }
        Ok(tokens)
    }

    // digit* .? digit+ with the leading char already consumed. The decimal
    // point is only swallowed when digits follow it, so `3.` lexes as `3`
    // and leaves the dot behind.
    fn num(&mut self, start: usize) -> SpannedTok<'a> {
        let mut end = start + 1 + self.eat_while(|c| c.is_ascii_digit());
        if !self.source[start..end].contains('.')
            && self.source.as_bytes().get(end) == Some(&b'.')
            && self.digit_at(end + 1)
        {
            self.next();
            end += 1 + self.eat_while(|c| c.is_ascii_digit());
        }
        Spanned {
            elem: Token::Num(&self.source[start..end]),
            span: start..end,
        }
    }

    fn ident(&mut self, start: usize) -> SpannedTok<'a> {
        let end = start + 1 + self.eat_while(|c| c.is_ascii_lowercase());
        Spanned {
            elem: Token::Ident(&self.source[start..end]),
            span: start..end,
        }
    }

    // a `-` here is a sign, not an operator: nothing emitted yet, or the
    // value before it is itself an operator or an opening parenthesis
    fn unary_position(&self) -> bool {
        match self.prev {
            None | Some(Token::Op(_)) | Some(Token::Delimiter(Delimiter::LParen)) => true,
            Some(_) => false,
        }
    }

    // a number literal begins directly after `pos`, without any whitespace
    fn number_ahead(&self, pos: usize) -> bool {
        self.digit_at(pos + 1)
            || (self.source.as_bytes().get(pos + 1) == Some(&b'.') && self.digit_at(pos + 2))
    }

    fn digit_at(&self, pos: usize) -> bool {
        matches!(self.source.as_bytes().get(pos), Some(b'0'..=b'9'))
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut length = 0;
        while self.next_if(|c| predicate(c)).is_some() {
            length += 1;
        }
        length
    }

    pub fn next_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<(usize, char)> {
        if predicate(self.peek()?.1) {
            return self.next();
        }
        None
    }

    fn peek(&mut self) -> Option<&(usize, char)> {
        self.chars.peek()
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char);
    fn next(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}
