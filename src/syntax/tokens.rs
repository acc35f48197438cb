pub use crate::source_pos::{Span, Spanned};

pub type SpannedTok<'a> = Spanned<Token<'a>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token<'a> {
    Op(&'a str),

    // numbers keep their source text until evaluation, parsing them here would
    // drag literal handling into the lexer and lose the original rendering
    Num(&'a str),

    Ident(&'a str),

    Delimiter(Delimiter),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Token::Op(s) | Token::Num(s) | Token::Ident(s) => s,
            Token::Delimiter(Delimiter::LParen) => "(",
            Token::Delimiter(Delimiter::RParen) => ")",
        }
    }

}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}
