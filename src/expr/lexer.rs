//! logos 기반 수식 토크나이저.

use logos::Logos;
use std::ops::Range;

use super::EvalError;

/// 수식 토큰.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// 문자 또는 `_`로 시작하는 문자/숫자/`_`의 최장 연속
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
}

fn parse_number<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// 토큰과 원문 내 위치.
pub type Spanned<'src> = (Token<'src>, Range<usize>);

/// 수식 전체를 토큰화한다. 인식할 수 없는 문자가 있으면 구문 오류를 낸다.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, EvalError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(tok) = lexer.next() {
        match tok {
            Ok(t) => tokens.push((t, lexer.span())),
            Err(()) => {
                return Err(EvalError::Syntax {
                    position: lexer.span().start,
                    message: format!("인식할 수 없는 문자 `{}`", lexer.slice()),
                })
            }
        }
    }
    Ok(tokens)
}

/// 식별자 토큰만 등장 순서대로 돌려준다. 인식할 수 없는 문자는 건너뛴다.
pub fn identifiers(source: &str) -> Vec<&str> {
    Token::lexer(source)
        .filter_map(|tok| match tok {
            Ok(Token::Ident(name)) => Some(name),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_numbers_and_operators() {
        let toks: Vec<Token> = tokenize("2.5e3 * (x_1 - .5)")
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            toks,
            vec![
                Token::Number(2500.0),
                Token::Star,
                Token::LParen,
                Token::Ident("x_1"),
                Token::Minus,
                Token::Number(0.5),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn identifiers_skip_unknown_characters() {
        assert_eq!(identifiers("a + b # c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_character_is_syntax_error() {
        let err = tokenize("a $ b").unwrap_err();
        assert!(matches!(err, EvalError::Syntax { position: 2, .. }), "{err:?}");
    }
}
