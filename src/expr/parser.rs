//! 재귀 하강 수식 파서.
//!
//! 우선순위(낮음 → 높음): `+ -`, `* / %`, 단항 `+ -`, `^`(우결합), 괄호/함수 호출.
//! `-2^2`는 `-(2^2)`로 해석한다.

use super::lexer::{tokenize, Spanned, Token};
use super::EvalError;

/// 구문 트리 깊이 한도. 괄호·단항 부호 중첩과 이항 연산자 연쇄를 모두 센다.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

/// 수식 구문 트리.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Ident(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

/// 수식 문자열을 구문 트리로 변환한다.
pub fn parse(source: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(source)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        eof: source.len(),
        depth: 0,
    };
    if parser.is_at_end() {
        return Err(EvalError::Syntax {
            position: 0,
            message: "빈 수식".to_string(),
        });
    }
    let expr = parser.parse_additive()?;
    if let Some((tok, span)) = parser.tokens.get(parser.pos) {
        return Err(EvalError::Syntax {
            position: span.start,
            message: format!("예상치 못한 토큰 {tok:?}"),
        });
    }
    Ok(expr)
}

struct Parser<'src> {
    tokens: Vec<Spanned<'src>>,
    pos: usize,
    eof: usize,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).map(|(tok, _)| *tok)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.eof)
    }

    fn error(&self, message: &str) -> EvalError {
        EvalError::Syntax {
            position: self.position(),
            message: message.to_string(),
        }
    }

    fn expect(&mut self, expected: Token<'src>, what: &str) -> Result<(), EvalError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("`{what}`가 필요합니다")))
        }
    }

    /// 트리가 한 단계 깊어질 때마다 호출한다.
    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error(&format!("수식 중첩이 {MAX_DEPTH}단계를 넘습니다")));
        }
        Ok(())
    }

    fn parse_additive(&mut self) -> Result<Expr, EvalError> {
        let entry = self.depth;
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => {
                    self.depth = entry;
                    return Ok(lhs);
                }
            };
            self.pos += 1;
            self.descend()?;
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, EvalError> {
        let entry = self.depth;
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => {
                    self.depth = entry;
                    return Ok(lhs);
                }
            };
            self.pos += 1;
            self.descend()?;
            let rhs = self.parse_unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, EvalError> {
        let entry = self.depth;
        self.descend()?;
        let expr = self.parse_signed()?;
        self.depth = entry;
        Ok(expr)
    }

    fn parse_signed(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Unary(UnaryOp::Neg, Box::new(self.parse_unary()?)))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                Ok(Expr::Unary(UnaryOp::Pos, Box::new(self.parse_unary()?)))
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, EvalError> {
        let base = self.parse_primary()?;
        if self.peek() == Some(Token::Caret) {
            self.pos += 1;
            // 지수 쪽은 단항 부호를 허용하고 다시 거듭제곱으로 내려가므로 우결합이 된다.
            let exponent = self.parse_unary()?;
            return Ok(Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, EvalError> {
        let start = self.position();
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Ident(name)) => {
                if self.peek() == Some(Token::LParen) {
                    self.pos += 1;
                    let args = self.parse_args()?;
                    Ok(Expr::Call(name.to_string(), args))
                } else {
                    Ok(Expr::Ident(name.to_string()))
                }
            }
            Some(Token::LParen) => {
                let inner = self.parse_additive()?;
                self.expect(Token::RParen, ")")?;
                Ok(inner)
            }
            Some(tok) => Err(EvalError::Syntax {
                position: start,
                message: format!("피연산자가 와야 할 자리에 {tok:?}"),
            }),
            None => Err(EvalError::Syntax {
                position: self.eof,
                message: "수식이 중간에 끝났습니다".to_string(),
            }),
        }
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, EvalError> {
        let mut args = Vec::new();
        if self.peek() == Some(Token::RParen) {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.parse_additive()?);
            match self.advance() {
                Some(Token::Comma) => continue,
                Some(Token::RParen) => return Ok(args),
                _ => return Err(self.error("함수 인자 목록에 `,` 또는 `)`가 필요합니다")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Box<Expr> {
        Box::new(Expr::Number(n))
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let expr = parse("-2^2").unwrap();
        assert_eq!(
            expr,
            Expr::Unary(
                UnaryOp::Neg,
                Box::new(Expr::Binary(BinaryOp::Pow, num(2.0), num(2.0)))
            )
        );
    }

    #[test]
    fn power_is_right_associative() {
        let expr = parse("2^3^2").unwrap();
        assert_eq!(
            expr,
            Expr::Binary(
                BinaryOp::Pow,
                num(2.0),
                Box::new(Expr::Binary(BinaryOp::Pow, num(3.0), num(2.0)))
            )
        );
    }

    #[test]
    fn parses_function_calls_with_arguments() {
        let expr = parse("max(a, 2 * b)").unwrap();
        let Expr::Call(name, args) = expr else {
            panic!("expected call");
        };
        assert_eq!(name, "max");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn rejects_trailing_tokens_and_empty_input() {
        assert!(matches!(parse("a b"), Err(EvalError::Syntax { position: 2, .. })));
        assert!(matches!(parse("   "), Err(EvalError::Syntax { .. })));
        assert!(matches!(parse("(a + 1"), Err(EvalError::Syntax { .. })));
        assert!(matches!(parse("f(1,"), Err(EvalError::Syntax { .. })));
    }

    #[test]
    fn deep_nesting_is_a_syntax_error() {
        let deep = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
        assert!(matches!(parse(&deep), Err(EvalError::Syntax { .. })));
        assert!(matches!(
            parse(&"-".repeat(10_000)),
            Err(EvalError::Syntax { .. })
        ));
        let shallow = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&shallow).unwrap(), Expr::Ident("x".into()));
    }

    #[test]
    fn long_operator_chains_are_bounded() {
        let short = vec!["a"; 100].join(" + ");
        assert!(parse(&short).is_ok());
        let long = vec!["a"; 10_000].join(" * ");
        assert!(matches!(parse(&long), Err(EvalError::Syntax { .. })));
    }
}
