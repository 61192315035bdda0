//! Tokenizer and recursive descent parser for the calculator grammar.
//!
//! The grammar is deliberately small: decimal numbers, the four binary
//! operators, and unary minus at the start of an expression or after an
//! operator. No parentheses, no whitespace, no variables.

use crate::core::{EvalError, EvalResult};

/// Binary operators supported by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
}

impl BinOp {
    /// Returns the operator symbol as typed on the keypad.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns the precedence level (higher binds tighter).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Maps an operator character to its `BinOp`, if any.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

/// Token types from lexical analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator
    Op(BinOp),
}

impl Token {
    /// Returns true if this token is an operator.
    #[must_use]
    pub const fn is_op(&self) -> bool {
        matches!(self, Self::Op(_))
    }
}

/// Abstract syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
    /// Numeric literal
    Number(f64),
    /// Unary negation
    Negate(Box<Ast>),
    /// Binary operation
    Binary {
        /// Left operand
        left: Box<Ast>,
        /// Operator
        op: BinOp,
        /// Right operand
        right: Box<Ast>,
    },
}

impl Ast {
    /// Creates a number node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a negation node.
    #[must_use]
    pub fn negate(inner: Ast) -> Self {
        Self::Negate(Box::new(inner))
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(left: Ast, op: BinOp, right: Ast) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Tokenizer for expression strings.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input.
    pub fn tokenize(&mut self) -> EvalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> EvalResult<Option<Token>> {
        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' | '-' | '*' | '/' => {
                self.advance();
                // from_char cannot fail for these four
                Token::Op(BinOp::from_char(ch).ok_or_else(|| {
                    EvalError::Parse(format!("unexpected character '{ch}'"))
                })?)
            }
            _ => {
                return Err(EvalError::Parse(format!("unexpected character '{ch}'")));
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn read_number(&mut self) -> EvalResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| EvalError::Parse(format!("invalid number '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser.
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= '-' unary | NUMBER
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST.
    pub fn parse_str(input: &str) -> EvalResult<Ast> {
        if input.is_empty() {
            return Err(EvalError::Empty);
        }

        let tokens = Tokenizer::new(input).tokenize()?;
        if tokens.is_empty() {
            return Err(EvalError::Empty);
        }

        let mut parser = Self::new(tokens);
        let ast = parser.parse_expression()?;

        if parser.pos < parser.tokens.len() {
            return Err(EvalError::Parse(format!(
                "unexpected token at position {}",
                parser.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> EvalResult<Ast> {
        let mut left = self.parse_term()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Op(op @ (BinOp::Add | BinOp::Sub)) => *op,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = Ast::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> EvalResult<Ast> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Op(op @ (BinOp::Mul | BinOp::Div)) => *op,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Ast::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> EvalResult<Ast> {
        if matches!(self.current(), Some(Token::Op(BinOp::Sub))) {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Ast::negate(inner));
        }

        match self.advance() {
            Some(Token::Number(n)) => Ok(Ast::number(*n)),
            Some(token) => Err(EvalError::Parse(format!("unexpected token {token:?}"))),
            None => Err(EvalError::Parse("unexpected end of expression".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== BinOp tests =====

    #[test]
    fn test_binop_symbols() {
        assert_eq!(BinOp::Add.symbol(), '+');
        assert_eq!(BinOp::Sub.symbol(), '-');
        assert_eq!(BinOp::Mul.symbol(), '*');
        assert_eq!(BinOp::Div.symbol(), '/');
    }

    #[test]
    fn test_binop_precedence() {
        assert_eq!(BinOp::Add.precedence(), 1);
        assert_eq!(BinOp::Sub.precedence(), 1);
        assert_eq!(BinOp::Mul.precedence(), 2);
        assert_eq!(BinOp::Div.precedence(), 2);
    }

    #[test]
    fn test_binop_from_char() {
        assert_eq!(BinOp::from_char('+'), Some(BinOp::Add));
        assert_eq!(BinOp::from_char('-'), Some(BinOp::Sub));
        assert_eq!(BinOp::from_char('*'), Some(BinOp::Mul));
        assert_eq!(BinOp::from_char('/'), Some(BinOp::Div));
        assert_eq!(BinOp::from_char('%'), None);
        assert_eq!(BinOp::from_char('^'), None);
    }

    #[test]
    fn test_token_is_op() {
        assert!(Token::Op(BinOp::Add).is_op());
        assert!(!Token::Number(5.0).is_op());
    }

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_single_number() {
        let tokens = Tokenizer::new("42").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn test_tokenize_decimal_number() {
        let tokens = Tokenizer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(3.14)]);
    }

    #[test]
    fn test_tokenize_leading_decimal() {
        let tokens = Tokenizer::new(".5").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(0.5)]);
    }

    #[test]
    fn test_tokenize_trailing_decimal() {
        let tokens = Tokenizer::new("5.").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(5.0)]);
    }

    #[test]
    fn test_tokenize_expression() {
        let tokens = Tokenizer::new("2+3*4").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Op(BinOp::Add),
                Token::Number(3.0),
                Token::Op(BinOp::Mul),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_unary_minus_sequence() {
        let tokens = Tokenizer::new("12+-3").tokenize().unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2], Token::Op(BinOp::Sub));
    }

    #[test]
    fn test_tokenize_invalid_char() {
        let result = Tokenizer::new("2%3").tokenize();
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_tokenize_lone_dot_fails() {
        let result = Tokenizer::new(".").tokenize();
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_tokenize_double_dot_fails() {
        // "1.2.3" lexes as "1.2" then ".3"; ".." cannot form a number
        let result = Tokenizer::new("..").tokenize();
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_tokenize_empty() {
        let tokens = Tokenizer::new("").tokenize().unwrap();
        assert!(tokens.is_empty());
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_single_number() {
        let ast = Parser::parse_str("42").unwrap();
        assert_eq!(ast, Ast::Number(42.0));
    }

    #[test]
    fn test_parse_simple_addition() {
        let ast = Parser::parse_str("2+3").unwrap();
        assert_eq!(
            ast,
            Ast::binary(Ast::number(2.0), BinOp::Add, Ast::number(3.0))
        );
    }

    #[test]
    fn test_parse_precedence_mul_over_add() {
        // 2+3*4 parses as 2+(3*4)
        let ast = Parser::parse_str("2+3*4").unwrap();
        match ast {
            Ast::Binary {
                op: BinOp::Add,
                right,
                ..
            } => {
                assert!(matches!(*right, Ast::Binary { op: BinOp::Mul, .. }));
            }
            _ => panic!("expected Add at top level"),
        }
    }

    #[test]
    fn test_parse_left_associative() {
        // 10-3-2 parses as (10-3)-2
        let ast = Parser::parse_str("10-3-2").unwrap();
        match ast {
            Ast::Binary {
                op: BinOp::Sub,
                left,
                right,
            } => {
                assert!(matches!(*left, Ast::Binary { op: BinOp::Sub, .. }));
                assert_eq!(*right, Ast::Number(2.0));
            }
            _ => panic!("expected Sub at top level"),
        }
    }

    #[test]
    fn test_parse_unary_minus_at_start() {
        let ast = Parser::parse_str("-5").unwrap();
        assert_eq!(ast, Ast::negate(Ast::number(5.0)));
    }

    #[test]
    fn test_parse_unary_minus_after_operator() {
        let ast = Parser::parse_str("3+-2").unwrap();
        match ast {
            Ast::Binary {
                op: BinOp::Add,
                right,
                ..
            } => {
                assert!(matches!(*right, Ast::Negate(_)));
            }
            _ => panic!("expected Add"),
        }
    }

    #[test]
    fn test_parse_double_negative() {
        let ast = Parser::parse_str("--5").unwrap();
        match ast {
            Ast::Negate(inner) => assert!(matches!(*inner, Ast::Negate(_))),
            _ => panic!("expected Negate"),
        }
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Parser::parse_str(""), Err(EvalError::Empty)));
    }

    #[test]
    fn test_parse_trailing_operator_fails() {
        let result = Parser::parse_str("2+");
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_parse_leading_plus_fails() {
        let result = Parser::parse_str("+2");
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_parse_consecutive_mul_fails() {
        let result = Parser::parse_str("2**3");
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_parse_no_parentheses() {
        let result = Parser::parse_str("(2+3)");
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }

    #[test]
    fn test_parse_adjacent_numbers_rejected() {
        // tokenizes as 1.2 then .3 with no operator between
        let result = Parser::parse_str("1.2.3");
        assert!(matches!(result, Err(EvalError::Parse(_))));
    }
}
