use crate::ast::{BinaryOp, Expr, LogicalOp, UnaryOp};
use crate::lexer::TokenKind;

use super::error::Expected;
use super::{ParseError, Parser};

/// General expression entry point, used for expression statements,
/// declaration initializers, assignment right-hand sides and call
/// arguments. Relational and logical operators are NOT reachable from
/// here; only the condition entry point parses them.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_assignment(parser)
}

/// Entry point for `if`/`while` conditions.
pub fn parse_condition(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_logical(parser)
}

fn parse_assignment(parser: &mut Parser) -> Result<Expr, ParseError> {
    let left = parse_additive(parser)?;

    if parser.at().kind == TokenKind::Assign {
        parser.eat();
        // Right-associative; the assignment owns its terminating
        // semicolon, even when nested inside a larger expression.
        let value = parse_assignment(parser)?;
        parser.expect(TokenKind::Semicolon)?;
        return Ok(Expr::Assignment {
            target: Box::new(left),
            value: Box::new(value),
        });
    }

    Ok(left)
}

fn parse_logical(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut left = parse_comparison(parser)?;

    loop {
        let op = match parser.at().kind {
            TokenKind::And => LogicalOp::And,
            TokenKind::Or => LogicalOp::Or,
            _ => break,
        };
        parser.eat();
        let right = parse_comparison(parser)?;
        left = Expr::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// Non-associative: at most one relational operator is consumed, so
/// `a < b < c` does not chain.
fn parse_comparison(parser: &mut Parser) -> Result<Expr, ParseError> {
    let left = parse_additive(parser)?;

    let op = match parser.at().kind {
        TokenKind::Less => BinaryOp::Less,
        TokenKind::LessEqual => BinaryOp::LessEqual,
        TokenKind::Greater => BinaryOp::Greater,
        TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
        TokenKind::EqualEqual => BinaryOp::EqualEqual,
        TokenKind::NotEqual => BinaryOp::NotEqual,
        _ => return Ok(left),
    };
    parser.eat();
    let right = parse_additive(parser)?;

    Ok(Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn parse_additive(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut left = parse_multiplicative(parser)?;

    while parser.at().kind == TokenKind::BinaryOperator
        && matches!(parser.at().lexeme.as_str(), "+" | "-")
    {
        let op = if parser.eat().lexeme == "+" {
            BinaryOp::Add
        } else {
            BinaryOp::Subtract
        };
        let right = parse_multiplicative(parser)?;
        left = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut left = parse_call_member(parser)?;

    while parser.at().kind == TokenKind::BinaryOperator
        && matches!(parser.at().lexeme.as_str(), "*" | "/" | "%")
    {
        let op = match parser.eat().lexeme.as_str() {
            "*" => BinaryOp::Multiply,
            "/" => BinaryOp::Divide,
            _ => BinaryOp::Modulo,
        };
        // Right operands bind through primary, not the full call/member
        // chain.
        let right = parse_primary(parser)?;
        left = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// Primary expression followed by any number of `.field` and `(args)`
/// suffixes, nested in the order encountered.
fn parse_call_member(parser: &mut Parser) -> Result<Expr, ParseError> {
    let mut expr = parse_primary(parser)?;

    loop {
        match parser.at().kind {
            TokenKind::Dot => {
                parser.eat();
                let field = parser.parse_identifier()?;
                expr = Expr::MemberAccess {
                    object: Box::new(expr),
                    field,
                };
            }
            TokenKind::OpenParen => {
                let args = parse_arguments(parser)?;
                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                };
            }
            _ => break,
        }
    }

    Ok(expr)
}

/// Parenthesized, comma-separated argument list.
pub(crate) fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, ParseError> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = Vec::new();
    if parser.at().kind != TokenKind::CloseParen {
        args.push(parse_expression(parser)?);
        while parser.at().kind == TokenKind::Comma {
            parser.eat();
            args.push(parse_expression(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(args)
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, ParseError> {
    match parser.at().kind {
        TokenKind::Not => {
            parser.eat();
            Ok(Expr::Unary {
                op: UnaryOp::Not,
                operand: Box::new(parse_primary(parser)?),
            })
        }
        TokenKind::BinaryOperator if parser.at().lexeme == "-" => {
            parser.eat();
            Ok(Expr::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(parse_primary(parser)?),
            })
        }
        TokenKind::Identifier => Ok(Expr::Identifier(parser.eat().lexeme)),
        TokenKind::Number | TokenKind::Float => Ok(Expr::NumericLiteral(parser.eat().lexeme.parse()?)),
        TokenKind::Str => Ok(Expr::StrLiteral(parser.eat().lexeme)),
        TokenKind::Null => {
            parser.eat();
            Ok(Expr::NullLiteral)
        }
        TokenKind::OpenParen => {
            parser.eat();
            let expression = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(expression)
        }
        _ => Err(ParseError::UnexpectedToken {
            expected: Expected::Expression,
            found: parser.at().clone(),
        }),
    }
}
