use crate::ast::{
    FunctionDeclaration, IfStatement, ReturnStatement, Stmt, StructDeclaration, VarDeclaration,
    WhileLoop,
};
use crate::lexer::TokenKind;

use super::expressions::{parse_arguments, parse_condition, parse_expression};
use super::{ParseError, Parser};

pub fn parse_statement(parser: &mut Parser) -> Result<Stmt, ParseError> {
    match parser.at().kind {
        TokenKind::Let | TokenKind::Const => {
            Ok(Stmt::VarDeclaration(parse_var_declaration(parser)?))
        }
        TokenKind::Struct => parse_struct_declaration(parser),
        TokenKind::Func => parse_function_declaration(parser),
        TokenKind::If => parse_if_statement(parser),
        TokenKind::While => parse_while_statement(parser),
        TokenKind::Return => parse_return_statement(parser),
        _ => {
            let expression = parse_expression(parser)?;
            // Assignment expressions terminate themselves; any other
            // expression statement may carry a trailing semicolon.
            if parser.at().kind == TokenKind::Semicolon {
                parser.eat();
            }
            Ok(Stmt::Expr(expression))
        }
    }
}

pub(crate) fn parse_var_declaration(parser: &mut Parser) -> Result<VarDeclaration, ParseError> {
    let constant = parser.eat().kind == TokenKind::Const;
    let name = parser.parse_identifier()?;

    if parser.at().kind == TokenKind::Semicolon {
        parser.eat();
        if constant {
            return Err(ParseError::ConstantWithoutValue(name));
        }
        return Ok(VarDeclaration {
            name,
            constant,
            value: None,
        });
    }

    parser.expect(TokenKind::Assign)?;
    let value = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VarDeclaration {
        name,
        constant,
        value: Some(value),
    })
}

fn parse_function_declaration(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.eat();
    let name = parser.parse_identifier()?;

    let mut parameters = Vec::new();
    for argument in parse_arguments(parser)? {
        match argument {
            crate::ast::Expr::Identifier(parameter) => parameters.push(parameter),
            other => return Err(ParseError::InvalidParameter(other.to_string())),
        }
    }

    parser.expect(TokenKind::OpenBrace)?;
    let body = parse_body(parser)?;

    Ok(Stmt::FunctionDeclaration(FunctionDeclaration {
        name,
        parameters,
        body,
    }))
}

fn parse_struct_declaration(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.eat();
    let name = parser.parse_identifier()?;
    parser.expect(TokenKind::OpenBrace)?;

    let mut fields = Vec::new();
    while matches!(parser.at().kind, TokenKind::Let | TokenKind::Const) {
        fields.push(parse_var_declaration(parser)?);
    }
    parser.expect(TokenKind::CloseBrace)?;

    Ok(Stmt::StructDeclaration(StructDeclaration { name, fields }))
}

fn parse_if_statement(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.eat();
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenBrace)?;
    let then_body = parse_body(parser)?;

    let else_body = if parser.at().kind == TokenKind::Else {
        parser.eat();
        parser.expect(TokenKind::OpenBrace)?;
        parse_body(parser)?
    } else {
        Vec::new()
    };

    Ok(Stmt::If(IfStatement {
        condition,
        then_body,
        else_body,
    }))
}

fn parse_while_statement(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.eat();
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenBrace)?;
    let body = parse_body(parser)?;

    Ok(Stmt::While(WhileLoop { condition, body }))
}

fn parse_return_statement(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.eat();

    if parser.at().kind == TokenKind::Semicolon {
        parser.eat();
        return Ok(Stmt::Return(ReturnStatement { value: None }));
    }

    let value = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(Stmt::Return(ReturnStatement { value: Some(value) }))
}

/// Statements up to the closing brace, which is consumed.
fn parse_body(parser: &mut Parser) -> Result<Vec<Stmt>, ParseError> {
    let mut statements = Vec::new();
    while parser.at().kind != TokenKind::CloseBrace && parser.at().kind != TokenKind::Eof {
        statements.push(parse_statement(parser)?);
    }
    parser.expect(TokenKind::CloseBrace)?;
    Ok(statements)
}
