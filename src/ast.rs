use std::fmt;

use crate::token::Token;

/// A parsed program: an ordered sequence of statements.
///
/// Produced once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Literal of the token that introduced the first statement, or ""
    /// for an empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A braced sequence of statements. Blocks do not open a new lexical
/// scope; only function bodies do.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// A name in binding or reference position.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    /// `return;` or `return <value>;`
    Return {
        token: Token,
        value: Option<Expression>,
    },
    /// A bare expression in statement position.
    Expression { token: Token, value: Expression },
    /// `{ ... }` in statement position.
    Block(BlockStatement),
    /// `while (<condition>) { ... }`
    While {
        token: Token,
        condition: Expression,
        body: BlockStatement,
    },
    /// `fn <name>(<params>) { ... }` — a named binding, unlike the
    /// anonymous `Expression::Function` literal.
    Function {
        token: Token,
        name: Identifier,
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    /// `<name> = <value>;` — assignment to an existing binding.
    Assignment {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    /// `print <value>;`
    Print { token: Token, value: Expression },
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. }
            | Statement::While { token, .. }
            | Statement::Function { token, .. }
            | Statement::Assignment { token, .. }
            | Statement::Print { token, .. } => &token.literal,
            Statement::Block(block) => &block.token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value, .. } => write!(f, "let {} = {};", name, value),
            Statement::Return { value: Some(v), .. } => write!(f, "return {};", v),
            Statement::Return { value: None, .. } => write!(f, "return;"),
            Statement::Expression { value, .. } => write!(f, "{}", value),
            Statement::Block(block) => write!(f, "{{ {} }}", block),
            Statement::While { condition, body, .. } => {
                write!(f, "while ({}) {{ {} }}", condition, body)
            }
            Statement::Function {
                name,
                parameters,
                body,
                ..
            } => {
                write!(f, "fn {}({}) {{ {} }}", name, join(parameters), body)
            }
            Statement::Assignment { name, value, .. } => write!(f, "{} = {};", name, value),
            Statement::Print { value, .. } => write!(f, "print {};", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer {
        token: Token,
        value: i64,
    },
    Boolean {
        token: Token,
        value: bool,
    },
    Identifier(Identifier),
    /// `!<right>` or `-<right>`
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    /// `<left> <op> <right>`
    Infix {
        token: Token,
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `if (<condition>) { ... }` with optional `else { ... }`
    If {
        token: Token,
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// Anonymous function literal `fn(<params>) { ... }`.
    Function {
        token: Token,
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    /// `<callee>(<args>)`
    Call {
        token: Token,
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Integer { token, .. }
            | Expression::Boolean { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. }
            | Expression::If { token, .. }
            | Expression::Function { token, .. }
            | Expression::Call { token, .. } => &token.literal,
            Expression::Identifier(ident) => &ident.token.literal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer { value, .. } => write!(f, "{}", value),
            Expression::Boolean { value, .. } => write!(f, "{}", value),
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Prefix { operator, right, .. } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if ({}) {{ {} }}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, " else {{ {} }}", alt)?;
                }
                Ok(())
            }
            Expression::Function {
                parameters, body, ..
            } => write!(f, "fn({}) {{ {} }}", join(parameters), body),
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
        }
    }
}

fn join(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(|i| i.value.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Position, TokenKind};

    fn token(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal, Position::default())
    }

    #[test]
    fn test_let_display() {
        let program = Program {
            statements: vec![Statement::Let {
                token: token(TokenKind::Let, "let"),
                name: Identifier {
                    token: token(TokenKind::Ident, "x"),
                    value: "x".to_string(),
                },
                value: Expression::Integer {
                    token: token(TokenKind::Int, "5"),
                    value: 5,
                },
            }],
        };

        assert_eq!(program.to_string(), "let x = 5;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_infix_display_parenthesises() {
        let expr = Expression::Infix {
            token: token(TokenKind::Plus, "+"),
            operator: "+".to_string(),
            left: Box::new(Expression::Integer {
                token: token(TokenKind::Int, "1"),
                value: 1,
            }),
            right: Box::new(Expression::Prefix {
                token: token(TokenKind::Minus, "-"),
                operator: "-".to_string(),
                right: Box::new(Expression::Integer {
                    token: token(TokenKind::Int, "2"),
                    value: 2,
                }),
            }),
        };

        assert_eq!(expr.to_string(), "(1 + (-2))");
    }
}
