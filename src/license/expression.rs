//! License expression grammar.
//!
//! Recursive-descent parser for boolean license expressions:
//!
//! ```text
//! Expression := Term (("AND" | "OR") Term)*
//! Term       := Identifier | "(" Expression ")"
//! ```
//!
//! One grammar level chains one operator: `A AND B AND C` is a single
//! three-member conjunctive set, while `A AND B OR C` is ambiguous and
//! rejected. Parentheses disambiguate. Identifiers cover listed SPDX
//! license IDs, `LicenseRef-*` references, and the `NOASSERTION` and
//! `NONE` sentinels. Operators are the uppercase keywords.

use crate::license::LicenseExpression;
use crate::ParseError;

/// Parse one complete expression source string.
///
/// Trailing tokens after a syntactically complete expression are
/// malformed input, never silently dropped.
pub fn parse_expression(source: &str) -> Result<LicenseExpression, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::InvalidExpression(
            "empty license expression".to_string(),
        ));
    }
    let (expr, rest) = parse_chain(&tokens, source)?;
    match rest.first() {
        None => Ok(expr),
        Some(Token::RParen) => Err(ParseError::UnbalancedParens(source.trim().to_string())),
        Some(_) => Err(ParseError::InvalidExpression(format!(
            "trailing tokens after expression: {}",
            source.trim()
        ))),
    }
}

// ─── Tokenizer ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Identifier(String),
    And,
    Or,
    LParen,
    RParen,
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+'
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            c if is_identifier_char(c) => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_identifier_char(c) {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(match word.as_str() {
                    "AND" => Token::And,
                    "OR" => Token::Or,
                    _ => Token::Identifier(word),
                });
            }
            other => {
                return Err(ParseError::InvalidExpression(format!(
                    "unexpected character '{other}' in: {}",
                    input.trim()
                )))
            }
        }
    }

    Ok(tokens)
}

// ─── Recursive Descent Parser ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operator {
    And,
    Or,
}

fn parse_chain<'a>(
    tokens: &'a [Token],
    source: &str,
) -> Result<(LicenseExpression, &'a [Token]), ParseError> {
    let (first, rest) = parse_term(tokens, source)?;
    match rest.first() {
        Some(Token::And) => parse_operator_chain(first, rest, source, Operator::And),
        Some(Token::Or) => parse_operator_chain(first, rest, source, Operator::Or),
        _ => Ok((first, rest)),
    }
}

fn parse_operator_chain<'a>(
    first: LicenseExpression,
    mut rest: &'a [Token],
    source: &str,
    operator: Operator,
) -> Result<(LicenseExpression, &'a [Token]), ParseError> {
    let mut members = vec![first];
    loop {
        match rest.first() {
            Some(Token::And) if operator == Operator::And => {
                let (term, r) = parse_term(&rest[1..], source)?;
                members.push(term);
                rest = r;
            }
            Some(Token::Or) if operator == Operator::Or => {
                let (term, r) = parse_term(&rest[1..], source)?;
                members.push(term);
                rest = r;
            }
            // The other operator at the same level is ambiguous.
            Some(Token::And) | Some(Token::Or) => {
                return Err(ParseError::InvalidExpression(format!(
                    "mixed AND and OR without parentheses: {}",
                    source.trim()
                )));
            }
            _ => break,
        }
    }
    let set = match operator {
        Operator::And => LicenseExpression::Conjunctive(members),
        Operator::Or => LicenseExpression::Disjunctive(members),
    };
    Ok((set, rest))
}

fn parse_term<'a>(
    tokens: &'a [Token],
    source: &str,
) -> Result<(LicenseExpression, &'a [Token]), ParseError> {
    match tokens.first() {
        Some(Token::Identifier(id)) => Ok((term_for(id), &tokens[1..])),
        Some(Token::LParen) => {
            let (inner, rest) = parse_chain(&tokens[1..], source)?;
            match rest.first() {
                Some(Token::RParen) => Ok((inner, &rest[1..])),
                _ => Err(ParseError::UnbalancedParens(source.trim().to_string())),
            }
        }
        Some(Token::RParen) => Err(ParseError::UnbalancedParens(source.trim().to_string())),
        Some(Token::And) | Some(Token::Or) => Err(ParseError::InvalidExpression(format!(
            "operator where a license was expected: {}",
            source.trim()
        ))),
        None => Err(ParseError::InvalidExpression(format!(
            "expression ended before a license: {}",
            source.trim()
        ))),
    }
}

fn term_for(id: &str) -> LicenseExpression {
    match id {
        "NOASSERTION" => LicenseExpression::NoAssertion,
        "NONE" => LicenseExpression::None,
        _ => LicenseExpression::License(id.to_string()),
    }
}
