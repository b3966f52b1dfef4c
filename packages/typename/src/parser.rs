//! Recursive-descent parser for type names
//!
//! Grammar:
//!
//! ```text
//! type := path ('<' type (',' type)* '>')?
//! path := ident ('.' ident)*
//! ```
//!
//! Array, pointer, nullable and tuple syntax are rejected: the component
//! lowering never produces them for bindable property types.

use crate::error::{TypeNameError, TypeNameResult};
use crate::expr::TypeExpr;
use crate::lexer::{lex, SpannedToken, Token};

/// Parse literal type text into a [`TypeExpr`]
pub fn parse_type_name(source: &str) -> TypeNameResult<TypeExpr> {
    let tokens = lex(source)
        .map(|result| {
            result.map_err(|err| TypeNameError::LexError {
                span: err.span,
                message: err.message,
            })
        })
        .collect::<TypeNameResult<Vec<_>>>()?;

    let mut parser = Parser { tokens: &tokens, pos: 0 };
    let expr = parser.parse_type()?;
    parser.expect_end()?;
    Ok(expr)
}

struct Parser<'src> {
    tokens: &'src [SpannedToken<'src>],
    pos: usize,
}

impl<'src> Parser<'src> {
    fn peek(&self) -> Option<&SpannedToken<'src>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&SpannedToken<'src>> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn parse_type(&mut self) -> TypeNameResult<TypeExpr> {
        let base = self.parse_path()?;

        if matches!(self.peek(), Some(t) if t.token == Token::Lt) {
            self.advance();
            let mut args = vec![self.parse_type()?];
            while matches!(self.peek(), Some(t) if t.token == Token::Comma) {
                self.advance();
                args.push(self.parse_type()?);
            }
            self.expect(Token::Gt, ">")?;
            return Ok(TypeExpr::Generic {
                base: Box::new(base),
                args,
            });
        }

        Ok(base)
    }

    fn parse_path(&mut self) -> TypeNameResult<TypeExpr> {
        let mut parts = vec![self.expect_ident()?];
        while matches!(self.peek(), Some(t) if t.token == Token::Dot) {
            self.advance();
            parts.push(self.expect_ident()?);
        }

        if parts.len() == 1 {
            Ok(TypeExpr::Identifier(parts.pop().unwrap()))
        } else {
            Ok(TypeExpr::Qualified(parts))
        }
    }

    fn expect_ident(&mut self) -> TypeNameResult<String> {
        match self.advance() {
            Some(SpannedToken {
                token: Token::Ident(name),
                ..
            }) => Ok((*name).to_string()),
            Some(other) => Err(TypeNameError::UnexpectedToken {
                span: other.span,
                expected: "identifier".to_string(),
                found: format!("{:?}", other.token),
            }),
            None => Err(TypeNameError::UnexpectedEof {
                expected: "identifier".to_string(),
            }),
        }
    }

    fn expect(&mut self, token: Token<'src>, description: &str) -> TypeNameResult<()> {
        match self.advance() {
            Some(found) if found.token == token => Ok(()),
            Some(other) => Err(TypeNameError::UnexpectedToken {
                span: other.span,
                expected: description.to_string(),
                found: format!("{:?}", other.token),
            }),
            None => Err(TypeNameError::UnexpectedEof {
                expected: description.to_string(),
            }),
        }
    }

    fn expect_end(&mut self) -> TypeNameResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(TypeNameError::UnexpectedToken {
                span: token.span,
                expected: "end of input".to_string(),
                found: format!("{:?}", token.token),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_identifier() {
        assert_eq!(
            parse_type_name("TItem").unwrap(),
            TypeExpr::Identifier("TItem".to_string())
        );
    }

    #[test]
    fn test_parse_qualified_name() {
        assert_eq!(
            parse_type_name("System.String").unwrap(),
            TypeExpr::Qualified(vec!["System".to_string(), "String".to_string()])
        );
    }

    #[test]
    fn test_parse_generic_with_qualified_base() {
        let expr = parse_type_name("System.Collections.Generic.IEnumerable<TItem>").unwrap();
        match &expr {
            TypeExpr::Generic { base, args } => {
                assert_eq!(base.to_string(), "System.Collections.Generic.IEnumerable");
                assert_eq!(args.len(), 1);
            }
            other => panic!("Expected generic, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nested_generics() {
        let expr = parse_type_name("Dictionary<string, List<TItem>>").unwrap();
        assert_eq!(expr.to_string(), "Dictionary<string, List<TItem>>");
    }

    #[test]
    fn test_display_is_stable() {
        // Whitespace is normalized, structure is preserved
        let expr = parse_type_name("Dictionary< string ,TItem >").unwrap();
        assert_eq!(expr.to_string(), "Dictionary<string, TItem>");

        let reparsed = parse_type_name(&expr.to_string()).unwrap();
        assert_eq!(reparsed, expr);
    }

    #[test]
    fn test_rejects_trailing_tokens() {
        assert!(parse_type_name("TItem TOther").is_err());
    }

    #[test]
    fn test_rejects_unclosed_argument_list() {
        assert!(matches!(
            parse_type_name("List<TItem"),
            Err(TypeNameError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_rejects_array_syntax() {
        assert!(parse_type_name("TItem[]").is_err());
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            parse_type_name(""),
            Err(TypeNameError::UnexpectedEof { .. })
        ));
    }
}
