//! Well-formedness checking for CTL requirement formulas.

use async_trait::async_trait;

use crate::errors::FlowcheckResult;
use crate::models::petri::PetriNet;
use crate::traits::Verifier;

const UNARY_TEMPORAL: [&str; 6] = ["AG", "AF", "AX", "EG", "EF", "EX"];

#[derive(Debug, PartialEq)]
enum Token {
    Atom(String),
    UnaryTemporal,
    PathQuantifier,
    Until,
    Not,
    BinaryLogic,
    LParen,
    RParen,
    LBracket,
    RBracket,
}

/// Refutes formulas that are not syntactically valid CTL, or whose node atoms
/// (`p_*` places, `t_*` transitions) do not exist in the net. Everything else
/// passes; deciding whether a well-formed formula actually holds is left to
/// the other engines.
pub struct SyntaxVerifier;

impl SyntaxVerifier {
    pub const NAME: &'static str = "syntax";

    pub fn new() -> Self {
        SyntaxVerifier
    }

    fn tokenize(formula: &str) -> Option<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut chars = formula.chars().peekable();
        while let Some(&c) = chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    chars.next();
                }
                '(' => {
                    chars.next();
                    tokens.push(Token::LParen);
                }
                ')' => {
                    chars.next();
                    tokens.push(Token::RParen);
                }
                '[' => {
                    chars.next();
                    tokens.push(Token::LBracket);
                }
                ']' => {
                    chars.next();
                    tokens.push(Token::RBracket);
                }
                '!' => {
                    chars.next();
                    tokens.push(Token::Not);
                }
                '&' | '|' => {
                    chars.next();
                    // Accept both single and doubled forms.
                    if chars.peek() == Some(&c) {
                        chars.next();
                    }
                    tokens.push(Token::BinaryLogic);
                }
                '-' => {
                    chars.next();
                    if chars.next() != Some('>') {
                        return None;
                    }
                    tokens.push(Token::BinaryLogic);
                }
                '<' => {
                    chars.next();
                    if chars.next() != Some('-') || chars.next() != Some('>') {
                        return None;
                    }
                    tokens.push(Token::BinaryLogic);
                }
                c if c.is_alphanumeric() || c == '_' => {
                    let mut ident = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_alphanumeric() || c == '_' {
                            ident.push(c);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    tokens.push(match ident.as_str() {
                        s if UNARY_TEMPORAL.contains(&s) => Token::UnaryTemporal,
                        "A" | "E" => Token::PathQuantifier,
                        "U" => Token::Until,
                        _ => Token::Atom(ident),
                    });
                }
                _ => return None,
            }
        }
        Some(tokens)
    }

    /// Structural checks over the token stream: balanced brackets, brackets
    /// only after a path quantifier, exactly one `U` per bracket level, `U`
    /// nowhere else.
    fn well_formed(tokens: &[Token]) -> bool {
        if tokens.is_empty() {
            return false;
        }
        let mut paren_depth = 0i32;
        // One counter of seen `U`s per open bracket.
        let mut bracket_untils: Vec<u32> = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::LParen => paren_depth += 1,
                Token::RParen => {
                    paren_depth -= 1;
                    if paren_depth < 0 {
                        return false;
                    }
                }
                Token::LBracket => {
                    let quantified = matches!(tokens.get(i.wrapping_sub(1)), Some(Token::PathQuantifier));
                    if i == 0 || !quantified {
                        return false;
                    }
                    bracket_untils.push(0);
                }
                Token::RBracket => match bracket_untils.pop() {
                    Some(1) => {}
                    _ => return false,
                },
                Token::Until => match bracket_untils.last_mut() {
                    Some(count) => *count += 1,
                    None => return false,
                },
                Token::PathQuantifier => {
                    if !matches!(tokens.get(i + 1), Some(Token::LBracket)) {
                        return false;
                    }
                }
                _ => {}
            }
        }
        paren_depth == 0 && bracket_untils.is_empty()
    }

    /// Atoms following the net naming convention must resolve to a node.
    fn atoms_resolve(tokens: &[Token], net: &PetriNet) -> bool {
        tokens.iter().all(|token| match token {
            Token::Atom(atom) if atom.starts_with("p_") => net.has_place(atom),
            Token::Atom(atom) if atom.starts_with("t_") => net.has_transition(atom),
            _ => true,
        })
    }
}

impl Default for SyntaxVerifier {
    fn default() -> Self {
        SyntaxVerifier::new()
    }
}

#[async_trait]
impl Verifier for SyntaxVerifier {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn verify(&self, formula: &str, net: &PetriNet) -> FlowcheckResult<bool> {
        let Some(tokens) = Self::tokenize(formula) else {
            return Ok(false);
        };
        Ok(Self::well_formed(&tokens) && Self::atoms_resolve(&tokens, net))
    }
}
