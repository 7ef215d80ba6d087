//! Generalization sets.
//!
//! Block form:
//! ```text
//! disjoint complete genset PersonAge {
//!     general Person
//!     specifics Child, Adult
//! }
//! ```
//! Short form: `disjoint genset PersonAge where Child, Adult specializes Person`

use smol_str::SmolStr;

use crate::parser::ast::Genset;
use crate::parser::errors::{ErrorCode, ParseContext, is_declaration_start};
use crate::parser::keywords::Keyword;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

/// Clauses collected from a genset body
#[derive(Default)]
struct GensetClauses {
    general: Option<SmolStr>,
    categorizer: Option<SmolStr>,
    specifics: Option<Vec<SmolStr>>,
}

impl Parser<'_> {
    pub(crate) fn parse_genset(&mut self) -> Option<Genset> {
        self.in_context(ParseContext::Genset, |p| {
            let position = p.current_position();
            let (disjoint, complete) = p.parse_genset_modifiers();

            if !p.eat(TokenKind::Keyword(Keyword::Genset)) {
                p.error_recover(ErrorCode::E0604, "expected 'genset'");
                return None;
            }
            let Some(name) = p.expect_name(ErrorCode::E0301, "a genset name") else {
                p.recover();
                if p.at(TokenKind::LBrace) {
                    p.parse_genset_body();
                }
                return None;
            };

            let clauses = if p.at(TokenKind::LBrace) {
                p.parse_genset_body()
            } else if p.eat(TokenKind::Keyword(Keyword::Where)) {
                p.parse_genset_where()
            } else {
                p.error_recover(ErrorCode::E0604, "expected '{' or 'where'");
                return None;
            };

            Some(Genset {
                name,
                disjoint,
                complete,
                general: clauses.general.unwrap_or_default(),
                categorizer: clauses.categorizer,
                specifics: clauses.specifics.unwrap_or_default(),
                position,
            })
        })
    }

    /// `disjoint` and `complete` in any order, each at most once
    fn parse_genset_modifiers(&mut self) -> (bool, bool) {
        let mut disjoint = false;
        let mut complete = false;
        loop {
            let flag = if self.at(TokenKind::Keyword(Keyword::Disjoint)) {
                &mut disjoint
            } else if self.at(TokenKind::Keyword(Keyword::Complete)) {
                &mut complete
            } else {
                break;
            };
            if *flag {
                self.error(ErrorCode::E0603, "repeated genset modifier");
            }
            *flag = true;
            self.bump();
        }
        (disjoint, complete)
    }

    fn parse_genset_body(&mut self) -> GensetClauses {
        self.bump();
        self.in_context(ParseContext::GensetBody, |p| {
            let mut clauses = GensetClauses::default();
            loop {
                let start = p.position();
                if p.eat(TokenKind::Keyword(Keyword::General)) {
                    clauses.general = p.expect_name(ErrorCode::E0601, "a general class name");
                } else if p.eat(TokenKind::Keyword(Keyword::Categorizer)) {
                    clauses.categorizer = p.expect_name(ErrorCode::E0301, "a categorizer name");
                } else if p.eat(TokenKind::Keyword(Keyword::Specifics)) {
                    let specifics = p.name_list(ErrorCode::E0602, "a specific class name");
                    clauses.specifics = Some(specifics);
                } else if p.at(TokenKind::RBrace) {
                    // Reported before the brace is consumed so the clause
                    // keywords are still in the expected set
                    if clauses.general.is_none() {
                        p.error(ErrorCode::E0601, "missing 'general' clause");
                    }
                    if clauses.specifics.is_none() {
                        p.error(ErrorCode::E0602, "missing 'specifics' clause");
                    }
                    p.bump();
                    break;
                } else if p.at_eof() || p.current_kind().is_some_and(is_declaration_start) {
                    p.error(ErrorCode::E0201, "unclosed '{'");
                    break;
                } else {
                    p.error_recover(ErrorCode::E0604, "expected a genset clause");
                }
                if p.position() == start {
                    p.bump();
                }
            }
            clauses
        })
    }

    /// `where A, B specializes P`
    fn parse_genset_where(&mut self) -> GensetClauses {
        let specifics = self.name_list(ErrorCode::E0602, "a specific class name");
        let general = if self.expect(TokenKind::Keyword(Keyword::Specializes), ErrorCode::E0601) {
            self.expect_name(ErrorCode::E0601, "a general class name")
        } else {
            None
        };
        GensetClauses {
            general,
            categorizer: None,
            specifics: Some(specifics),
        }
    }
}
