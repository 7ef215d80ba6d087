//! Datatypes and enumerations.

use super::token_position;
use crate::parser::ast::{DatatypeDef, EnumDef};
use crate::parser::errors::{ErrorCode, ParseContext, is_declaration_start};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

impl Parser<'_> {
    /// `datatype AddressDataType specializes Base { street: String }`
    pub(crate) fn parse_datatype(&mut self) -> Option<DatatypeDef> {
        self.in_context(ParseContext::Datatype, |p| {
            let keyword = p.bump()?;
            let position = token_position(keyword);
            let Some(name) = p.expect_name(ErrorCode::E0301, "a datatype name") else {
                p.recover();
                return None;
            };
            let specialization = p.parse_specialization();

            let body = if p.eat(TokenKind::LBrace) {
                let mut attributes = Vec::new();
                loop {
                    if p.eat(TokenKind::RBrace) {
                        break;
                    }
                    if p.at_eof() || p.current_kind().is_some_and(is_declaration_start) {
                        p.error(ErrorCode::E0201, "unclosed '{'");
                        break;
                    }
                    let start = p.position();
                    if p.at_attribute_start() {
                        attributes.extend(p.parse_attribute());
                    } else {
                        p.error_recover(ErrorCode::E0303, "expected an attribute");
                    }
                    if p.position() == start {
                        p.bump();
                    }
                }
                Some(attributes)
            } else {
                None
            };

            Some(DatatypeDef {
                name,
                specialization,
                body,
                position,
            })
        })
    }

    /// `enum Color { Red, Green, Blue }`
    pub(crate) fn parse_enum(&mut self) -> Option<EnumDef> {
        self.in_context(ParseContext::Enum, |p| {
            let keyword = p.bump()?;
            let position = token_position(keyword);
            let Some(name) = p.expect_name(ErrorCode::E0301, "an enumeration name") else {
                p.recover();
                return None;
            };
            let specialization = p.parse_specialization();

            if !p.expect(TokenKind::LBrace, ErrorCode::E0308) {
                p.recover();
                return None;
            }
            let mut values = Vec::new();
            if !p.at(TokenKind::RBrace) {
                values = p.name_list(ErrorCode::E0308, "an enumeration literal");
            }
            if !p.eat(TokenKind::RBrace) {
                p.error(ErrorCode::E0201, "expected '}'");
                p.recover();
                p.eat(TokenKind::RBrace);
            }

            Some(EnumDef {
                name,
                specialization,
                values,
                position,
            })
        })
    }
}
