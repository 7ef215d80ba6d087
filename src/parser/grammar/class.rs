//! Class declarations, class bodies, attributes and cardinalities.

use smol_str::SmolStr;

use super::token_position;
use crate::parser::ast::{
    Attribute, BodyItem, Bound, Cardinality, ClassDef, MetaAttr, Specialization,
};
use crate::parser::errors::{ErrorCode, Expectation, ParseContext, is_declaration_start};
use crate::parser::keywords::{Keyword, MetaAttribute, Nature};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

impl Parser<'_> {
    /// `kind Person of functional-complexes specializes Agent { ... }`
    pub(crate) fn parse_class(&mut self) -> Option<ClassDef> {
        self.in_context(ParseContext::ClassDeclaration, |p| {
            let keyword = p.bump()?;
            let TokenKind::ClassStereotype(stereotype) = keyword.kind else {
                return None;
            };
            let position = token_position(keyword);

            let Some(name) = p.parse_class_name() else {
                p.error_recover(ErrorCode::E0301, "expected a class name");
                if p.at(TokenKind::LBrace) {
                    p.parse_class_body();
                }
                return None;
            };

            let natures = if p.eat(TokenKind::Keyword(Keyword::Of)) {
                p.parse_natures()
            } else {
                Vec::new()
            };
            let specialization = p.parse_specialization();
            let body = if p.at(TokenKind::LBrace) {
                Some(p.parse_class_body())
            } else {
                None
            };

            Some(ClassDef {
                stereotype,
                name,
                natures,
                specialization,
                body,
                position,
            })
        })
    }

    /// Uppercase names are expected; other names are kept but reported
    fn parse_class_name(&mut self) -> Option<SmolStr> {
        if self.at_class(Expectation::ClassName) {
            return self.bump().map(|t| t.lexeme.clone());
        }
        if self.at_class(Expectation::Name) {
            self.error(
                ErrorCode::E0302,
                "class names must start with an uppercase letter",
            );
            return self.bump().map(|t| t.lexeme.clone());
        }
        None
    }

    fn parse_natures(&mut self) -> Vec<Nature> {
        let mut natures = Vec::new();
        loop {
            if self.at_class(Expectation::Nature) {
                if let Some(TokenKind::Nature(nature)) = self.bump().map(|t| t.kind) {
                    natures.push(nature);
                }
            } else {
                self.error(ErrorCode::E0901, "expected a nature");
                break;
            }
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        natures
    }

    /// `specializes A, B`
    pub(crate) fn parse_specialization(&mut self) -> Option<Specialization> {
        if !self.eat(TokenKind::Keyword(Keyword::Specializes)) {
            return None;
        }
        let parents = self.name_list(ErrorCode::E0301, "a parent class name");
        Some(Specialization { parents })
    }

    pub(crate) fn parse_class_body(&mut self) -> Vec<BodyItem> {
        self.bump();
        self.in_context(ParseContext::ClassBody, |p| {
            let mut items = Vec::new();
            loop {
                if p.eat(TokenKind::RBrace) {
                    break;
                }
                if p.at_eof() {
                    p.error(ErrorCode::E0201, "unclosed '{'");
                    break;
                }
                let start = p.position();
                if p.at_attribute_start() {
                    if let Some(attribute) = p.parse_attribute() {
                        items.push(BodyItem::Attribute(attribute));
                    }
                } else if p.current_kind().is_some_and(is_declaration_start) {
                    p.error(ErrorCode::E0201, "expected '}'");
                    break;
                } else if p.at(TokenKind::At) || p.at(TokenKind::LBracket) || p.at_relation_op() {
                    if let Some(relation) = p.parse_internal_relation() {
                        items.push(BodyItem::Relation(relation));
                    }
                } else {
                    p.error_recover(ErrorCode::E0303, "expected an attribute or relation");
                }
                if p.position() == start {
                    p.bump();
                }
            }
            items
        })
    }

    /// `name :`, where `name` may also be a reserved word
    pub(crate) fn at_attribute_start(&mut self) -> bool {
        let at_name = self.at_class(Expectation::Name);
        let reserved = self.current_kind().is_some_and(TokenKind::is_reserved);
        (at_name || reserved) && self.nth_kind(1) == Some(TokenKind::Colon)
    }

    /// `name: Type [cardinality] { meta }`
    pub(crate) fn parse_attribute(&mut self) -> Option<Attribute> {
        self.in_context(ParseContext::Attribute, |p| {
            let name_token = p.bump()?;
            let position = token_position(name_token);
            p.bump();

            if !p.at_class(Expectation::TypeName) {
                p.error_recover(ErrorCode::E0304, "expected an attribute type");
                return None;
            }
            let type_ref = p.bump()?.lexeme.clone();

            let cardinality = if p.at(TokenKind::LBracket) {
                p.parse_cardinality()
            } else {
                None
            };
            let meta_attrs = if p.at(TokenKind::LBrace) {
                p.parse_meta_attributes()
            } else {
                Vec::new()
            };

            Some(Attribute {
                name: name_token.lexeme.clone(),
                type_ref,
                cardinality,
                meta_attrs,
                position,
            })
        })
    }

    /// `[n]`, `[n..m]`, `[n..*]`, `[*]`
    pub(crate) fn parse_cardinality(&mut self) -> Option<Cardinality> {
        self.in_context(ParseContext::Cardinality, |p| {
            p.bump();
            let min = p.parse_bound()?;
            let max = if p.eat(TokenKind::DotDot) {
                p.parse_bound()?
            } else {
                min
            };
            if !p.eat(TokenKind::RBracket) {
                p.error_recover(ErrorCode::E0202, "expected ']'");
                p.eat(TokenKind::RBracket);
            }
            Some(Cardinality::new(min, max))
        })
    }

    fn parse_bound(&mut self) -> Option<Bound> {
        if self.at(TokenKind::Integer) {
            let token = self.bump()?;
            return Some(Bound::Int(token.integer_value().unwrap_or(u64::MAX)));
        }
        if self.eat(TokenKind::Star) {
            return Some(Bound::Many);
        }
        self.error_recover(ErrorCode::E0305, "expected an integer or '*'");
        self.eat(TokenKind::RBracket);
        None
    }

    /// `{ const, ordered, subsets other }`
    fn parse_meta_attributes(&mut self) -> Vec<MetaAttr> {
        self.in_context(ParseContext::MetaAttributes, |p| {
            p.bump();
            let mut metas = Vec::new();
            loop {
                if p.at_class(Expectation::MetaAttribute) {
                    if let Some(TokenKind::MetaAttribute(kind)) = p.bump().map(|t| t.kind) {
                        let target = match kind {
                            MetaAttribute::Subsets | MetaAttribute::Redefines => p.eat_name(),
                            _ => None,
                        };
                        metas.push(MetaAttr { kind, target });
                    }
                } else {
                    p.error_recover(ErrorCode::E0307, "expected a meta-attribute");
                }
                if !p.eat(TokenKind::Comma) {
                    break;
                }
            }
            if !p.eat(TokenKind::RBrace) {
                p.error(ErrorCode::E0201, "expected '}'");
                p.recover();
                p.eat(TokenKind::RBrace);
            }
            metas
        })
    }
}
