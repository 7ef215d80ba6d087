//! Internal (class body) and external (top-level) relations.

use smol_str::SmolStr;

use crate::parser::ast::{Cardinality, ExternalRelation, InternalRelation, RelationOp};
use crate::parser::errors::{ErrorCode, Expectation, ParseContext};
use crate::parser::keywords::{Keyword, RelationStereotype};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

fn relation_op(kind: TokenKind) -> Option<RelationOp> {
    let op = match kind {
        TokenKind::Association => RelationOp::Association,
        TokenKind::AssociationRight => RelationOp::AssociationRight,
        TokenKind::AssociationLeft => RelationOp::AssociationLeft,
        TokenKind::AssociationBoth => RelationOp::AssociationBoth,
        TokenKind::AggregationLeft => RelationOp::AggregationLeft,
        TokenKind::AggregationRight => RelationOp::AggregationRight,
        TokenKind::CompositionLeft => RelationOp::CompositionLeft,
        TokenKind::CompositionRight => RelationOp::CompositionRight,
        _ => return None,
    };
    Some(op)
}

/// Everything between the first end and the second end of a relation
struct Connector {
    first_cardinality: Option<Cardinality>,
    op_left: RelationOp,
    relation_name: Option<SmolStr>,
    op_right: Option<RelationOp>,
    second_cardinality: Option<Cardinality>,
}

impl Parser<'_> {
    /// `@mediation [1..*] -- employs -- [1] Person` inside a class body
    pub(crate) fn parse_internal_relation(&mut self) -> Option<InternalRelation> {
        self.in_context(ParseContext::InternalRelation, |p| {
            let position = p.current_position();
            let stereotype = p.parse_relation_stereotype();
            let connector = p.parse_connector()?;
            let Some(target) = p.expect_name(ErrorCode::E0402, "a target class name") else {
                p.recover();
                return None;
            };

            Some(InternalRelation {
                stereotype,
                first_cardinality: connector.first_cardinality,
                op_left: connector.op_left,
                relation_name: connector.relation_name,
                op_right: connector.op_right,
                second_cardinality: connector.second_cardinality,
                target,
                position,
            })
        })
    }

    /// `@material relation Person [1..*] -- worksFor -- [1..*] Company`
    pub(crate) fn parse_external_relation(&mut self) -> Option<ExternalRelation> {
        self.in_context(ParseContext::ExternalRelation, |p| {
            let position = p.current_position();
            let stereotype = p.parse_relation_stereotype();
            if !p.expect(TokenKind::Keyword(Keyword::Relation), ErrorCode::E0901) {
                p.recover();
                return None;
            }
            let Some(first_end) = p.expect_name(ErrorCode::E0402, "a source class name") else {
                p.recover();
                return None;
            };
            let connector = p.parse_connector()?;
            let Some(second_end) = p.expect_name(ErrorCode::E0402, "a target class name") else {
                p.recover();
                return None;
            };

            Some(ExternalRelation {
                stereotype,
                first_end,
                first_cardinality: connector.first_cardinality,
                relation_name: connector.relation_name,
                op_left: connector.op_left,
                op_right: connector.op_right,
                second_cardinality: connector.second_cardinality,
                second_end,
                position,
            })
        })
    }

    /// Optional `@stereotype`; unknown stereotypes are reported and skipped
    fn parse_relation_stereotype(&mut self) -> Option<RelationStereotype> {
        if !self.eat(TokenKind::At) {
            return None;
        }
        if self.at_class(Expectation::RelationStereotype) {
            return match self.bump().map(|t| t.kind) {
                Some(TokenKind::RelationStereotype(stereotype)) => Some(stereotype),
                _ => None,
            };
        }
        self.error(ErrorCode::E0403, "expected a relation stereotype after '@'");
        if self.current_kind().is_some_and(TokenKind::is_name) {
            self.bump();
        }
        None
    }

    /// `[card] op [name op] [card]`
    fn parse_connector(&mut self) -> Option<Connector> {
        let first_cardinality = if self.at(TokenKind::LBracket) {
            self.parse_cardinality()
        } else {
            None
        };

        let Some(op_left) = self.parse_relation_op() else {
            self.error_recover(ErrorCode::E0401, "expected a relation operator");
            return None;
        };

        let mut relation_name = None;
        let mut op_right = None;
        let named = self.nth_kind(1).is_some_and(TokenKind::is_relation_op);
        if self.at_class(Expectation::Name) && named {
            relation_name = self.eat_name();
            op_right = self.parse_relation_op();
        }

        let second_cardinality = if self.at(TokenKind::LBracket) {
            self.parse_cardinality()
        } else {
            None
        };

        Some(Connector {
            first_cardinality,
            op_left,
            relation_name,
            op_right,
            second_cardinality,
        })
    }

    fn parse_relation_op(&mut self) -> Option<RelationOp> {
        if !self.at_relation_op() {
            return None;
        }
        self.bump().and_then(|t| relation_op(t.kind))
    }
}
