use serde::Serialize;
use smol_str::SmolStr;

use crate::base::Position;
use crate::parser::ast::{
    Cardinality, ClassDef, DatatypeDef, EnumDef, ExternalRelation, InternalRelation,
};
use crate::parser::keywords::{PrimitiveType, RelationStereotype};

/// A relation as seen by the semantic layer.
///
/// Internal relations are paired with the class whose body declares them;
/// the AST node itself is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationSymbol<'a> {
    Internal {
        source_class: &'a SmolStr,
        relation: &'a InternalRelation,
    },
    External(&'a ExternalRelation),
}

impl<'a> RelationSymbol<'a> {
    pub fn stereotype(&self) -> Option<RelationStereotype> {
        match self {
            Self::Internal { relation, .. } => relation.stereotype,
            Self::External(relation) => relation.stereotype,
        }
    }

    /// Owning class for internal relations, first end for external ones
    pub fn source(&self) -> &'a SmolStr {
        match self {
            Self::Internal { source_class, .. } => source_class,
            Self::External(relation) => &relation.first_end,
        }
    }

    pub fn target(&self) -> &'a SmolStr {
        match self {
            Self::Internal { relation, .. } => &relation.target,
            Self::External(relation) => &relation.second_end,
        }
    }

    pub fn name(&self) -> Option<&'a SmolStr> {
        match self {
            Self::Internal { relation, .. } => relation.relation_name.as_ref(),
            Self::External(relation) => relation.relation_name.as_ref(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Internal { relation, .. } => relation.position,
            Self::External(relation) => relation.position,
        }
    }

    pub fn cardinalities(&self) -> [Option<Cardinality>; 2] {
        match self {
            Self::Internal { relation, .. } => {
                [relation.first_cardinality, relation.second_cardinality]
            }
            Self::External(relation) => [relation.first_cardinality, relation.second_cardinality],
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    pub fn has_stereotype(&self, stereotype: RelationStereotype) -> bool {
        self.stereotype() == Some(stereotype)
    }

    /// Whether `class` is either end of the relation
    pub fn involves(&self, class: &str) -> bool {
        self.source() == class || self.target() == class
    }

    /// Whether the relation connects `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source() == a && self.target() == b) || (self.source() == b && self.target() == a)
    }
}

/// What a type reference resolved to; primitives win over declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedType<'a> {
    Primitive(PrimitiveType),
    Class(&'a ClassDef),
    Datatype(&'a DatatypeDef),
    Enum(&'a EnumDef),
}

/// Declaration families with their own name space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Genset,
    Datatype,
    Enum,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Genset => "genset",
            Self::Datatype => "datatype",
            Self::Enum => "enum",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name declared twice in the same family; `second` replaced `first`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub kind: DeclarationKind,
    pub name: SmolStr,
    pub first: Position,
    pub second: Position,
}
