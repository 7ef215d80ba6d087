//! Typed AST for Tonto source files.
//!
//! A closed sum type: every declaration kind is its own struct, and the
//! containers ([`Content`], [`BodyItem`]) are enums matched exhaustively by
//! the symbol table and the checks.

use serde::{Serialize, Serializer};
use smol_str::SmolStr;

use super::keywords::{ClassStereotype, MetaAttribute, Nature, RelationStereotype};
use crate::base::Position;

/// A parsed source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    pub imports: Vec<Import>,
    pub package: Option<Package>,
    pub content: Vec<Content>,
}

impl File {
    pub fn package_name(&self) -> Option<&SmolStr> {
        self.package.as_ref().map(|p| &p.name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.content.iter().filter_map(|c| match c {
            Content::Class(class) => Some(class),
            _ => None,
        })
    }

    pub fn gensets(&self) -> impl Iterator<Item = &Genset> {
        self.content.iter().filter_map(|c| match c {
            Content::Genset(genset) => Some(genset),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub module: SmolStr,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: SmolStr,
    pub position: Position,
}

/// A top-level declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node_type")]
pub enum Content {
    #[serde(rename = "class")]
    Class(ClassDef),
    #[serde(rename = "datatype")]
    Datatype(DatatypeDef),
    #[serde(rename = "enum")]
    Enum(EnumDef),
    #[serde(rename = "genset")]
    Genset(Genset),
    #[serde(rename = "external_relation")]
    Relation(ExternalRelation),
}

impl Content {
    /// Declared name; relations use their relation name when present
    pub fn name(&self) -> Option<&SmolStr> {
        match self {
            Self::Class(c) => Some(&c.name),
            Self::Datatype(d) => Some(&d.name),
            Self::Enum(e) => Some(&e.name),
            Self::Genset(g) => Some(&g.name),
            Self::Relation(r) => r.relation_name.as_ref(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Class(c) => c.position,
            Self::Datatype(d) => d.position,
            Self::Enum(e) => e.position,
            Self::Genset(g) => g.position,
            Self::Relation(r) => r.position,
        }
    }
}

/// `kind Person of functional-complexes specializes Agent { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDef {
    pub stereotype: ClassStereotype,
    pub name: SmolStr,
    pub natures: Vec<Nature>,
    pub specialization: Option<Specialization>,
    /// `None` when the class has no braces at all
    pub body: Option<Vec<BodyItem>>,
    pub position: Position,
}

impl ClassDef {
    /// Direct parent names, empty when the class specializes nothing
    pub fn parents(&self) -> &[SmolStr] {
        self.specialization
            .as_ref()
            .map(|s| s.parents.as_slice())
            .unwrap_or(&[])
    }

    pub fn specializes(&self, parent: &str) -> bool {
        self.parents().iter().any(|p| p == parent)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.body.iter().flatten().filter_map(|item| match item {
            BodyItem::Attribute(a) => Some(a),
            BodyItem::Relation(_) => None,
        })
    }

    pub fn internal_relations(&self) -> impl Iterator<Item = &InternalRelation> {
        self.body.iter().flatten().filter_map(|item| match item {
            BodyItem::Relation(r) => Some(r),
            BodyItem::Attribute(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node_type")]
pub enum BodyItem {
    #[serde(rename = "attribute")]
    Attribute(Attribute),
    #[serde(rename = "internal_relation")]
    Relation(InternalRelation),
}

/// `name: String [0..1] { const }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: SmolStr,
    pub type_ref: SmolStr,
    pub cardinality: Option<Cardinality>,
    pub meta_attrs: Vec<MetaAttr>,
    pub position: Position,
}

/// One entry of an attribute's `{ ... }` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaAttr {
    pub kind: MetaAttribute,
    /// Referenced attribute for `subsets x` / `redefines x`
    pub target: Option<SmolStr>,
}

/// `[min..max]`; a single bound `[n]` has `min == max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cardinality {
    pub min: Bound,
    pub max: Bound,
}

impl Cardinality {
    pub fn new(min: Bound, max: Bound) -> Self {
        Self { min, max }
    }

    pub fn exactly(n: u64) -> Self {
        Self::new(Bound::Int(n), Bound::Int(n))
    }

    /// Numeric `min > max`, or a `*` lower bound with a numeric upper bound
    pub fn is_inverted(&self) -> bool {
        match (self.min, self.max) {
            (Bound::Int(min), Bound::Int(max)) => min > max,
            (Bound::Many, Bound::Int(_)) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "[{}]", self.min)
        } else {
            write!(f, "[{}..{}]", self.min, self.max)
        }
    }
}

/// Cardinality bound: an integer or `*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Int(u64),
    Many,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Many => f.write_str("*"),
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_u64(*n),
            Self::Many => serializer.serialize_str("*"),
        }
    }
}

/// Association, aggregation and composition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationOp {
    Association,
    AssociationRight,
    AssociationLeft,
    AssociationBoth,
    AggregationLeft,
    AggregationRight,
    CompositionLeft,
    CompositionRight,
}

impl RelationOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Association => "--",
            Self::AssociationRight => "-->",
            Self::AssociationLeft => "<--",
            Self::AssociationBoth => "<-->",
            Self::AggregationLeft => "<>--",
            Self::AggregationRight => "--<>",
            Self::CompositionLeft => "<o>--",
            Self::CompositionRight => "--<o>",
        }
    }
}

impl Serialize for RelationOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Relation declared in a class body; the source is the enclosing class
///
/// `@mediation [1..*] -- employs -- [1] Person`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalRelation {
    pub stereotype: Option<RelationStereotype>,
    pub first_cardinality: Option<Cardinality>,
    pub op_left: RelationOp,
    pub relation_name: Option<SmolStr>,
    /// Present only when a relation name sits between two operators
    pub op_right: Option<RelationOp>,
    pub second_cardinality: Option<Cardinality>,
    pub target: SmolStr,
    pub position: Position,
}

/// Top-level relation between two named ends
///
/// `@material relation Person [1..*] -- worksFor -- [1..*] Company`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalRelation {
    pub stereotype: Option<RelationStereotype>,
    pub first_end: SmolStr,
    pub first_cardinality: Option<Cardinality>,
    pub relation_name: Option<SmolStr>,
    pub op_left: RelationOp,
    pub op_right: Option<RelationOp>,
    pub second_cardinality: Option<Cardinality>,
    pub second_end: SmolStr,
    pub position: Position,
}

/// Generalization set, from either the block or the `where` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genset {
    pub name: SmolStr,
    pub disjoint: bool,
    pub complete: bool,
    pub general: SmolStr,
    pub categorizer: Option<SmolStr>,
    pub specifics: Vec<SmolStr>,
    pub position: Position,
}

impl Genset {
    pub fn has_specific(&self, name: &str) -> bool {
        self.specifics.iter().any(|s| s == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatatypeDef {
    pub name: SmolStr,
    pub specialization: Option<Specialization>,
    pub body: Option<Vec<Attribute>>,
    pub position: Position,
}

impl DatatypeDef {
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.body.iter().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDef {
    pub name: SmolStr,
    pub specialization: Option<Specialization>,
    pub values: Vec<SmolStr>,
    pub position: Position,
}

/// `specializes A, B`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Specialization {
    pub parents: Vec<SmolStr>,
}
