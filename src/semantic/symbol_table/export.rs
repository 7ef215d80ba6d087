use serde::Serialize;
use smol_str::SmolStr;

use super::symbol::RelationSymbol;
use super::table::SymbolTable;
use crate::parser::ast::{ClassDef, DatatypeDef, EnumDef, ExternalRelation, Genset, InternalRelation};

/// Owned snapshot of a symbol table, for serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolExport {
    pub classes: Vec<ClassDef>,
    pub relations: Vec<ExportedRelation>,
    pub gensets: Vec<Genset>,
    pub datatypes: Vec<DatatypeDef>,
    pub enums: Vec<EnumDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node_type")]
pub enum ExportedRelation {
    #[serde(rename = "internal_relation")]
    Internal {
        source_class: SmolStr,
        #[serde(flatten)]
        relation: InternalRelation,
    },
    #[serde(rename = "external_relation")]
    External {
        #[serde(flatten)]
        relation: ExternalRelation,
    },
}

impl From<RelationSymbol<'_>> for ExportedRelation {
    fn from(symbol: RelationSymbol<'_>) -> Self {
        match symbol {
            RelationSymbol::Internal {
                source_class,
                relation,
            } => Self::Internal {
                source_class: source_class.clone(),
                relation: relation.clone(),
            },
            RelationSymbol::External(relation) => Self::External {
                relation: relation.clone(),
            },
        }
    }
}

impl SymbolTable<'_> {
    /// Copy every symbol out of the borrowed AST
    pub fn export(&self) -> SymbolExport {
        SymbolExport {
            classes: self.classes().cloned().collect(),
            relations: self.relations().iter().copied().map(Into::into).collect(),
            gensets: self.gensets().cloned().collect(),
            datatypes: self.datatypes().cloned().collect(),
            enums: self.enums().cloned().collect(),
        }
    }
}
