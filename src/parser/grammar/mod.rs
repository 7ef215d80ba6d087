//! Grammar rules for Tonto
//!
//! Each module adds an `impl Parser` block for one family of constructs:
//! - `file` - file layout, imports, package, top-level dispatch
//! - `class` - class declarations, bodies, attributes, cardinalities
//! - `relation` - internal and external relations
//! - `genset` - generalization sets (block and `where` forms)
//! - `datatype` - datatypes and enumerations
//!
//! ```text
//! File             = Import* Package Content*
//! Content          = ClassDef | DatatypeDef | EnumDef | GensetDef | ExternalRelation
//! ClassDef         = ClassStereotype Name ['of' Nature (',' Nature)*] [Specialization] ['{' Body? '}']
//! Body             = (Attribute | InternalRelation)+
//! Attribute        = Name ':' TypeRef [Cardinality] ['{' MetaAttr (',' MetaAttr)* '}']
//! Cardinality      = '[' Bound ['..' Bound] ']'
//! InternalRelation = ['@' RelStereotype] [Cardinality] Op [Name Op] [Cardinality] Name
//! ExternalRelation = ['@' RelStereotype] 'relation' Name [Cardinality] Op [Name Op] [Cardinality] Name
//! GensetDef        = ('disjoint' | 'complete')* 'genset' Name (GensetBlock | 'where' Names 'specializes' Name)
//! DatatypeDef      = 'datatype' Name [Specialization] ['{' Attribute* '}']
//! EnumDef          = 'enum' Name [Specialization] '{' Name (',' Name)* '}'
//! ```

mod class;
mod datatype;
mod file;
mod genset;
mod relation;

use crate::base::Position;
use crate::parser::lexer::Token;

pub(crate) fn token_position(token: &Token) -> Position {
    Position::new(token.line, token.column)
}
