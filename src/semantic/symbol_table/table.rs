use indexmap::IndexMap;
use indexmap::map::Entry;
use smol_str::SmolStr;

use super::symbol::{DeclarationKind, Duplicate, RelationSymbol, ResolvedType};
use crate::base::Position;
use crate::parser::ast::{ClassDef, Content, DatatypeDef, EnumDef, File, Genset};
use crate::parser::keywords::{ClassStereotype, PrimitiveType, RelationStereotype};

/// Symbols declared in one file
#[derive(Debug, Clone, Default)]
pub struct SymbolTable<'a> {
    classes: IndexMap<SmolStr, &'a ClassDef>,
    gensets: IndexMap<SmolStr, &'a Genset>,
    datatypes: IndexMap<SmolStr, &'a DatatypeDef>,
    enums: IndexMap<SmolStr, &'a EnumDef>,
    relations: Vec<RelationSymbol<'a>>,
    duplicates: Vec<Duplicate>,
}

/// Insert into a name map; a repeated name replaces the earlier entry in
/// place and the replaced item is returned
fn declare<'a, T>(
    map: &mut IndexMap<SmolStr, &'a T>,
    duplicates: &mut Vec<Duplicate>,
    kind: DeclarationKind,
    name: &SmolStr,
    item: &'a T,
    position: impl Fn(&T) -> Position,
) -> Option<&'a T> {
    match map.entry(name.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(item);
            None
        }
        Entry::Occupied(mut slot) => {
            let first = position(slot.get());
            let second = position(item);
            tracing::warn!("[SYMBOLS] duplicate {kind} '{name}' at {second} (first at {first})");
            duplicates.push(Duplicate {
                kind,
                name: name.clone(),
                first,
                second,
            });
            Some(slot.insert(item))
        }
    }
}

impl<'a> SymbolTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a whole file
    pub fn from_file(file: &'a File) -> Self {
        let mut table = Self::new();
        table.populate(file);
        table
    }

    /// Register every declaration of `file` in one pass
    pub fn populate(&mut self, file: &'a File) {
        for content in &file.content {
            match content {
                Content::Class(class) => {
                    self.add_class(class);
                }
                Content::Genset(genset) => {
                    declare(
                        &mut self.gensets,
                        &mut self.duplicates,
                        DeclarationKind::Genset,
                        &genset.name,
                        genset,
                        |g| g.position,
                    );
                }
                Content::Datatype(datatype) => {
                    declare(
                        &mut self.datatypes,
                        &mut self.duplicates,
                        DeclarationKind::Datatype,
                        &datatype.name,
                        datatype,
                        |d| d.position,
                    );
                }
                Content::Enum(enumeration) => {
                    declare(
                        &mut self.enums,
                        &mut self.duplicates,
                        DeclarationKind::Enum,
                        &enumeration.name,
                        enumeration,
                        |e| e.position,
                    );
                }
                Content::Relation(relation) => {
                    self.relations.push(RelationSymbol::External(relation));
                }
            }
        }
        tracing::debug!(
            "[SYMBOLS] {} classes, {} relations, {} gensets, {} datatypes, {} enums",
            self.classes.len(),
            self.relations.len(),
            self.gensets.len(),
            self.datatypes.len(),
            self.enums.len()
        );
    }

    fn add_class(&mut self, class: &'a ClassDef) {
        let replaced = declare(
            &mut self.classes,
            &mut self.duplicates,
            DeclarationKind::Class,
            &class.name,
            class,
            |c| c.position,
        );
        // The replaced body's relations go with it
        if let Some(old) = replaced {
            self.relations.retain(|r| match r {
                RelationSymbol::Internal { source_class, .. } => {
                    !std::ptr::eq(*source_class, &old.name)
                }
                RelationSymbol::External(_) => true,
            });
        }
        for relation in class.internal_relations() {
            self.relations.push(RelationSymbol::Internal {
                source_class: &class.name,
                relation,
            });
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn class(&self, name: &str) -> Option<&'a ClassDef> {
        self.classes.get(name).copied()
    }

    pub fn genset(&self, name: &str) -> Option<&'a Genset> {
        self.gensets.get(name).copied()
    }

    pub fn datatype(&self, name: &str) -> Option<&'a DatatypeDef> {
        self.datatypes.get(name).copied()
    }

    pub fn enumeration(&self, name: &str) -> Option<&'a EnumDef> {
        self.enums.get(name).copied()
    }

    pub fn class_exists(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Resolve a type reference: primitive, then class, then datatype, then enum
    pub fn resolve_type(&self, name: &str) -> Option<ResolvedType<'a>> {
        PrimitiveType::from_text(name)
            .map(ResolvedType::Primitive)
            .or_else(|| self.class(name).map(ResolvedType::Class))
            .or_else(|| self.datatype(name).map(ResolvedType::Datatype))
            .or_else(|| self.enumeration(name).map(ResolvedType::Enum))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    pub fn classes(&self) -> impl Iterator<Item = &'a ClassDef> + '_ {
        self.classes.values().copied()
    }

    pub fn gensets(&self) -> impl Iterator<Item = &'a Genset> + '_ {
        self.gensets.values().copied()
    }

    pub fn datatypes(&self) -> impl Iterator<Item = &'a DatatypeDef> + '_ {
        self.datatypes.values().copied()
    }

    pub fn enums(&self) -> impl Iterator<Item = &'a EnumDef> + '_ {
        self.enums.values().copied()
    }

    pub fn relations(&self) -> &[RelationSymbol<'a>] {
        &self.relations
    }

    /// Names declared more than once, in declaration order
    pub fn duplicates(&self) -> &[Duplicate] {
        &self.duplicates
    }

    // =========================================================================
    // Pattern queries
    // =========================================================================

    pub fn classes_by_stereotype(
        &self,
        stereotype: ClassStereotype,
    ) -> impl Iterator<Item = &'a ClassDef> + '_ {
        self.classes().filter(move |c| c.stereotype == stereotype)
    }

    /// Classes listing `name` among their parents, optionally of one stereotype
    pub fn children_of(
        &self,
        name: &str,
        stereotype: Option<ClassStereotype>,
    ) -> Vec<&'a ClassDef> {
        self.classes()
            .filter(|c| stereotype.is_none_or(|s| c.stereotype == s))
            .filter(|c| c.specializes(name))
            .collect()
    }

    /// Parent names of `name`; empty for unknown classes
    pub fn parents_of(&self, name: &str) -> &'a [SmolStr] {
        self.class(name).map(ClassDef::parents).unwrap_or(&[])
    }

    pub fn gensets_with_general(&self, name: &str) -> Vec<&'a Genset> {
        self.gensets().filter(|g| g.general == name).collect()
    }

    pub fn gensets_with_specific(&self, name: &str) -> Vec<&'a Genset> {
        self.gensets().filter(|g| g.has_specific(name)).collect()
    }

    pub fn relations_involving(&self, name: &str) -> Vec<RelationSymbol<'a>> {
        self.relations
            .iter()
            .filter(|r| r.involves(name))
            .copied()
            .collect()
    }

    /// Relations declared in the body of `name`
    pub fn internal_relations_of(&self, name: &str) -> Vec<RelationSymbol<'a>> {
        self.relations
            .iter()
            .filter(|r| r.is_internal() && r.source() == name)
            .copied()
            .collect()
    }

    pub fn relations_by_stereotype(
        &self,
        stereotype: RelationStereotype,
    ) -> Vec<RelationSymbol<'a>> {
        self.relations
            .iter()
            .filter(|r| r.has_stereotype(stereotype))
            .copied()
            .collect()
    }
}
