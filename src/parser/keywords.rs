//! Reserved vocabulary of the Tonto language.
//!
//! Each vocabulary is a closed enum with its source spelling, so the lexer,
//! the parser and the typo matcher all agree on one word list.

use std::fmt;

use serde::Serialize;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every member, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Source spelling
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Look up a word by its exact source spelling
            pub fn from_text(text: &str) -> Option<Self> {
                match text {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Source spellings of every member
            pub fn words() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|v| v.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Structural keywords
    pub enum Keyword {
        Package => "package",
        Import => "import",
        Genset => "genset",
        Disjoint => "disjoint",
        Complete => "complete",
        General => "general",
        Specifics => "specifics",
        Categorizer => "categorizer",
        Where => "where",
        Specializes => "specializes",
        Relation => "relation",
        Enum => "enum",
        Datatype => "datatype",
        Of => "of",
    }
}

vocabulary! {
    /// Ontological natures restricting what a non-sortal may classify
    /// (`category Agent of functional-complexes, relators`)
    pub enum Nature {
        FunctionalComplexes => "functional-complexes",
        IntrinsicModes => "intrinsic-modes",
        ExtrinsicModes => "extrinsic-modes",
        AbstractIndividuals => "abstract-individuals",
        Relators => "relators",
    }
}

vocabulary! {
    /// Class stereotypes (OntoUML universals)
    pub enum ClassStereotype {
        Event => "event",
        Situation => "situation",
        Process => "process",
        Category => "category",
        Mixin => "mixin",
        PhaseMixin => "phaseMixin",
        RoleMixin => "roleMixin",
        HistoricalRoleMixin => "historicalRoleMixin",
        Kind => "kind",
        Collective => "collective",
        Quantity => "quantity",
        Quality => "quality",
        Mode => "mode",
        IntrinsicMode => "intrinsicMode",
        ExtrinsicMode => "extrinsicMode",
        Subkind => "subkind",
        Phase => "phase",
        Role => "role",
        HistoricalRole => "historicalRole",
        Relator => "relator",
    }
}

vocabulary! {
    /// Relation stereotypes, written after `@`
    pub enum RelationStereotype {
        Material => "material",
        Derivation => "derivation",
        Comparative => "comparative",
        Mediation => "mediation",
        Characterization => "characterization",
        ExternalDependence => "externalDependence",
        ComponentOf => "componentOf",
        MemberOf => "memberOf",
        SubCollectionOf => "subCollectionOf",
        SubQualityOf => "subQualityOf",
        Instantiation => "instantiation",
        Termination => "termination",
        Participational => "participational",
        Participation => "participation",
        HistoricalDependence => "historicalDependence",
        Creation => "creation",
        Manifestation => "manifestation",
        BringsAbout => "bringsAbout",
        Triggers => "triggers",
        Composition => "composition",
        Aggregation => "aggregation",
        Inherence => "inherence",
        Value => "value",
        Formal => "formal",
        Constitution => "constitution",
    }
}

vocabulary! {
    /// Built-in scalar types
    pub enum PrimitiveType {
        Number => "Number",
        String => "String",
        Boolean => "Boolean",
        Date => "Date",
        Time => "Time",
        Datetime => "Datetime",
    }
}

vocabulary! {
    /// Attribute meta-properties (`name: String { const, ordered }`)
    pub enum MetaAttribute {
        Ordered => "ordered",
        Const => "const",
        Derived => "derived",
        Subsets => "subsets",
        Redefines => "redefines",
    }
}
