//! File layout: imports, package, top-level declarations.

use super::token_position;
use crate::parser::ast::{Content, File, Import, Package};
use crate::parser::errors::{ErrorCode, Expectation, ParseContext};
use crate::parser::keywords::Keyword;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_file(&mut self) -> File {
        let mut file = File::default();

        while self.at(TokenKind::Keyword(Keyword::Import)) {
            if let Some(import) = self.parse_import() {
                file.imports.push(import);
            }
        }

        if self.at(TokenKind::Keyword(Keyword::Package)) {
            file.package = self.parse_package();
        } else {
            self.error(ErrorCode::E0502, "expected a package declaration");
        }

        while !self.at_eof() {
            let start = self.position();
            self.parse_top_level(&mut file);
            // Always make progress
            if self.position() == start {
                self.bump();
            }
        }

        file
    }

    fn parse_top_level(&mut self, file: &mut File) {
        if self.current_kind() == Some(TokenKind::RBrace) {
            self.error(ErrorCode::E0203, "unexpected '}'");
            self.bump();
            return;
        }

        let content = if self.at_class(Expectation::ClassStereotype) {
            self.parse_class().map(Content::Class)
        } else if self.at(TokenKind::Keyword(Keyword::Genset))
            || self.at(TokenKind::Keyword(Keyword::Disjoint))
            || self.at(TokenKind::Keyword(Keyword::Complete))
        {
            self.parse_genset().map(Content::Genset)
        } else if self.at(TokenKind::At) || self.at(TokenKind::Keyword(Keyword::Relation)) {
            self.parse_external_relation().map(Content::Relation)
        } else if self.at(TokenKind::Keyword(Keyword::Datatype)) {
            self.parse_datatype().map(Content::Datatype)
        } else if self.at(TokenKind::Keyword(Keyword::Enum)) {
            self.parse_enum().map(Content::Enum)
        } else if self.at(TokenKind::Keyword(Keyword::Import)) {
            if let Some(import) = self.parse_import() {
                file.imports.push(import);
            }
            return;
        } else if self.at(TokenKind::Keyword(Keyword::Package)) {
            self.error(ErrorCode::E0503, "package already declared");
            self.parse_package();
            return;
        } else {
            self.error_recover(ErrorCode::E0306, "expected a declaration");
            return;
        };

        if let Some(content) = content {
            file.content.push(content);
        }
    }

    fn parse_import(&mut self) -> Option<Import> {
        self.in_context(ParseContext::Import, |p| {
            let keyword = p.bump()?;
            let position = token_position(keyword);
            match p.expect_name(ErrorCode::E0501, "a module name") {
                Some(module) => Some(Import { module, position }),
                None => {
                    p.recover();
                    None
                }
            }
        })
    }

    fn parse_package(&mut self) -> Option<Package> {
        self.in_context(ParseContext::Package, |p| {
            let keyword = p.bump()?;
            let position = token_position(keyword);
            match p.expect_name(ErrorCode::E0301, "a package name") {
                Some(name) => Some(Package { name, position }),
                None => {
                    p.recover();
                    None
                }
            }
        })
    }
}
