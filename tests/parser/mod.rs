pub mod tests_lexer;
pub mod tests_parser_recovery;
