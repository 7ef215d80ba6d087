pub mod tests_checks;
pub mod tests_patterns;
pub mod tests_symbols;
