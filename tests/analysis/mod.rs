pub mod tests_determinism;
pub mod tests_result;
