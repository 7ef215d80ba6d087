pub mod tests_workspace;
