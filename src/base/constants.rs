//! Domain constants shared across layers.

/// File extension for Tonto source files (without the dot)
pub const TONTO_EXT: &str = "tonto";

/// Filename used in diagnostics when the caller does not supply one
pub const UNKNOWN_FILENAME: &str = "<unknown>";

/// Suffix that marks a user-declared datatype name (`AddressDataType`)
pub const DATATYPE_SUFFIX: &str = "DataType";
