// Utilities shared by the batch coordinator and the CLI

/// Source/target directory checks and output layout
pub mod paths;
