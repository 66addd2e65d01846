//! Symbol table used by the semantic checker.

pub mod table;

#[cfg(test)]
mod tests;
