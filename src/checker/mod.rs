//! Semantic checker: declaration conflicts, name resolution and
//! operand type rules.

pub mod checker;

#[cfg(test)]
mod tests;
