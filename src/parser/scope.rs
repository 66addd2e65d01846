use std::collections::HashMap;

use crate::ast::types::TypeKind;

/// Stack of lexical scopes maintained while parsing.
///
/// The parser pushes a frame for the global declarations, one for
/// each function (formals and body share it) and one per nested
/// block. Lookups walk from the innermost frame outward; a name
/// with no declaration in any frame resolves to [`TypeKind::Error`].
/// Duplicate detection is not done here, that is the checker's job.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<HashMap<String, TypeKind>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    pub fn declare(&mut self, name: &str, declared_type: TypeKind) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.to_string(), declared_type);
        }
    }

    pub fn lookup(&self, name: &str) -> TypeKind {
        for frame in self.frames.iter().rev() {
            if let Some(found) = frame.get(name) {
                return *found;
            }
        }
        TypeKind::Error
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
