//! Injectable class-name composition.

use indexmap::IndexSet;

#[derive(Debug, Clone, Copy)]
/// Pure class composition function shared by every primitive.
///
/// Install a custom merger through [`crate::FieldUiProvider`] to plug in a
/// utility-class conflict resolver.
pub struct ClassMerge(fn(&[&str]) -> String);

impl ClassMerge {
    /// Wraps a merge function.
    pub const fn new(merge: fn(&[&str]) -> String) -> Self {
        Self(merge)
    }

    /// Composes the given class lists into one `class` attribute value.
    pub fn merge(&self, classes: &[&str]) -> String {
        (self.0)(classes)
    }
}

impl Default for ClassMerge {
    fn default() -> Self {
        Self::new(join_class_tokens)
    }
}

/// Joins whitespace-separated class tokens, dropping blanks and repeats.
///
/// The first occurrence of a token keeps its position.
pub fn join_class_tokens(classes: &[&str]) -> String {
    let tokens: IndexSet<&str> = classes
        .iter()
        .flat_map(|class| class.split_whitespace())
        .collect();
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}
