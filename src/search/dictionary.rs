use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::ops::Bound;

/// Answers whether a text is a word or the start of one. Any word list can drive the
/// [move search](crate::AiMoveGenerator) and [challenge judging](crate::PendingMove::invalid_words)
/// by implementing this trait.
///
/// Lookups are made with the text exactly as spelled on the board; normalization is up to
/// the implementation.
pub trait WordDictionary {
    /// Whether `word` is a complete word.
    fn contains(&self, word: &str) -> bool;

    /// Whether some word starts with `prefix`. Must be `true` for the empty prefix.
    ///
    /// The default never prunes, which keeps the search correct but slow.
    fn contains_prefix(&self, prefix: &str) -> bool {
        let _ = prefix;
        true
    }
}

impl<D> WordDictionary for &D
where
    D: WordDictionary + ?Sized,
{
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    #[inline]
    fn contains_prefix(&self, prefix: &str) -> bool {
        (**self).contains_prefix(prefix)
    }
}

impl WordDictionary for BTreeSet<String> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        prefix.is_empty()
            || self
                .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
                .next()
                .is_some_and(|word| word.starts_with(prefix))
    }
}

impl<S> WordDictionary for HashSet<String, S>
where
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}
