//! Alias tables consulted by the quick-add parser.

use std::collections::BTreeMap;

use crate::planner::{Bucket, Context};

/// Lookup tables mapping marker text to planner values.
///
/// Keys are stored uppercased. Bucket aliases include their leading `!`;
/// context labels are stored without the `@`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    buckets: BTreeMap<String, Bucket>,
    contexts: BTreeMap<String, Context>,
}

impl Vocabulary {
    /// An empty vocabulary. No bucket or context markers will match.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The planner's standard tables: `!P`/`!PRIORITY`, `!SC`/`!SHOULD_COULD`
    /// and every [`Context`] under its own name.
    #[must_use]
    pub fn planner() -> Self {
        let mut vocab = Self::new()
            .with_bucket_alias("!P", Bucket::Priority)
            .with_bucket_alias("!SC", Bucket::ShouldCould);
        for bucket in Bucket::ALL {
            vocab = vocab.with_bucket_alias(&format!("!{bucket}"), bucket);
        }
        for context in Context::ALL {
            vocab = vocab.with_context(context.as_str(), context);
        }
        vocab
    }

    /// Add (or replace) a bucket alias.
    #[must_use]
    pub fn with_bucket_alias(mut self, alias: &str, bucket: Bucket) -> Self {
        self.buckets.insert(alias.trim().to_uppercase(), bucket);
        self
    }

    /// Add (or replace) a context label.
    #[must_use]
    pub fn with_context(mut self, label: &str, context: Context) -> Self {
        self.contexts.insert(label.trim().to_uppercase(), context);
        self
    }

    /// Look up a whole token as a bucket alias, ignoring case.
    #[must_use]
    pub fn bucket(&self, token: &str) -> Option<Bucket> {
        self.buckets.get(&token.to_uppercase()).copied()
    }

    /// Look up a context label (without `@`), ignoring case.
    #[must_use]
    pub fn context(&self, label: &str) -> Option<Context> {
        self.contexts.get(&label.to_uppercase()).copied()
    }

    /// Bucket aliases in alphabetical order.
    pub fn bucket_aliases(&self) -> impl Iterator<Item = (&str, Bucket)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Context labels in alphabetical order.
    pub fn contexts(&self) -> impl Iterator<Item = (&str, Context)> {
        self.contexts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_bucket_aliases() {
        let vocab = Vocabulary::planner();
        assert_eq!(vocab.bucket("!P"), Some(Bucket::Priority));
        assert_eq!(vocab.bucket("!priority"), Some(Bucket::Priority));
        assert_eq!(vocab.bucket("!sc"), Some(Bucket::ShouldCould));
        assert_eq!(vocab.bucket("!Should_Could"), Some(Bucket::ShouldCould));
        assert_eq!(vocab.bucket("P"), None);
        assert_eq!(vocab.bucket("!high"), None);
    }

    #[test]
    fn test_planner_contexts() {
        let vocab = Vocabulary::planner();
        assert_eq!(vocab.context("uni"), Some(Context::Uni));
        assert_eq!(vocab.context("ANYWHERE"), Some(Context::Anywhere));
        assert_eq!(vocab.context("mars"), None);
        assert_eq!(vocab.contexts().count(), Context::ALL.len());
    }

    #[test]
    fn test_empty_vocabulary_matches_nothing() {
        let vocab = Vocabulary::new();
        assert_eq!(vocab.bucket("!P"), None);
        assert_eq!(vocab.context("HOME"), None);
    }

    #[test]
    fn test_custom_alias_is_normalized() {
        let vocab = Vocabulary::new().with_bucket_alias(" !now ", Bucket::Priority);
        assert_eq!(vocab.bucket("!NOW"), Some(Bucket::Priority));
        let aliases: Vec<_> = vocab.bucket_aliases().collect();
        assert_eq!(aliases, vec![("!NOW", Bucket::Priority)]);
    }
}
