/// Lightweight intent classification collaborator.
///
/// Optional everywhere: scorers and flow engines built without one degrade
/// to keyword-only behavior.
pub trait IIntentClassifier: Send + Sync {
    /// Intent label for `text`, or `None` when no intent is recognized.
    fn classify(&self, text: &str) -> Option<String>;
}
