use crate::errors::PitstopResult;
use crate::models::ContextBundle;

/// The natural-language engine that turns an enriched context into a reply.
pub trait IResponseEngine: Send + Sync {
    fn generate(&self, bundle: &ContextBundle) -> PitstopResult<String>;
}
