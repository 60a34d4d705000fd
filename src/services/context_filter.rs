use tracing::trace;

use crate::domains::context::{Context, Scope};

/// Names the local transformation chain attached to an exchange. It only
/// means something inside the process that built it.
pub const TRANSFORM_SEQUENCE: &str = "TransformSequence";

/// Removes the transformation-sequence marker from both scopes and returns
/// how many entries were dropped.
pub fn clean_context(context: &mut Context) -> usize {
    let mut removed = 0;
    for scope in [Scope::In, Scope::Out] {
        if context.remove_property(TRANSFORM_SEQUENCE, scope).is_some() {
            trace!(property = TRANSFORM_SEQUENCE, %scope, "removed non-portable context property");
            removed += 1;
        }
    }
    removed
}
