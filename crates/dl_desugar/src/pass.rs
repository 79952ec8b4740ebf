//! The transform-pass interface shared by the three desugaring passes.

use dl_ast::Program;
use swc_common::Mark;
use swc_ecma_transforms_base::helpers::{inject_helpers, Helpers, HELPERS};

/// Marks shared by every pass of one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PassContext {
    /// Context of identifiers that resolve to no binding (globals).
    pub unresolved_mark: Mark,
    /// Context of top-level bindings written by the user.
    pub top_level_mark: Mark,
}

impl PassContext {
    /// Fresh marks. Must be called inside a `swc_common::GLOBALS` scope.
    pub fn new() -> Self {
        Self {
            unresolved_mark: Mark::new(),
            top_level_mark: Mark::new(),
        }
    }
}

impl Default for PassContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A source-to-source rewrite over a whole program.
///
/// Implementations delegate the rewrite itself to SWC; they decide which
/// helper policy applies and report how many constructs they rewrote.
pub trait DesugarPass {
    /// Stable name used in logs and in [`crate::PipelineReport`].
    fn name(&self) -> &'static str;

    /// Rewrite `program` in place, returning the number of constructs
    /// rewritten. A pass with nothing to rewrite leaves `program` untouched.
    fn apply(&self, program: &mut Program, cx: &PassContext) -> usize;
}

/// Run `rewrite` with helpers (e.g. `_class_call_check`) inlined at the
/// top of the program afterwards.
pub(crate) fn with_inline_helpers(
    program: &mut Program,
    cx: &PassContext,
    rewrite: impl FnOnce(&mut Program),
) {
    HELPERS.set(&Helpers::new(false), || {
        rewrite(program);
        program.mutate(inject_helpers(cx.unresolved_mark));
    });
}

/// Run `rewrite` leaving helper references free.
///
/// The helpers are expected to come from the injected runtime (or from
/// the environment the output runs in).
pub(crate) fn with_runtime_helpers(program: &mut Program, rewrite: impl FnOnce(&mut Program)) {
    HELPERS.set(&Helpers::new(true), || rewrite(program));
}
