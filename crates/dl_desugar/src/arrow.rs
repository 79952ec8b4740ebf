//! Arrow functions → function expressions.
//!
//! `(a) => a + 1` → `function(a) { return a + 1; }`, with `this` and
//! `arguments` hoisted into the enclosing function.

use dl_ast::{ArrowExpr, Program};
use swc_ecma_transforms_compat::es2015;
use swc_ecma_visit::{Visit, VisitWith};

use crate::pass::{with_inline_helpers, DesugarPass, PassContext};

pub const NAME: &str = "arrow-function";

pub struct ArrowFunctions;

impl DesugarPass for ArrowFunctions {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, program: &mut Program, cx: &PassContext) -> usize {
        let mut counter = ArrowCounter::default();
        program.visit_with(&mut counter);
        if counter.0 == 0 {
            return 0;
        }

        with_inline_helpers(program, cx, |program| {
            program.mutate(es2015::arrow(cx.unresolved_mark));
        });
        counter.0
    }
}

#[derive(Default)]
struct ArrowCounter(usize);

impl Visit for ArrowCounter {
    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.0 += 1;
        node.visit_children_with(self);
    }
}
