//! Classes → constructor functions.
//!
//! Class declarations and expressions become constructor functions with
//! their methods defined on the prototype. The helpers the rewrite calls
//! (`_class_call_check`, `_create_class`, `_inherits`, ...) are inlined at
//! the top of the program.

use dl_ast::{Class, Program};
use swc_ecma_transforms_compat::es2015;
use swc_ecma_visit::{Visit, VisitWith};

use crate::pass::{with_inline_helpers, DesugarPass, PassContext};

pub const NAME: &str = "class";

#[derive(Default)]
pub struct Classes {
    pub config: es2015::classes::Config,
}

impl DesugarPass for Classes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, program: &mut Program, cx: &PassContext) -> usize {
        let mut counter = ClassCounter::default();
        program.visit_with(&mut counter);
        if counter.0 == 0 {
            return 0;
        }

        with_inline_helpers(program, cx, |program| {
            program.mutate(es2015::classes(self.config));
        });
        counter.0
    }
}

#[derive(Default)]
struct ClassCounter(usize);

impl Visit for ClassCounter {
    fn visit_class(&mut self, node: &Class) {
        self.0 += 1;
        node.visit_children_with(self);
    }
}
