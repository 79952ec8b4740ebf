//! Generator functions → explicit state machines.
//!
//! `function* g() { yield 1; }` becomes a plain function returning
//! `_ts_generator(this, function(_state) { switch (_state.label) { ... } })`.
//! The helpers (`_ts_generator`, `_ts_values`, `_define_property`) are left
//! as free references; [`crate::runtime::Runtime::generator`] defines them.

use dl_ast::{Function, Program};
use swc_common::comments::NoopComments;
use swc_ecma_transforms_compat::es2015;
use swc_ecma_visit::{Visit, VisitWith};

use crate::pass::{with_runtime_helpers, DesugarPass, PassContext};

pub const NAME: &str = "generator";

pub struct Generators;

impl DesugarPass for Generators {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, program: &mut Program, cx: &PassContext) -> usize {
        let mut counter = GeneratorCounter::default();
        program.visit_with(&mut counter);
        if counter.0 == 0 {
            return 0;
        }

        with_runtime_helpers(program, |program| {
            program.mutate(es2015::generator::generator(cx.unresolved_mark, NoopComments));
        });
        counter.0
    }
}

#[derive(Default)]
struct GeneratorCounter(usize);

impl Visit for GeneratorCounter {
    fn visit_function(&mut self, node: &Function) {
        if node.is_generator {
            self.0 += 1;
        }
        node.visit_children_with(self);
    }
}
