//! Fixed-order composition of the desugaring passes.

use dl_ast::{Options, Program};
use swc_common::{Globals, GLOBALS};
use swc_ecma_transforms_base::{fixer::fixer, hygiene::hygiene, resolver};
use tracing::debug;

use crate::{
    arrow::ArrowFunctions,
    class::Classes,
    generator::{self, Generators},
    pass::{DesugarPass, PassContext},
};

/// One pass execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRun {
    pub name: &'static str,
    pub rewritten: usize,
}

/// What a pipeline run did, in pass order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub runs: Vec<PassRun>,
}

impl PipelineReport {
    /// Constructs rewritten by the pass called `name` (0 if it did not run).
    pub fn rewritten(&self, name: &str) -> usize {
        self.runs
            .iter()
            .filter(|run| run.name == name)
            .map(|run| run.rewritten)
            .sum()
    }

    pub fn ran(&self, name: &str) -> bool {
        self.runs.iter().any(|run| run.name == name)
    }

    pub fn generators_rewritten(&self) -> bool {
        self.rewritten(generator::NAME) > 0
    }
}

/// An ordered list of passes run over one program.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn DesugarPass>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow functions, then classes, then generators, each only if
    /// enabled in `options`.
    pub fn from_options(options: &Options) -> Self {
        let mut pipeline = Self::new();
        if options.arrow_function {
            pipeline.push(ArrowFunctions);
        }
        if options.class {
            pipeline.push(Classes::default());
        }
        if options.generator {
            pipeline.push(Generators);
        }
        pipeline
    }

    pub fn push(&mut self, pass: impl DesugarPass + 'static) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Run every pass over `program`.
    ///
    /// Scope analysis runs before the first pass; renaming of colliding
    /// identifiers and parenthesis fixing run after the last. An empty
    /// pipeline leaves the program untouched.
    pub fn run(&self, program: &mut Program) -> PipelineReport {
        if self.is_empty() {
            return PipelineReport::default();
        }

        GLOBALS.set(&Globals::new(), || {
            let cx = PassContext::new();
            program.mutate(resolver(cx.unresolved_mark, cx.top_level_mark, false));

            let mut report = PipelineReport::default();
            for pass in &self.passes {
                let rewritten = pass.apply(program, &cx);
                debug!(pass = pass.name(), rewritten, "applied pass");
                report.runs.push(PassRun {
                    name: pass.name(),
                    rewritten,
                });
            }

            program.mutate(hygiene());
            program.mutate(fixer(None));
            report
        })
    }
}
