//! Runtime injection by AST splice.
//!
//! The runtime is parsed into the same source map as the program, as a file
//! of its own, and its top-level statements are prepended to the program
//! body. Injected nodes keep spans into the runtime file, so a source map
//! built after printing maps them to the runtime and leaves the mappings of
//! the original code intact.

use dl_ast::Program;
use dl_parser::{parse_module_into, parse_script_into, ParseError};
use swc_common::{sync::Lrc, SourceMap};
use tracing::{info, trace};

use crate::runtime::Runtime;

/// Prepend the statements of `runtime_text` to `target`'s body.
///
/// Returns the number of statements injected. An empty `runtime_text` is a
/// no-op. The runtime is parsed with the goal of `target` (script or
/// module); on a parse error `target` is left unmodified.
///
/// Not idempotent: injecting twice leaves two copies of the runtime.
///
/// The runtime goes in front of everything, directives included. A script
/// that starts with `"use strict"` keeps that statement, but it is no
/// longer a directive once the runtime precedes it, so the script's own
/// code no longer runs in strict mode.
pub fn inject_runtime(
    runtime_text: &str,
    runtime_source_id: &str,
    source_map: &Lrc<SourceMap>,
    target: &mut Program,
) -> Result<usize, ParseError> {
    if runtime_text.is_empty() {
        trace!(source = runtime_source_id, "empty runtime, nothing to inject");
        return Ok(0);
    }

    let injected = match target {
        Program::Module(module) => {
            let runtime = parse_module_into(source_map, runtime_text, runtime_source_id, None)?;
            let count = runtime.body.len();
            module.body.splice(0..0, runtime.body);
            count
        }
        Program::Script(script) => {
            let runtime = parse_script_into(source_map, runtime_text, runtime_source_id, None)?;
            let count = runtime.body.len();
            script.body.splice(0..0, runtime.body);
            count
        }
    };

    info!(
        source = runtime_source_id,
        statements = injected,
        "injected runtime"
    );
    Ok(injected)
}

/// [`inject_runtime`] for a [`Runtime`].
pub fn inject(
    runtime: &Runtime,
    source_map: &Lrc<SourceMap>,
    target: &mut Program,
) -> Result<usize, ParseError> {
    inject_runtime(&runtime.text, &runtime.source_id, source_map, target)
}

#[cfg(test)]
mod tests {
    use dl_ast::{Decl, Expr, ModuleItem, SourceType, Stmt};
    use dl_parser::parse;
    use swc_common::{EqIgnoreSpan, Spanned};

    use super::*;

    fn top_level_items(program: &Program) -> Vec<ModuleItem> {
        match program {
            Program::Module(m) => m.body.clone(),
            Program::Script(s) => s.body.iter().cloned().map(ModuleItem::Stmt).collect(),
        }
    }

    fn parse_target(source: &str, source_type: SourceType) -> (Program, Lrc<SourceMap>) {
        let parsed = parse(source, "input.js", source_type).unwrap();
        (parsed.program, parsed.source_map)
    }

    fn stmts(program: &Program) -> Vec<Stmt> {
        top_level_items(program)
            .into_iter()
            .map(|item| match item {
                ModuleItem::Stmt(s) => s,
                ModuleItem::ModuleDecl(d) => panic!("unexpected module declaration {d:?}"),
            })
            .collect()
    }

    fn is_fn_decl(stmt: &Stmt, name: &str) -> bool {
        matches!(stmt, Stmt::Decl(Decl::Fn(f)) if &*f.ident.sym == name)
    }

    fn is_call_of(stmt: &Stmt, callee: &str) -> bool {
        let Stmt::Expr(expr) = stmt else {
            return false;
        };
        let Expr::Call(call) = &*expr.expr else {
            return false;
        };
        match call.callee.as_expr().map(|e| &**e) {
            Some(Expr::Ident(ident)) => &*ident.sym == callee,
            Some(Expr::Member(member)) => matches!(&*member.obj, Expr::Ident(o) if &*o.sym == callee),
            _ => false,
        }
    }

    #[test]
    fn empty_runtime_is_a_no_op() {
        let (mut program, cm) = parse_target("console.log(1)", SourceType::Script);
        let before = program.clone();

        let injected = inject_runtime("", "runtime.js", &cm, &mut program).unwrap();

        assert_eq!(injected, 0);
        assert_eq!(program, before);
        let body = stmts(&program);
        assert_eq!(body.len(), 1);
        assert!(is_call_of(&body[0], "console"));
    }

    #[test]
    fn runtime_statements_come_first() {
        let (mut program, cm) = parse_target("foo()", SourceType::Script);

        let injected = inject_runtime("function helper(){}", "runtime.js", &cm, &mut program).unwrap();

        assert_eq!(injected, 1);
        let body = stmts(&program);
        assert_eq!(body.len(), 2);
        assert!(is_fn_decl(&body[0], "helper"));
        assert!(is_call_of(&body[1], "foo"));
    }

    #[test]
    fn result_is_runtime_followed_by_program() {
        let source = "var a = 1;\nfunction b() { return a; }\nb();";
        let runtime = "function one() {}\nvar two = 2;\nfunction three() {}";
        let (mut program, cm) = parse_target(source, SourceType::Module);
        let before = top_level_items(&program);

        let expected_runtime = parse(runtime, "other.js", SourceType::Module)
            .map(|p| top_level_items(&p.program))
            .unwrap();

        let injected = inject_runtime(runtime, "runtime.js", &cm, &mut program).unwrap();
        let after = top_level_items(&program);

        assert_eq!(injected, 3);
        assert_eq!(after.len(), expected_runtime.len() + before.len());
        assert!(after[..injected].eq_ignore_span(&expected_runtime[..]));
        assert_eq!(&after[injected..], &before[..]);
    }

    #[test]
    fn runtime_goes_before_directives() {
        let (mut program, cm) = parse_target("\"use strict\";\nfoo();", SourceType::Script);

        inject_runtime("function helper(){}", "runtime.js", &cm, &mut program).unwrap();

        let body = stmts(&program);
        assert!(is_fn_decl(&body[0], "helper"));
        assert!(body[1].is_use_strict());
        assert!(is_call_of(&body[2], "foo"));
    }

    #[test]
    fn injecting_twice_duplicates_the_runtime() {
        let (mut program, cm) = parse_target("foo();", SourceType::Script);

        inject_runtime("function helper(){}", "runtime.js", &cm, &mut program).unwrap();
        inject_runtime("function helper(){}", "runtime.js", &cm, &mut program).unwrap();

        let body = stmts(&program);
        assert_eq!(body.len(), 3);
        assert!(is_fn_decl(&body[0], "helper"));
        assert!(is_fn_decl(&body[1], "helper"));
        assert!(is_call_of(&body[2], "foo"));
    }

    #[test]
    fn injected_nodes_keep_their_source_identity() {
        let (mut program, cm) = parse_target("foo();\nbar();", SourceType::Script);

        let injected = inject_runtime(
            "function helper(){}\nfunction other(){}",
            "runtime.js",
            &cm,
            &mut program,
        )
        .unwrap();

        let files: Vec<String> = stmts(&program)
            .iter()
            .map(|s| cm.span_to_filename(s.span()).to_string())
            .collect();
        assert_eq!(files[..injected], ["runtime.js", "runtime.js"]);
        assert_eq!(files[injected..], ["input.js", "input.js"]);
    }

    #[test]
    fn malformed_runtime_leaves_program_untouched() {
        let (mut program, cm) = parse_target("foo();", SourceType::Script);
        let before = program.clone();

        let err = inject_runtime("function helper(", "runtime.js", &cm, &mut program).unwrap_err();

        assert_eq!(err.file, "runtime.js");
        assert_eq!(program, before);
    }

    #[test]
    fn runtime_follows_the_goal_of_the_target() {
        // Module syntax in the runtime only parses against a module target.
        let (mut script, cm) = parse_target("foo();", SourceType::Script);
        assert!(inject_runtime("export function helper(){}", "runtime.js", &cm, &mut script).is_err());

        let (mut module, cm) = parse_target("foo();", SourceType::Module);
        let injected =
            inject_runtime("export function helper(){}", "runtime.js", &cm, &mut module).unwrap();
        assert_eq!(injected, 1);
        assert!(matches!(top_level_items(&module)[0], ModuleItem::ModuleDecl(_)));
    }

    #[test]
    fn bundled_runtime_parses_in_both_goals() {
        let runtime = Runtime::generator();
        for source_type in [SourceType::Script, SourceType::Module] {
            let (mut program, cm) = parse_target("foo();", source_type);
            let injected = inject(&runtime, &cm, &mut program).unwrap();
            assert_eq!(injected, 3);
        }
    }
}
