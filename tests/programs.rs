//! End-to-end scenarios through the whole pipeline: source text in,
//! printed output (or the first error) out.

use tarn::bytecode::symbols::SymbolTable;
use tarn::bytecode::{Bytecode, Compiler};
use tarn::lexer::Lexer;
use tarn::parser::Parser;
use tarn::value::Value;
use tarn::vm::runtime_error::RuntimeError;
use tarn::vm::{new_globals, Vm};

fn compile(source: &str) -> Bytecode {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parser errors: {:?}",
        parser.errors()
    );
    let mut compiler = Compiler::new();
    compiler.compile(&program).expect("compile error");
    compiler.into_parts().0
}

fn run(source: &str) -> String {
    let mut vm = Vm::with_output(compile(source), new_globals(), Vec::new());
    vm.run().expect("runtime error");
    String::from_utf8(vm.into_output()).expect("utf-8 output")
}

fn run_failure(source: &str) -> RuntimeError {
    let mut vm = Vm::with_output(compile(source), new_globals(), Vec::new());
    vm.run().expect_err("expected a runtime error")
}

#[test]
fn adds_two_globals() {
    assert_eq!(run("let x = 5; let y = 10; print x + y;"), "15\n");
}

#[test]
fn counts_up_in_a_while_loop() {
    assert_eq!(run("let x = 1; while (x < 4) { x = x + 1; } print x;"), "4\n");
}

#[test]
fn branches_on_comparison() {
    assert_eq!(run("if (5 < 10) { print 1; } else { print 2; }"), "1\n");
    assert_eq!(run("if (5 > 10) { print 1; } else { print 2; }"), "2\n");
}

#[test]
fn bang_truth_table() {
    assert_eq!(run("print !true; print !false; print !!5;"), "false\ntrue\ntrue\n");
}

#[test]
fn malformed_let_reports_position_of_offender() {
    let mut parser = Parser::new(Lexer::new("let 5 = 5;"));
    let program = parser.parse_program();

    assert!(program.statements.len() <= 1);
    let diagnostics = parser.diagnostics();
    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[0].column, 5);
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    // Compilation succeeds; the error is raised when OpDiv executes.
    assert_eq!(run_failure("print 10 / 0;"), RuntimeError::DivisionByZero);
}

#[test]
fn function_arguments_become_locals() {
    let source = "
        fn max(a, b) {
            if (a > b) { return a; }
            return b;
        }
        print max(3, 9);
        print max(9, 3);
    ";
    assert_eq!(run(source), "9\n9\n");
}

#[test]
fn functions_are_first_class_arguments() {
    let source = "
        fn apply(f, x) { return f(x); }
        fn double(n) { return n * 2; }
        print apply(double, 21);
    ";
    assert_eq!(run(source), "42\n");
}

#[test]
fn locals_and_loops_inside_a_function() {
    let source = "
        fn sum_to(n) {
            let total = 0;
            let i = 1;
            while (i <= n) {
                total = total + i;
                i = i + 1;
            }
            return total;
        }
        print sum_to(100);
    ";
    assert_eq!(run(source), "5050\n");
}

#[test]
fn bang_on_a_null_producing_call() {
    assert_eq!(run("let f = fn() { }; print !f();"), "true\n");
}

#[test]
fn anonymous_function_called_in_place() {
    assert_eq!(run("print fn(a, b) { return a + b; }(20, 22);"), "42\n");
}

#[test]
fn shell_state_carries_across_chunks() {
    // What the VM shell does between inputs: symbols, constants, and
    // globals all survive from one chunk to the next.
    let mut parser = Parser::new(Lexer::new("let x = 40;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    let mut compiler = Compiler::new();
    compiler.compile(&program).expect("compile");
    let (bytecode, symbols) = compiler.into_parts();

    let mut vm = Vm::with_output(bytecode.clone(), new_globals(), Vec::new());
    vm.run().expect("run");
    let globals = vm.into_globals();

    let mut parser = Parser::new(Lexer::new("print x + 2;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    let mut compiler = Compiler::with_state(symbols, bytecode.constants);
    compiler.compile(&program).expect("compile");
    let (bytecode, _) = compiler.into_parts();

    let mut vm = Vm::with_output(bytecode, globals, Vec::new());
    vm.run().expect("run");
    assert_eq!(
        String::from_utf8(vm.into_output()).expect("utf-8"),
        "42\n"
    );
}

#[test]
fn undefined_variable_fails_before_running() {
    let mut parser = Parser::new(Lexer::new("print missing;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    let mut compiler = Compiler::new();
    let err = compiler.compile(&program).expect_err("must fail");
    assert_eq!(err.to_string(), "undefined variable missing");
}

#[test]
fn compiled_functions_print_their_shape() {
    assert_eq!(
        run("fn add(a, b) { return a + b; } print add;"),
        "compiled fn[params=2 locals=2]\n"
    );
}

#[test]
fn global_slots_default_to_null() {
    // A fresh globals array reads as null everywhere.
    let globals = new_globals();
    assert_eq!(globals[0], Value::Null);
    assert_eq!(globals[65535], Value::Null);
}

#[test]
fn empty_symbol_table_resolves_nothing() {
    let table = SymbolTable::new();
    assert!(table.resolve("anything").is_none());
}
