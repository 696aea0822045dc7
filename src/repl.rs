use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::bytecode::op::{Instructions, Op};
use crate::bytecode::symbols::SymbolTable;
use crate::bytecode::Compiler;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::Value;
use crate::vm::{new_globals, Vm};

const PROMPT: &str = "tarn> ";
const CONTINUE_PROMPT: &str = "  ... ";

/// Interactive parser shell: reads input until brace depth returns to
/// zero, parses it, and prints either the error list or the program's
/// source rendering.
pub fn parser_shell() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("Tarn parser shell. Type code; Ctrl+D to exit.");

    let mut session = LineBuffer::new();
    loop {
        match read_input(&mut rl, &mut session)? {
            Input::Source(source) => {
                let mut parser = Parser::new(Lexer::new(&source));
                let program = parser.parse_program();
                if parser.errors().is_empty() {
                    println!("{}", program);
                } else {
                    println!("parse errors:");
                    for err in parser.errors() {
                        println!("  {}", err);
                    }
                }
            }
            Input::Eof => return Ok(()),
        }
    }
}

/// Interactive VM shell: keeps the symbol table, constant pool, and
/// globals alive across inputs, and echoes top-level expression results
/// by rewriting each `OpPop` in the fresh chunk to `OpPrint`.
pub fn vm_shell() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("Tarn VM shell. Type code; Ctrl+D to exit.");

    let mut symbols = SymbolTable::new();
    let mut constants: Vec<Value> = Vec::new();
    let mut globals = new_globals();

    let mut session = LineBuffer::new();
    loop {
        let source = match read_input(&mut rl, &mut session)? {
            Input::Source(source) => source,
            Input::Eof => return Ok(()),
        };

        let mut parser = Parser::new(Lexer::new(&source));
        let program = parser.parse_program();
        if !parser.errors().is_empty() {
            println!("parse errors:");
            for err in parser.errors() {
                println!("  {}", err);
            }
            continue;
        }

        let mut compiler = Compiler::with_state(symbols, constants);
        let compiled = compiler.compile(&program);
        let (mut bytecode, table) = compiler.into_parts();
        symbols = table;
        constants = bytecode.constants.clone();
        if let Err(err) = compiled {
            println!("compile error: {}", err);
            continue;
        }

        echo_expressions(&mut bytecode.instructions);

        let mut vm = Vm::with_globals(bytecode, globals);
        if let Err(err) = vm.run() {
            println!("runtime error: {}", err);
        }
        globals = vm.into_globals();
    }
}

/// Rewrites every top-level `OpPop` byte in `instructions` to `OpPrint`
/// so expression statements echo their value.
///
/// Walks instruction by instruction, skipping operand bytes, so an
/// operand that happens to share `OpPop`'s byte value is never touched.
/// Relies on both opcodes being operand-free.
pub fn echo_expressions(instructions: &mut Instructions) {
    let mut i = 0;
    while i < instructions.len() {
        let Some(op) = Op::from_byte(instructions[i]) else {
            break;
        };
        if op == Op::Pop {
            instructions[i] = Op::Print as u8;
        }
        i += 1 + op.operand_len();
    }
}

enum Input {
    Source(String),
    Eof,
}

/// Accumulates physical lines into one logical input, tracking brace
/// depth so block constructs can span lines.
struct LineBuffer {
    buffer: String,
    depth: usize,
}

impl LineBuffer {
    fn new() -> Self {
        LineBuffer {
            buffer: String::new(),
            depth: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        for c in line.chars() {
            match c {
                '{' => self.depth += 1,
                '}' if self.depth > 0 => self.depth -= 1,
                _ => {}
            }
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.depth = 0;
    }
}

fn read_input(rl: &mut DefaultEditor, session: &mut LineBuffer) -> rustyline::Result<Input> {
    loop {
        let prompt = if session.depth > 0 {
            CONTINUE_PROMPT
        } else {
            PROMPT
        };
        match rl.readline(prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                session.push_line(&line);
                if session.depth == 0 {
                    let source = std::mem::take(&mut session.buffer);
                    session.reset();
                    return Ok(Input::Source(source));
                }
            }
            Err(ReadlineError::Interrupted) => {
                session.reset();
            }
            Err(ReadlineError::Eof) => return Ok(Input::Eof),
            Err(err) => return Err(err),
        }
    }
}
