use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser as ClapParser, Subcommand};

use tarn::bytecode::disasm::disassemble;
use tarn::bytecode::Compiler;
use tarn::lexer::Lexer;
use tarn::parser::Parser;
use tarn::repl;
use tarn::token::TokenKind;
use tarn::vm::Vm;

#[derive(ClapParser)]
#[command(name = "tarn")]
#[command(about = "The Tarn language toolchain", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file (or stdin), one per line
    Lex {
        /// Source file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Parse stdin and emit diagnostics as a JSON array
    Diag,

    /// Compile and execute a program from a file (or stdin)
    Run {
        /// Source file; stdin when omitted
        file: Option<PathBuf>,

        /// Disassemble the compiled chunk before running it
        #[arg(long)]
        bytecode: bool,
    },

    /// Interactive parser shell
    Parse,

    /// Interactive bytecode shell
    Repl,
}

fn main() {
    let args = Args::parse();
    match args.command {
        Command::Lex { file } => lex(file.as_deref()),
        Command::Diag => diag(),
        Command::Run { file, bytecode } => run(file.as_deref(), bytecode),
        Command::Parse => shell(repl::parser_shell()),
        Command::Repl => shell(repl::vm_shell()),
    }
}

fn read_source(file: Option<&Path>) -> String {
    let result = match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
        }
    };
    match result {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}

fn lex(file: Option<&Path>) {
    let source = read_source(file);
    let mut lexer = Lexer::new(&source);

    loop {
        let tok = lexer.next_token();
        println!(
            "{:<10} {:<10} @{}:{} ({})",
            tok.kind.to_string(),
            format!("{:?}", tok.literal),
            tok.pos.line,
            tok.pos.column,
            tok.pos.offset
        );
        if tok.kind == TokenKind::Eof {
            break;
        }
        if tok.kind == TokenKind::Illegal {
            process::exit(3);
        }
    }
}

fn diag() {
    let source = read_source(None);
    let mut parser = Parser::new(Lexer::new(&source));
    let _ = parser.parse_program();

    match serde_json::to_string(parser.diagnostics()) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("encode error: {}", err);
            process::exit(2);
        }
    }
}

fn run(file: Option<&Path>, show_bytecode: bool) {
    let source = read_source(file);

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();
    if !parser.errors().is_empty() {
        for err in parser.errors() {
            eprintln!("{}", err);
        }
        process::exit(3);
    }

    let mut compiler = Compiler::new();
    if let Err(err) = compiler.compile(&program) {
        eprintln!("compile error: {}", err);
        process::exit(4);
    }
    let (bytecode, _) = compiler.into_parts();

    if show_bytecode {
        print!("{}", disassemble(&bytecode.instructions));
    }

    let mut vm = Vm::new(bytecode);
    if let Err(err) = vm.run() {
        eprintln!("runtime error: {}", err);
        process::exit(5);
    }
}

fn shell(result: rustyline::Result<()>) {
    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
