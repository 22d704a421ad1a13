mod error;

use calc_compute::numerical::{ctxt::Ctxt, eval::Eval};
use calc_parser::tree::ExprTree;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufReader, IsTerminal, Read},
};

/// Parses and evaluates the given input string, returning the results of both operations.
fn parse_eval(input: &str, tree: &mut ExprTree, ctxt: &mut Ctxt) -> Result<f64, Error> {
    tree.build_from_infix(input, ctxt.ans())?;
    let result = tree.eval(ctxt)?;
    Ok(result)
}

/// Builds and evaluates one expression, printing the result or the error report. After an
/// error the tree is cleared so the session starts the next line fresh.
fn read_eval(input: &str, tree: &mut ExprTree, ctxt: &mut Ctxt) {
    match parse_eval(input, tree, ctxt) {
        Ok(result) => println!(" = {}", result),
        Err(err) => {
            err.report_to_stderr(input);
            tree.clear();
        }
    }
}

/// Evaluates every non-empty line of a source file or piped input.
fn execute(input: &str, tree: &mut ExprTree, ctxt: &mut Ctxt) {
    for line in input.lines() {
        let line = line.trim();
        if !line.is_empty() {
            read_eval(line, tree, ctxt);
        }
    }
}

/// Prints one of the tree renderings, or a placeholder when nothing is built yet.
fn show(tree: &ExprTree, rendering: impl Display) {
    if tree.is_empty() {
        println!("(empty tree)");
    } else {
        println!("{}", rendering);
    }
}

/// Prints the supported input vocabulary and the REPL commands.
fn help() {
    println!("Supported arithmetic operators:");
    println!("\t+ - * / ^ %");
    println!("Supported constants:");
    println!("\te p ans");
    println!("Supported functions:");
    println!("\tsin() cos() tan()");
    println!("Commands:");
    println!("\tinorder | preorder | postorder   print the current tree");
    println!("\th | help                         show this help");
    println!("\tq | quit                         exit");
}

/// Handles one line of interactive input. Returns false when the user asked to quit.
fn process_line(
    rl: &mut DefaultEditor,
    tree: &mut ExprTree,
    ctxt: &mut Ctxt,
) -> Result<bool, ReadlineError> {
    let input = rl.readline(">> ")?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(true);
    }

    rl.add_history_entry(&input)?;

    match trimmed {
        "q" | "quit" => return Ok(false),
        "h" | "help" => help(),
        "inorder" => show(tree, tree.inorder()),
        "preorder" => show(tree, tree.preorder()),
        "postorder" => show(tree, tree.postorder()),
        _ => read_eval(trimmed, tree, ctxt),
    }

    Ok(true)
}

fn main() {
    let mut args = std::env::args();
    args.next();

    let mut tree = ExprTree::new();
    let mut ctxt = Ctxt::new();

    if let Some(filename) = args.next() {
        // evaluate a source file
        let mut file = BufReader::new(File::open(filename).unwrap());
        let mut input = String::new();
        file.read_to_string(&mut input).unwrap();

        execute(&input, &mut tree, &mut ctxt);
    } else if !io::stdin().is_terminal() {
        // evaluate piped stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        execute(&input, &mut tree, &mut ctxt);
    } else {
        // run the repl / interactive mode
        println!("Welcome to the expression tree calculator.");
        println!("Enter 'q' or 'quit' to quit.");
        println!("Enter 'h' or 'help' for help.");

        let mut rl = DefaultEditor::new().unwrap();

        loop {
            match process_line(&mut rl, &mut tree, &mut ctxt) {
                Ok(true) => (),
                Ok(false) => break,
                Err(err) => {
                    match err {
                        ReadlineError::Eof | ReadlineError::Interrupted => (),
                        _ => eprintln!("{}", err),
                    }
                    break;
                }
            }
        }
    }
}
