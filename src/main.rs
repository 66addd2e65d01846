use std::{env, fs::read_to_string, process};

use decafc::{
    checker::checker::check, errors::errors::Diagnostic, lexer::lexer::tokenize,
    parser::parser::parse, source_lines,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut dump_ast = false;
    let mut file_path: Option<&str> = None;
    for arg in args.iter().skip(1) {
        if arg == "-v" {
            dump_ast = true;
        } else {
            file_path = Some(arg);
        }
    }

    let Some(file_path) = file_path else {
        eprintln!("usage: decafc [-v] <file>");
        process::exit(2);
    };

    let file_contents = match read_to_string(file_path) {
        Ok(file_contents) => file_contents,
        Err(err) => {
            eprintln!("decafc: cannot read {file_path}: {err}");
            process::exit(2);
        }
    };
    let lines = source_lines(&file_contents);

    let tokens = tokenize(&file_contents);
    let (program, mut diagnostics) = parse(tokens);

    if let Some(program) = &program {
        diagnostics.extend(check(program));
        if dump_ast && diagnostics.is_empty() {
            print!("{}", program.dump());
        }
    }

    if !diagnostics.is_empty() {
        render_all(&diagnostics, &lines);
        process::exit(1);
    }
}

fn render_all(diagnostics: &[Diagnostic], lines: &[String]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render(lines));
    }
}
