use std::env::args;
use std::io::{self, BufRead, Write};

use infix::eval;

fn main() {
    match read_args() {
        Some(input) => print_eval(&input),
        None => repl(),
    }
}

fn read_args() -> Option<String> {
    args().skip(1).reduce(|mut a, b| {
        a.push(' ');
        a.push_str(&b);
        a
    })
}

fn repl() {
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if !line.trim().is_empty() {
            print_eval(&line);
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_eval(input: &str) {
    match eval(input) {
        Ok(n) => println!("{}", n),
        Err(e) => println!("{}", e.show(input)),
    }
}
