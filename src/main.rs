//! glint - render highlighted code blocks to a terminal or HTML

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use glint::emit::{ansi, html};
use glint::{Highlighter, RenderOptions, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut language = String::from("bash");
    let mut theme = String::from("github-dark");
    let mut line_numbers = false;
    let mut emit_html = false;
    let mut file: Option<PathBuf> = None;

    let highlighter = Highlighter::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("glint {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--list-languages" => {
                for name in highlighter.languages() {
                    println!("{}", name);
                }
                return Ok(());
            }
            "--list-themes" => {
                for name in highlighter.themes() {
                    println!("{}", name);
                }
                return Ok(());
            }
            "--lang" | "-l" => {
                language = take_value(&args, &mut i, "--lang");
            }
            "--theme" | "-t" => {
                theme = take_value(&args, &mut i, "--theme");
            }
            "--line-numbers" | "-n" => {
                line_numbers = true;
            }
            "--html" => {
                emit_html = true;
            }
            arg if arg.starts_with('-') && arg.len() > 1 => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Try 'glint --help'");
                process::exit(2);
            }
            _ => {
                file = Some(PathBuf::from(&args[i]));
            }
        }
        i += 1;
    }

    let source = match &file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let options = RenderOptions {
        line_numbers,
        ..RenderOptions::default()
    };
    let block = highlighter.render_with(&source, &language, &theme, options)?;

    if emit_html {
        println!("{}", html::to_html(&block));
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        ansi::write_block(&mut out, &block)?;
        out.flush()?;
    }

    Ok(())
}

/// Consume the value of an option, or exit with a usage error
fn take_value(args: &[String], i: &mut usize, option: &str) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Option {} requires a value", option);
            process::exit(2);
        }
    }
}

fn print_usage() {
    println!("glint {} - syntax highlighting for code samples", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: glint [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and writes a highlighted block to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --lang <id>      Language to tokenize with (default: bash)");
    println!("  -t, --theme <id>     Theme to resolve styles from (default: github-dark)");
    println!("  -n, --line-numbers   Number output lines");
    println!("      --html           Emit an HTML fragment instead of ANSI");
    println!("      --list-languages List supported languages");
    println!("      --list-themes    List supported themes");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
}
