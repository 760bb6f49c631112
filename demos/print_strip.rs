use softstrip::{to_text, Config};
use std::env;

const DARK: char = '█';
const BLANK: char = ' ';

fn print_usage() {
    println!("Usage: cargo run --example print_strip [DENSITY] [FILE]");
    println!("  DENSITY   slider level 1..=4, doubled before encoding (default 1)");
    println!("  FILE      file to encode (default: a short greeting)");
}

fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let level: usize = match args.get(1) {
        Some(arg) => match arg.parse() {
            Ok(level) => level,
            Err(_) => {
                eprintln!("Error: density must be a number, got '{}'", arg);
                print_usage();
                return;
            }
        },
        None => 1,
    };

    let data = match args.get(2) {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error: can't read {}: {}", path, e);
                return;
            }
        },
        None => b"Hello this is the softstrip.".to_vec(),
    };

    match Config::from_slider(level).encode(&data) {
        Ok(strip) => print!("{}", to_text(&strip, DARK, BLANK)),
        Err(e) => eprintln!("Error: {}", e),
    }
}
