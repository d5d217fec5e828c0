//! regex-trainer entrypoint; see [`regex_trainer::run`].

use std::process;

fn main() {
    match regex_trainer::run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}
