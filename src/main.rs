use std::process;

fn main() {
    if let Err(err) = appmanifest::cli::run() {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
