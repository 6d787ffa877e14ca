use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = fluent_regex::run() {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
