fn main() {
    if let Err(err) = statcard::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
