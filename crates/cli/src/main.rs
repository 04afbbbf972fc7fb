fn main() {
    if let Err(err) = signpost_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
