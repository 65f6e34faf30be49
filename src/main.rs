fn main() {
    if let Err(err) = followcheck::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
