fn main() {
    if let Err(e) = virebuild::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
