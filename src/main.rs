fn main() {
    if let Err(e) = kinfolio_lib::run() {
        eprintln!("kinfolio: {e}");
        std::process::exit(1);
    }
}
