fn main() {
    if let Err(e) = drills::run() {
        drills::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
