use draughts_rust::tui;

fn main() {
    env_logger::init();

    if let Err(err) = tui::run() {
        eprintln!("could not start game: {err}");
        std::process::exit(1);
    }
}
