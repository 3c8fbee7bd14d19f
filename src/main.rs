fn main() {
    rnafusion_launcher::app::cli::run();
}
