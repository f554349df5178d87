fn main() {
    workerkit::app::cli::run();
}
