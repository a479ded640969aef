fn main() {
    devlog_frontend::run();
}
