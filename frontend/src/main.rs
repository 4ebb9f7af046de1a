fn main() {
    vacation_frontend::start();
}
