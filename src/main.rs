fn main() {
    jobwise::start();
}
