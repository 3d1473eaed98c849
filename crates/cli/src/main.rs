fn main() -> Result<(), Box<dyn std::error::Error>> {
    buildscope_cli::run()
}
