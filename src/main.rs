fn main() -> std::process::ExitCode {
    appverinc::app::startup::startup()
}
