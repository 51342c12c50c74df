use std::process::ExitCode;

fn main() -> ExitCode {
    fundline_cli::run()
}
