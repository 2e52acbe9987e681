use std::io::{self, Write};
use std::process::ExitCode;

use alidns_cli::cli::{run, Deps};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    if let Err(err) = run(args, Deps::new(&mut stdout, &mut stderr)).await {
        let _ = writeln!(io::stderr(), "{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
