use std::ffi::OsString;

use clip_image::{
    args::{self, Command},
    error::ClipError,
    help,
};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn real_main() -> Result<(), ClipError> {
    let arguments: Vec<OsString> = std::env::args_os().collect();
    match args::parse_args(arguments)? {
        Command::Help => help::print_help(env!("CARGO_BIN_NAME")),
        Command::Clip(plan) => plan.execute()?,
    }
    Ok(())
}
