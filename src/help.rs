use std::io::Write;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Flag;

pub fn print_help(bin_name: &str) {
    let mut stdout = std::io::stdout().lock();
    // nothing sensible to do if stdout is gone
    let _ = write_help(&mut stdout, bin_name);
}

fn write_help(out: &mut impl Write, bin_name: &str) -> std::io::Result<()> {
    writeln!(out, "Version: {}", version_string())?;
    writeln!(out, "License: {}", env!("CARGO_PKG_LICENSE"))?;
    writeln!(out, "{}.", env!("CARGO_PKG_DESCRIPTION"))?;
    writeln!(out)?;
    writeln!(out, "Usage: {bin_name} [options ...] input_file")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    for flag in Flag::VARIANTS {
        writeln!(out, "  {:24} {}", flag.synopsis(), flag.help_text())?;
    }
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(
        out,
        "  {bin_name} -x 0 -y 0 --width 1000 --height 1000 -out output.png picture.png"
    )?;
    Ok(())
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    format!("{name} {version} {cpu}")
}
