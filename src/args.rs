//! Command-line argument parsing.
//!
//! The flag syntax is unconventional (`-out` and `/?` next to `--width`),
//! so the parser is hand-rolled instead of using an argument parsing library.

use std::{
    ffi::{OsStr, OsString},
    num::NonZeroU32,
    path::PathBuf,
};

use crate::{
    arg_parse_err::ArgParseErr,
    arg_parsers::{parse_extent, parse_offset},
    clip_err,
    error::ClipError,
    plan::ClipPlan,
};

use strum::{EnumString, IntoStaticStr, VariantArray};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    #[strum(to_string = "--help", serialize = "-h", serialize = "/?")]
    Help,
    #[strum(to_string = "--verbose", serialize = "-v")]
    Verbose,
    #[strum(to_string = "-x")]
    X,
    #[strum(to_string = "-y")]
    Y,
    #[strum(to_string = "--width")]
    Width,
    #[strum(to_string = "--height")]
    Height,
    #[strum(to_string = "--output", serialize = "-out")]
    Output,
}

impl Flag {
    pub fn needs_value(&self) -> bool {
        match self {
            Flag::Help => false,
            Flag::Verbose => false,
            Flag::X => true,
            Flag::Y => true,
            Flag::Width => true,
            Flag::Height => true,
            Flag::Output => true,
        }
    }

    /// All spellings of the flag together with its value placeholder, for the help screen
    pub fn synopsis(&self) -> &'static str {
        match self {
            Flag::Help => "-h, --help, /?",
            Flag::Verbose => "-v, --verbose",
            Flag::X => "-x <x>",
            Flag::Y => "-y <y>",
            Flag::Width => "--width <width>",
            Flag::Height => "--height <height>",
            Flag::Output => "-out, --output <path>",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Flag::Help => "print this help and exit",
            Flag::Verbose => "accepted for compatibility, has no effect",
            Flag::X => "left edge of the crop rectangle, default 0",
            Flag::Y => "top edge of the crop rectangle, default 0",
            Flag::Width => "width of the crop rectangle, default is up to the right edge",
            Flag::Height => "height of the crop rectangle, default is up to the bottom edge",
            Flag::Output => "where to write the result, default is to overwrite the input",
        }
    }
}

/// What the binary should do after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clip(ClipPlan),
}

/// Values collected while walking the arguments.
/// The input path may well be the last argument, so the plan is only built at the end.
#[derive(Debug, Default)]
struct Collected {
    input: Option<OsString>,
    output: Option<OsString>,
    x: u32,
    y: u32,
    width: Option<NonZeroU32>,
    height: Option<NonZeroU32>,
    verbose: bool,
}

/// `args[0]` is the path to the binary and is skipped.
pub fn parse_args(args: Vec<OsString>) -> Result<Command, ClipError> {
    if args.len() <= 1 {
        return Ok(Command::Help);
    }

    let mut collected = Collected::default();

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if let Some(flag) = as_flag(&raw_arg) {
            if flag == Flag::Help {
                return Ok(Command::Help);
            }
            let value = if flag.needs_value() {
                Some(iter.next().ok_or_else(|| {
                    clip_err!(
                        Argument,
                        "argument requires a value: {}",
                        raw_arg.to_string_lossy()
                    )
                })?)
            } else {
                None
            };
            collected.apply_flag(flag, &raw_arg, value)?;
        } else if looks_like_flag(&raw_arg) {
            return Err(clip_err!(
                Argument,
                "unknown argument `{}'",
                raw_arg.to_string_lossy()
            ));
        } else if let Some(previous) = collected.input.replace(raw_arg) {
            // only the last positional argument is the input file
            return Err(clip_err!(
                Argument,
                "unknown argument `{}'",
                previous.to_string_lossy()
            ));
        }
    }

    collected.into_plan().map(Command::Clip)
}

impl Collected {
    fn apply_flag(
        &mut self,
        flag: Flag,
        raw_arg: &OsStr,
        value: Option<OsString>,
    ) -> Result<(), ClipError> {
        let value = value.unwrap_or_default();
        self.apply_flag_inner(flag, &value).map_err(|arg_err| {
            // report the spelling the user actually typed
            clip_err!(
                Argument,
                "{}",
                arg_err.display_with_arg(&raw_arg.to_string_lossy(), &value)
            )
        })
    }

    /// Currently this can only fail due to value parsing.
    /// Split into its own function due to lack of try{} blocks on stable Rust.
    fn apply_flag_inner(&mut self, flag: Flag, value: &OsStr) -> Result<(), ArgParseErr> {
        match flag {
            Flag::Help => {}
            Flag::Verbose => self.verbose = true,
            Flag::X => self.x = parse_offset(value)?,
            Flag::Y => self.y = parse_offset(value)?,
            Flag::Width => self.width = Some(parse_extent(value)?),
            Flag::Height => self.height = Some(parse_extent(value)?),
            Flag::Output => self.output = Some(value.to_owned()),
        };
        Ok(())
    }

    fn into_plan(self) -> Result<ClipPlan, ClipError> {
        let input = match self.input {
            Some(input) if !input.is_empty() => PathBuf::from(input),
            _ => return Err(clip_err!(Usage, "required argument is missing")),
        };
        let output = match self.output {
            Some(output) if !output.is_empty() => PathBuf::from(output),
            _ => input.clone(),
        };
        Ok(ClipPlan {
            input,
            output,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            verbose: self.verbose,
        })
    }
}

fn as_flag(arg: &OsStr) -> Option<Flag> {
    arg.to_str().and_then(|s| s.parse::<Flag>().ok())
}

/// A lone `-` is left alone so that it can be a filename
fn looks_like_flag(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.first() == Some(&b'-') && bytes.len() > 1
}
