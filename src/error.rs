use std::fmt::{Debug, Display};

/// Every run that fails exits with this status, whatever the cause.
pub const EXIT_FAILURE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required command-line input is missing
    Usage,
    /// Malformed flag value or unknown token
    Argument,
    FileNotFound,
    /// Crop offset lies outside the source image
    OutOfBounds,
    Decode,
    Encode,
}

pub struct ClipError {
    pub kind: ErrorKind,
    pub message: String,
    /// `file:line:column` where the error was raised
    pub location: &'static str,
}

impl ClipError {
    pub fn new(kind: ErrorKind, message: String, location: &'static str) -> Self {
        Self {
            kind,
            message,
            location,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::Usage
            | ErrorKind::Argument
            | ErrorKind::FileNotFound
            | ErrorKind::OutOfBounds
            | ErrorKind::Decode
            | ErrorKind::Encode => EXIT_FAILURE,
        }
    }
}

impl Display for ClipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "clip-image: {}", self.message)
    }
}

impl Debug for ClipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("location", &self.location)
            .finish()
    }
}

impl std::error::Error for ClipError {}

#[macro_export]
macro_rules! clip_err {
    ($kind:ident, $($arg:tt)+) => {
        $crate::error::ClipError::new(
            $crate::error::ErrorKind::$kind,
            format!($($arg)+),
            concat!(file!(), ":", line!(), ":", column!()),
        )
    };
}

#[macro_export]
macro_rules! clip_try {
    ($kind:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::clip_err!($kind, "{}", err));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hides_location() {
        let err = crate::clip_err!(OutOfBounds, "offset {}x{} is outside the image", 5, 7);
        assert_eq!(err.kind, ErrorKind::OutOfBounds);
        assert_eq!(
            err.to_string(),
            "clip-image: offset 5x7 is outside the image"
        );
        assert!(err.location.starts_with("src"));
        assert!(format!("{err:?}").contains(err.location));
    }

    #[test]
    fn every_kind_exits_with_20() {
        use ErrorKind::*;
        for kind in [Usage, Argument, FileNotFound, OutOfBounds, Decode, Encode] {
            let err = ClipError::new(kind, String::new(), "here");
            assert_eq!(err.exit_code(), 20);
        }
    }

    #[test]
    fn try_converts_foreign_errors() {
        fn parse(s: &str) -> Result<u32, ClipError> {
            Ok(crate::clip_try!(Argument, s.parse::<u32>()))
        }
        assert_eq!(parse("12").unwrap(), 12);
        let err = parse("twelve").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Argument);
        assert_eq!(err.message, "invalid digit found in string");
    }
}
