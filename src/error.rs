//! Error kinds for a single tool invocation.
//!
//! Every kind is terminal: the invocation stops, nothing is written, and the
//! process exits with the kind's own exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for failures that are not a [`ToolError`].
pub const EXIT_FAILURE: u8 = 1;

/// Failure of one decode/transform/encode pipeline.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("cannot read `{0}`")]
    FileNotReadable(PathBuf, #[source] std::io::Error),

    #[error("cannot decode `{0}`")]
    DecodeFailed(PathBuf, #[source] image::ImageError),

    #[error("cannot write `{0}`")]
    FileNotWritable(PathBuf, #[source] std::io::Error),

    #[error("cannot encode {0} output")]
    EncodeFailed(&'static str, #[source] image::ImageError),

    #[error("invalid SVG markup: {0}")]
    MarkupParseFailed(String),

    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
}

impl ToolError {
    /// Process exit code for this kind. Code 2 is left to clap usage errors.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::FileNotReadable(..) => 3,
            Self::DecodeFailed(..) => 4,
            Self::FileNotWritable(..) => 5,
            Self::EncodeFailed(..) => 6,
            Self::MarkupParseFailed(_) => 7,
            Self::InvalidDimension(_) => 8,
        }
    }
}

impl From<quick_xml::Error> for ToolError {
    fn from(err: quick_xml::Error) -> Self {
        Self::MarkupParseFailed(err.to_string())
    }
}

/// Exit code for an error coming out of a subcommand.
pub fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ToolError>()
        .map_or(EXIT_FAILURE, ToolError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            ToolError::FileNotReadable(
                PathBuf::from("in.png"),
                Error::new(ErrorKind::NotFound, "missing"),
            ),
            ToolError::DecodeFailed(
                PathBuf::from("in.png"),
                image::ImageError::IoError(Error::other("bad")),
            ),
            ToolError::FileNotWritable(
                PathBuf::from("out.png"),
                Error::new(ErrorKind::PermissionDenied, "denied"),
            ),
            ToolError::EncodeFailed("png", image::ImageError::IoError(Error::other("bad"))),
            ToolError::MarkupParseFailed("no root".to_string()),
            ToolError::InvalidDimension("margin".to_string()),
        ];

        let mut codes: Vec<u8> = errors.iter().map(ToolError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
        assert!(!codes.contains(&2));
        assert!(!codes.contains(&EXIT_FAILURE));
    }

    #[test]
    fn test_display_names_path() {
        let err = ToolError::FileNotReadable(
            PathBuf::from("photo.jpg"),
            Error::new(ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("photo.jpg"));
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err = anyhow::Error::new(ToolError::InvalidDimension("x".to_string()));
        assert_eq!(exit_code_of(&err), 8);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code_of(&other), EXIT_FAILURE);
    }
}
