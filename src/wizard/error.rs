//! Upload wizard error types
//!
//! Every variant is a client-side validation rejection: it blocks one
//! transition or edit and carries the message shown to the user.

use thiserror::Error;

use super::types::WizardStep;

/// Errors raised by the upload wizard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// File selection larger than the type-determined cap
    #[error("Maximum {}", track_limit(.max))]
    TooManyFiles { max: usize, selected: usize },

    /// Files or navigation before single/album was chosen
    #[error("Choose a single or an album first")]
    TypeNotSelected,

    /// Advancing from `files` with nothing selected
    #[error("Select at least one track")]
    NoFiles,

    #[error("Artist name is required")]
    MissingArtist,

    #[error("Track title is required")]
    MissingTrackTitle,

    #[error("Album name is required")]
    MissingAlbumName,

    #[error("Invalid release date '{0}', expected YYYY-MM-DD")]
    InvalidReleaseDate(String),

    /// Removing a file that is not held
    #[error("No file at position {0}")]
    NoSuchFile(usize),

    /// Action issued on a step that does not offer it
    #[error("Not available on the {actual} step (expected {expected})")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Cannot go back from the {0} step")]
    NoPreviousStep(WizardStep),

    /// Edits or navigation after the submission was produced
    #[error("Upload already finished")]
    Finished,
}

fn track_limit(max: &usize) -> String {
    if *max == 1 {
        "1 track".to_string()
    } else {
        format!("{} tracks", max)
    }
}

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_messages() {
        let err = WizardError::TooManyFiles { max: 1, selected: 2 };
        assert_eq!(err.to_string(), "Maximum 1 track");

        let err = WizardError::TooManyFiles { max: 25, selected: 26 };
        assert_eq!(err.to_string(), "Maximum 25 tracks");
    }

    #[test]
    fn test_wrong_step_message() {
        let err = WizardError::WrongStep {
            expected: WizardStep::Files,
            actual: WizardStep::Info,
        };
        assert_eq!(err.to_string(), "Not available on the info step (expected files)");
    }
}
