//! Build errors for the recognizer builder.

use thiserror::Error;

/// Errors that can occur when building a recognizer.
///
/// A missing collaborator is a hard initialization fault: building anyway
/// would turn every later dispatch into a silent no-op and mask the
/// configuration error.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Combo catalog not provided. Call .catalog(...) before .build()")]
    MissingCatalog,

    #[error("Symbol highlighter not provided. Call .highlighter(...) before .build()")]
    MissingHighlighter,

    #[error("Action dispatcher not provided. Call .dispatcher(...) before .build()")]
    MissingDispatcher,

    #[error("Speed controller not provided. Call .speed_controller(...) before .build()")]
    MissingSpeedController,

    #[error("Camera rig not provided. Call .camera(...) before .build()")]
    MissingCamera,
}
