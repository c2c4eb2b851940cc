use fantoccini::error::{CmdError, ErrorStatus};
use pinpoint_core::SessionError;

/// Sort a WebDriver failure into miss, bad selector, or broken session.
pub(crate) fn map_cmd_error(selector: &str, err: CmdError) -> SessionError {
    if err.is_no_such_element() {
        return SessionError::NotFound(selector.to_string());
    }
    match &err {
        CmdError::Standard(wd) if matches!(wd.error, ErrorStatus::InvalidSelector) => {
            SessionError::InvalidSelector(format!("{}: {}", selector, wd.message))
        }
        _ => SessionError::Other(err.to_string()),
    }
}
