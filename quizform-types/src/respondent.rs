use crate::PreviewSession;

/// Trait for anything that answers a previewed form.
///
/// A preview surface implements this to feed respondent gestures into a
/// [`PreviewSession`]. It decides how the form is presented (web page,
/// terminal, scripted replay); the session enforces the answer invariants.
pub trait Respondent {
    /// The error type for this respondent.
    type Error: Into<anyhow::Error>;

    /// Record answers into `session`.
    ///
    /// # Returns
    /// * `Ok(())` once the respondent is done
    /// * `Err` on cancellation or respondent failure
    fn respond(&self, session: &mut PreviewSession) -> Result<(), Self::Error>;
}
