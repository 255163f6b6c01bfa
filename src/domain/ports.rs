use crate::domain::compose::ComposeProject;
use crate::utils::error::Result;

/// Anything able to hand over an already parsed compose project.
pub trait ComposeSource {
    fn load(&self) -> Result<ComposeProject>;

    /// Name used in error messages, usually the file path.
    fn source_name(&self) -> &str;
}

impl ComposeSource for ComposeProject {
    fn load(&self) -> Result<ComposeProject> {
        Ok(self.clone())
    }

    fn source_name(&self) -> &str {
        "<memory>"
    }
}
