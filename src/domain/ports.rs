use crate::domain::model::PatternKind;
use crate::utils::error::Result;

/// Output sink for demonstrations.
pub trait Console {
    fn line(&mut self, text: &str);

    fn blank(&mut self) {
        self.line("");
    }
}

pub trait Demonstration {
    fn kind(&self) -> PatternKind;
    fn summary(&self) -> &'static str;
    fn run(&self, console: &mut dyn Console) -> Result<()>;
}
