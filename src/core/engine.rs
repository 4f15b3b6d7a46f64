use crate::config::toml_config::ShowcaseConfig;
use crate::core::console::{Tee, Transcript};
use crate::core::{Console, DemoOutput, PatternKind, RunReport};
use crate::patterns;
use crate::utils::error::Result;

pub struct ShowcaseEngine {
    config: ShowcaseConfig,
}

impl ShowcaseEngine {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config }
    }

    /// Runs the selected demonstrations in order, streaming their lines to
    /// `console` with a blank line between demonstrations. Stops at the first
    /// failing demonstration.
    pub fn run(&self, console: &mut dyn Console) -> Result<RunReport> {
        let kinds = self.config.selected_patterns()?;
        tracing::info!(
            "🚀 Starting showcase '{}' with {} pattern(s)",
            self.config.showcase.name,
            kinds.len()
        );

        let mut outputs = Vec::with_capacity(kinds.len());
        for (index, kind) in kinds.into_iter().enumerate() {
            if index > 0 {
                console.blank();
            }
            outputs.push(self.run_pattern(kind, console)?);
        }

        tracing::info!("✅ Showcase completed: {} demonstration(s)", outputs.len());
        Ok(RunReport {
            name: self.config.showcase.name.clone(),
            outputs,
        })
    }

    pub fn run_pattern(&self, kind: PatternKind, console: &mut dyn Console) -> Result<DemoOutput> {
        let demonstration = patterns::demonstration_for(kind, &self.config);
        tracing::debug!("▶️ Running {}: {}", kind, demonstration.summary());

        let mut transcript = Transcript::new();
        let outcome = {
            let mut tee = Tee::new(console, &mut transcript);
            demonstration.run(&mut tee)
        };

        if let Err(e) = outcome {
            tracing::debug!("{} stopped early: {}", kind, e);
            return Err(e);
        }

        tracing::debug!("{} wrote {} line(s)", kind, transcript.lines().len());
        Ok(DemoOutput {
            pattern: kind,
            lines: transcript.into_lines(),
        })
    }

    /// Runs everything into an in-memory transcript.
    pub fn run_captured(&self) -> Result<(RunReport, Transcript)> {
        let mut transcript = Transcript::new();
        let report = self.run(&mut transcript)?;
        Ok((report, transcript))
    }
}
