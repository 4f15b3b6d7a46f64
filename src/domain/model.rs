use crate::utils::error::ShowcaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Adapter,
    Decorator,
    Facade,
    FluentInterface,
    Observer,
    Strategy,
    TemplateMethod,
    OopOverview,
}

impl PatternKind {
    /// Canonical run order.
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Adapter,
        PatternKind::Decorator,
        PatternKind::Facade,
        PatternKind::FluentInterface,
        PatternKind::Observer,
        PatternKind::Strategy,
        PatternKind::TemplateMethod,
        PatternKind::OopOverview,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Adapter => "adapter",
            PatternKind::Decorator => "decorator",
            PatternKind::Facade => "facade",
            PatternKind::FluentInterface => "fluent-interface",
            PatternKind::Observer => "observer",
            PatternKind::Strategy => "strategy",
            PatternKind::TemplateMethod => "template-method",
            PatternKind::OopOverview => "oop-overview",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "adapter" => Ok(PatternKind::Adapter),
            "decorator" => Ok(PatternKind::Decorator),
            "facade" => Ok(PatternKind::Facade),
            "fluent-interface" | "fluent" => Ok(PatternKind::FluentInterface),
            "observer" | "observor" => Ok(PatternKind::Observer),
            "strategy" => Ok(PatternKind::Strategy),
            "template-method" | "template" => Ok(PatternKind::TemplateMethod),
            "oop-overview" | "oop" => Ok(PatternKind::OopOverview),
            _ => Err(ShowcaseError::UnknownPatternError {
                name: s.to_string(),
            }),
        }
    }
}

/// Everything one demonstration wrote to its console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoOutput {
    pub pattern: PatternKind,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub name: String,
    pub outputs: Vec<DemoOutput>,
}

impl RunReport {
    pub fn patterns(&self) -> Vec<PatternKind> {
        self.outputs.iter().map(|o| o.pattern).collect()
    }

    pub fn output_for(&self, kind: PatternKind) -> Option<&DemoOutput> {
        self.outputs.iter().find(|o| o.pattern == kind)
    }

    pub fn to_json_pretty(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
