use crate::core::PatternKind;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{
    validate_exact_len, validate_non_empty_list, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub showcase: ShowcaseSection,
    pub strategy: StrategyConfig,
    pub observer: ObserverConfig,
    pub fluent: FluentConfig,
    pub oop: OopConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSection {
    pub name: String,
    /// Run order. `None` runs every pattern in canonical order.
    pub patterns: Option<Vec<String>>,
}

impl Default for ShowcaseSection {
    fn default() -> Self {
        Self {
            name: "design-patterns".to_string(),
            patterns: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub data: Vec<String>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            data: ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub temperatures: Vec<i32>,
    pub fan_threshold: i32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            temperatures: vec![20, 30],
            fan_threshold: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluentConfig {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub select: String,
    pub where_clause: Vec<String>,
}

impl Default for FluentConfig {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: 30,
            select: "id".to_string(),
            where_clause: vec!["id".to_string(), "!=".to_string(), "1".to_string()],
        }
    }
}

impl FluentConfig {
    /// Column, comparison, and right-hand side of the where clause.
    pub fn where_parts(&self) -> Result<[&str; 3]> {
        validate_exact_len("fluent.where_clause", &self.where_clause, 3)?;
        Ok([
            self.where_clause[0].as_str(),
            self.where_clause[1].as_str(),
            self.where_clause[2].as_str(),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OopConfig {
    pub setter_value: String,
}

impl Default for OopConfig {
    fn default() -> Self {
        Self {
            setter_value: "different string".to_string(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShowcaseError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            ShowcaseError::ConfigParseError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn selected_patterns(&self) -> Result<Vec<PatternKind>> {
        match &self.showcase.patterns {
            Some(names) => names.iter().map(|name| name.parse()).collect(),
            None => Ok(PatternKind::ALL.to_vec()),
        }
    }

    pub fn select_patterns(&mut self, names: Vec<String>) {
        self.showcase.patterns = Some(names);
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("showcase.name", &self.showcase.name)?;

        if let Some(names) = &self.showcase.patterns {
            validate_non_empty_list("showcase.patterns", names)?;
        }
        self.selected_patterns()?;

        validate_non_empty_list("strategy.data", &self.strategy.data)?;
        self.fluent.where_parts()?;

        Ok(())
    }
}

impl Validate for ShowcaseConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
