//! Fluent interface: every setter hands back the receiver so calls chain.
//!
//! [`Person`] chains by value (consuming builder), [`QueryBuilder`] chains
//! through `&mut self` so the same builder can be reused after the chain.

use crate::config::toml_config::FluentConfig;
use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<u32>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn set_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn set_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Fails with a missing-field error until first name, last name and age are all set.
    pub fn info(&self) -> Result<String> {
        let first_name = validate_required_field("first_name", &self.first_name)?;
        let last_name = validate_required_field("last_name", &self.last_name)?;
        let age = validate_required_field("age", &self.age)?;
        Ok(format!("Name: {} {}, Age: {}", first_name, last_name, age))
    }
}

/// Concatenates SQL fragments. Nothing is escaped or validated.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    query: String,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, col: &str) -> &mut Self {
        self.query.push_str(&format!("SELECT {}", col));
        self
    }

    pub fn where_clause(&mut self, col: &str, comparison: &str, col2: &str) -> &mut Self {
        self.query
            .push_str(&format!(" WHERE {} {} {};", col, comparison, col2));
        self
    }

    pub fn get(&self) -> String {
        self.query.clone()
    }
}

#[derive(Debug, Default)]
pub struct FluentDemo {
    config: FluentConfig,
}

impl FluentDemo {
    pub fn new(config: FluentConfig) -> Self {
        Self { config }
    }
}

impl Demonstration for FluentDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::FluentInterface
    }

    fn summary(&self) -> &'static str {
        "Chains setters on a person and builds a query string fragment by fragment"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let person = Person::new()
            .set_first_name(self.config.first_name.as_str())
            .set_last_name(self.config.last_name.as_str())
            .set_age(self.config.age);
        console.line(&person.info()?);

        let [col, comparison, col2] = self.config.where_parts()?;
        let mut qb = QueryBuilder::new();
        console.line(&qb.select(&self.config.select).where_clause(col, comparison, col2).get());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Transcript;
    use crate::utils::error::ShowcaseError;

    #[test]
    fn test_person_chain() {
        let person = Person::new()
            .set_first_name("John")
            .set_last_name("Doe")
            .set_age(30);
        assert_eq!(person.info().unwrap(), "Name: John Doe, Age: 30");
    }

    #[test]
    fn test_person_requires_every_field() {
        let person = Person::new().set_first_name("John").set_last_name("Doe");
        match person.info() {
            Err(ShowcaseError::MissingFieldError { field }) => assert_eq!(field, "age"),
            other => panic!("expected missing age, got {:?}", other),
        }
    }

    #[test]
    fn test_query_builder_does_not_validate() {
        let mut qb = QueryBuilder::new();
        qb.where_clause("a", "=", "b").select("*");
        assert_eq!(qb.get(), " WHERE a = b;SELECT *");
    }

    #[test]
    fn test_fluent_demo_output() {
        let mut transcript = Transcript::new();
        FluentDemo::default().run(&mut transcript).unwrap();
        assert_eq!(
            transcript.lines(),
            ["Name: John Doe, Age: 30", "SELECT id WHERE id != 1;"]
        );
    }
}
