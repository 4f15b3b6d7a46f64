//! A tour of the object-oriented building blocks the other patterns rely on,
//! expressed with structs, traits and composition.

use crate::config::toml_config::OopConfig;
use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;
use crate::utils::validation::validate_not_empty;

// ---------------------------------------------------------------------------
// Classes and constructors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Car {
    pub model: String,
    pub year: u16,
    pub price: String,
}

impl Car {
    pub fn drive(&self) -> String {
        "The Car has Started driving".to_string()
    }

    pub fn stop(&self) -> String {
        "The car has stopped".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Holder {
    pub variable: String,
}

impl Holder {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Inheritance, via a trait with provided methods plus composition
// ---------------------------------------------------------------------------

pub trait Speaker {
    fn speak(&self) -> String;

    fn eat(&self) -> String {
        "What's for dinner?".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Speaker for Person {
    fn speak(&self) -> String {
        format!("My name is {}, I am {} years old", self.name, self.age)
    }
}

/// Everything a [`Person`] has, plus an occupation.
#[derive(Debug, Clone)]
pub struct Chef {
    person: Person,
    pub occupation: String,
}

impl Chef {
    pub fn new(name: impl Into<String>, age: u32, occupation: impl Into<String>) -> Self {
        Self {
            person: Person::new(name, age),
            occupation: occupation.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn cook(&self) -> String {
        "I am cooking".to_string()
    }
}

impl Speaker for Chef {
    fn speak(&self) -> String {
        format!("I am a {}", self.occupation)
    }
}

// ---------------------------------------------------------------------------
// Overriding and polymorphism
// ---------------------------------------------------------------------------

pub trait Printable {
    fn name(&self) -> &str;
    fn print(&self) -> String;
}

#[derive(Debug, Default)]
pub struct ClassA;

impl Printable for ClassA {
    fn name(&self) -> &str {
        "Class A"
    }

    fn print(&self) -> String {
        "I am class A".to_string()
    }
}

#[derive(Debug, Default)]
pub struct ClassB;

impl Printable for ClassB {
    fn name(&self) -> &str {
        "Class B"
    }

    fn print(&self) -> String {
        "I am class B".to_string()
    }
}

// ---------------------------------------------------------------------------
// Abstraction
// ---------------------------------------------------------------------------

pub trait DocumentParser {
    fn parse_common_metadata(&self) {}

    fn parse_document(&self);
}

#[derive(Debug, Default)]
pub struct PdfParser;

impl DocumentParser for PdfParser {
    fn parse_document(&self) {}
}

#[derive(Debug, Default)]
pub struct WordParser;

impl DocumentParser for WordParser {
    fn parse_document(&self) {}
}

// ---------------------------------------------------------------------------
// Access modifiers, statics, getters and setters
// ---------------------------------------------------------------------------

pub struct Counter;

impl Counter {
    pub const INDEX: u32 = 1;
}

#[derive(Debug, Clone)]
pub struct AccessModifierExample {
    pub variable: String,
}

/// Only reachable through [`Guarded::variable`] and [`Guarded::set_variable`].
#[derive(Debug, Clone)]
pub struct Guarded {
    variable: String,
}

impl Guarded {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Rejects the empty string and keeps the previous value.
    pub fn set_variable(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate_not_empty("variable", &value)?;
        self.variable = value;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct OopOverviewDemo {
    config: OopConfig,
}

impl OopOverviewDemo {
    pub fn new(config: OopConfig) -> Self {
        Self { config }
    }
}

impl Demonstration for OopOverviewDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::OopOverview
    }

    fn summary(&self) -> &'static str {
        "Constructors, inheritance, polymorphism, abstraction and encapsulation"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let holder = Holder::new("value");
        let access = AccessModifierExample {
            variable: "value".to_string(),
        };
        tracing::debug!(
            "Constructed {:?} and {:?}; Counter::INDEX = {}",
            holder,
            access,
            Counter::INDEX
        );

        let mut guarded = Guarded::new("string");
        guarded.set_variable(self.config.setter_value.as_str())?;
        console.line(guarded.variable());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Transcript;
    use crate::utils::error::ShowcaseError;

    #[test]
    fn test_chef_overrides_speak_and_inherits_eat() {
        let chef = Chef::new("Ada", 36, "pastry chef");
        assert_eq!(chef.speak(), "I am a pastry chef");
        assert_eq!(chef.eat(), "What's for dinner?");
        assert_eq!(chef.person().speak(), "My name is Ada, I am 36 years old");
    }

    #[test]
    fn test_polymorphic_print() {
        let items: Vec<Box<dyn Printable>> = vec![Box::new(ClassA), Box::new(ClassB)];
        let printed: Vec<String> = items.iter().map(|p| p.print()).collect();
        assert_eq!(printed, vec!["I am class A", "I am class B"]);
    }

    #[test]
    fn test_setter_accepts_non_empty_value() {
        let mut guarded = Guarded::new("string");
        guarded.set_variable("different string").unwrap();
        assert_eq!(guarded.variable(), "different string");
    }

    #[test]
    fn test_setter_rejects_empty_and_keeps_prior_value() {
        let mut guarded = Guarded::new("string");
        let err = guarded.set_variable("").unwrap_err();

        assert!(matches!(err, ShowcaseError::EmptyValueError { .. }));
        assert_eq!(err.to_string(), "variable cannot be an empty string");
        assert_eq!(guarded.variable(), "string");
    }

    #[test]
    fn test_car_and_constructor() {
        let car = Car {
            model: "Corolla".to_string(),
            year: 2020,
            price: "20000".to_string(),
        };
        assert_eq!(car.drive(), "The Car has Started driving");
        assert_eq!(car.stop(), "The car has stopped");
        assert_eq!(Holder::new("value").variable, "value");
        assert_eq!(Chef::new("Ada", 36, "chef").cook(), "I am cooking");
    }

    #[test]
    fn test_polymorphic_names() {
        let items: [&dyn Printable; 2] = [&ClassA, &ClassB];
        let names: Vec<&str> = items.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Class A", "Class B"]);
    }

    #[test]
    fn test_parsers_share_the_abstract_interface() {
        let parsers: [&dyn DocumentParser; 2] = [&PdfParser, &WordParser];
        for parser in parsers {
            parser.parse_common_metadata();
            parser.parse_document();
        }
        assert_eq!(Counter::INDEX, 1);
    }

    #[test]
    fn test_demo_writes_only_the_getter_value() {
        let mut transcript = Transcript::new();
        OopOverviewDemo::default().run(&mut transcript).unwrap();
        assert_eq!(transcript.lines(), ["different string"]);
    }

    #[test]
    fn test_demo_with_empty_setter_value_fails() {
        let demo = OopOverviewDemo::new(OopConfig {
            setter_value: String::new(),
        });
        let mut transcript = Transcript::new();

        assert!(demo.run(&mut transcript).is_err());
        assert!(!transcript.lines().iter().any(|l| l == "different string"));
    }
}
