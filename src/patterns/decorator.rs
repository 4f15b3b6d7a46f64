use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;

pub trait Vehicle {
    fn drive(&self) -> String;
    fn reverse(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Driving".to_string()
    }

    fn reverse(&self) -> String {
        "Reversing".to_string()
    }
}

/// Adds a backup camera to whatever vehicle it wraps. Driving is unchanged.
#[derive(Debug)]
pub struct Toyota<V: Vehicle> {
    car: V,
}

impl<V: Vehicle> Toyota<V> {
    pub fn new(car: V) -> Self {
        Self { car }
    }

    pub fn inner(&self) -> &V {
        &self.car
    }
}

impl<V: Vehicle> Vehicle for Toyota<V> {
    fn drive(&self) -> String {
        self.car.drive()
    }

    fn reverse(&self) -> String {
        "Reversing with a backup camera".to_string()
    }
}

#[derive(Debug, Default)]
pub struct DecoratorDemo;

impl Demonstration for DecoratorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Decorator
    }

    fn summary(&self) -> &'static str {
        "Wraps a car and overrides one behaviour without touching the original"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let car = Car;
        console.line(&car.drive());

        let toyota = Toyota::new(Car);
        console.line(&toyota.reverse());

        Ok(())
    }
}
