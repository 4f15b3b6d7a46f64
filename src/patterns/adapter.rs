//! Adapter: lets an object with an incompatible interface be used where a
//! [`Target`] is expected by wrapping it and translating its calls.

use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;

/// The interface client code is written against.
pub trait Target {
    fn request(&self) -> String;
}

#[derive(Debug, Default)]
pub struct DefaultTarget;

impl Target for DefaultTarget {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

/// Useful behaviour behind an interface the client does not understand.
#[derive(Debug, Default)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

pub struct Adapter<A> {
    adaptee: A,
}

impl Adapter<Adaptee> {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter<Adaptee> {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {}", translated)
    }
}

pub fn client_code(target: &dyn Target, console: &mut dyn Console) {
    console.line(&target.request());
}

#[derive(Debug, Default)]
pub struct AdapterDemo;

impl Demonstration for AdapterDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Adapter
    }

    fn summary(&self) -> &'static str {
        "Wraps an incompatible object so it satisfies the Target interface"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.line("Client: I can work just fine with the Target objects:");
        client_code(&DefaultTarget, console);

        console.blank();

        let adaptee = Adaptee;
        console.line(
            "Client: The Adaptee class has a weird interface. See, I don't understand it:",
        );
        console.line(&format!("Adaptee: {}", adaptee.specific_request()));

        console.blank();

        console.line("Client: But I can work with it via the Adapter:");
        let adapter = Adapter::new(adaptee);
        client_code(&adapter, console);

        Ok(())
    }
}
