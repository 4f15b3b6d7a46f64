//! Template method: `make_pizza` fixes the order of the five steps and
//! implementors only supply the toppings.

use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;

pub trait Pizza {
    fn make_pizza(&self, console: &mut dyn Console) {
        self.prepare_dough(console);
        self.add_tomato_sauce(console);
        self.add_cheese(console);
        self.add_toppings(console);
        self.bake_pizza(console);
    }

    fn prepare_dough(&self, console: &mut dyn Console) {
        console.line("Preparing dough");
    }

    fn add_tomato_sauce(&self, console: &mut dyn Console) {
        console.line("Adding tomato sauce");
    }

    fn add_cheese(&self, console: &mut dyn Console) {
        console.line("Adding cheese");
    }

    fn add_toppings(&self, console: &mut dyn Console);

    fn bake_pizza(&self, console: &mut dyn Console) {
        console.line("Baking pizza");
    }
}

#[derive(Debug, Default)]
pub struct PepperoniPizza;

impl Pizza for PepperoniPizza {
    fn add_toppings(&self, console: &mut dyn Console) {
        console.line("Adding pepperoni");
    }
}

#[derive(Debug, Default)]
pub struct VegetarianPizza;

impl Pizza for VegetarianPizza {
    fn add_toppings(&self, console: &mut dyn Console) {
        console.line("Adding vegetables");
    }
}

#[derive(Debug, Default)]
pub struct TemplateMethodDemo;

impl Demonstration for TemplateMethodDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::TemplateMethod
    }

    fn summary(&self) -> &'static str {
        "Fixes the pizza-making steps and lets each pizza choose its toppings"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let pizzas: [&dyn Pizza; 2] = [&PepperoniPizza, &VegetarianPizza];
        for pizza in pizzas {
            pizza.make_pizza(console);
        }
        Ok(())
    }
}
