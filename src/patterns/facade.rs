//! Facade: one entry point drives several unrelated subsystems in a fixed
//! order so callers never touch them directly.

use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;

pub trait LightSystem {
    fn turn_on(&self, console: &mut dyn Console);
    fn turn_off(&self, console: &mut dyn Console);
}

pub trait SecuritySystem {
    fn arm(&self, console: &mut dyn Console);
    fn disarm(&self, console: &mut dyn Console);
}

#[derive(Debug, Default)]
pub struct HomeLights;

impl LightSystem for HomeLights {
    fn turn_on(&self, console: &mut dyn Console) {
        console.line("Lights turned on");
    }

    fn turn_off(&self, console: &mut dyn Console) {
        console.line("Lights turned off");
    }
}

#[derive(Debug, Default)]
pub struct HomeSecurity;

impl SecuritySystem for HomeSecurity {
    fn arm(&self, console: &mut dyn Console) {
        console.line("Security system armed");
    }

    fn disarm(&self, console: &mut dyn Console) {
        console.line("Security system disarmed");
    }
}

pub struct HomeAutomationFacade<L: LightSystem, S: SecuritySystem> {
    light_system: L,
    security_system: S,
}

impl<L: LightSystem, S: SecuritySystem> HomeAutomationFacade<L, S> {
    pub fn new(light_system: L, security_system: S) -> Self {
        Self {
            light_system,
            security_system,
        }
    }

    pub fn good_morning(&self, console: &mut dyn Console) {
        self.light_system.turn_on(console);
        self.security_system.disarm(console);
    }

    pub fn good_night(&self, console: &mut dyn Console) {
        self.light_system.turn_off(console);
        self.security_system.arm(console);
    }
}

#[derive(Debug, Default)]
pub struct FacadeDemo;

impl Demonstration for FacadeDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Facade
    }

    fn summary(&self) -> &'static str {
        "Drives lights and security through a single home-automation facade"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let home = HomeAutomationFacade::new(HomeLights, HomeSecurity);
        home.good_morning(console);
        home.good_night(console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Transcript;

    #[test]
    fn test_good_morning_order() {
        let home = HomeAutomationFacade::new(HomeLights, HomeSecurity);
        let mut transcript = Transcript::new();
        home.good_morning(&mut transcript);
        assert_eq!(
            transcript.lines(),
            ["Lights turned on", "Security system disarmed"]
        );
    }

    #[test]
    fn test_facade_demo_output() {
        let mut transcript = Transcript::new();
        FacadeDemo.run(&mut transcript).unwrap();
        assert_eq!(
            transcript.lines(),
            [
                "Lights turned on",
                "Security system disarmed",
                "Lights turned off",
                "Security system armed",
            ]
        );
    }
}
