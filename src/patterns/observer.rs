//! Observer: a subject owns some state and pushes every change to the
//! observers registered with it.

use crate::config::toml_config::ObserverConfig;
use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;

pub trait Observer {
    fn name(&self) -> &str;
    fn update(&self, temperature: i32, console: &mut dyn Console) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

pub trait Subject {
    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId;
    fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer>>;
    fn notify_observers(&self, console: &mut dyn Console) -> Result<()>;
}

#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    temperature: Option<i32>,
    next_id: usize,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(&self) -> Option<i32> {
        self.temperature
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_temperature(&mut self, temp: i32, console: &mut dyn Console) -> Result<()> {
        console.line(&format!(
            "WeatherStation: new temperature measurement: {}",
            temp
        ));
        self.temperature = Some(temp);
        self.notify_observers(console)
    }
}

impl Subject for WeatherStation {
    fn register_observer(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        tracing::debug!("Registering observer {} as {:?}", observer.name(), id);
        self.observers.push((id, observer));
        id
    }

    fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn Observer>> {
        let index = self.observers.iter().position(|(candidate, _)| *candidate == id)?;
        let (_, observer) = self.observers.remove(index);
        tracing::debug!("Removed observer {}", observer.name());
        Some(observer)
    }

    /// Synchronous and in registration order; the first failing observer
    /// stops the loop and its error is returned.
    fn notify_observers(&self, console: &mut dyn Console) -> Result<()> {
        let Some(temperature) = self.temperature else {
            return Ok(());
        };
        for (_, observer) in &self.observers {
            observer.update(temperature, console)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TemperatureDisplay;

impl Observer for TemperatureDisplay {
    fn name(&self) -> &str {
        "TemperatureDisplay"
    }

    fn update(&self, temperature: i32, console: &mut dyn Console) -> Result<()> {
        console.line(&format!(
            "TemperatureDisplay: Temperature updated to {} I need to update my display",
            temperature
        ));
        Ok(())
    }
}

#[derive(Debug)]
pub struct Fan {
    threshold: i32,
}

impl Fan {
    pub const DEFAULT_THRESHOLD: i32 = 25;

    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }
}

impl Default for Fan {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Observer for Fan {
    fn name(&self) -> &str {
        "Fan"
    }

    fn update(&self, temperature: i32, console: &mut dyn Console) -> Result<()> {
        if temperature > self.threshold {
            console.line("Fan: Its hot here, turning myself on...");
        } else {
            console.line("Fan: Its nice and cool, turning myself off...");
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ObserverDemo {
    config: ObserverConfig,
}

impl ObserverDemo {
    pub fn new(config: ObserverConfig) -> Self {
        Self { config }
    }
}

impl Demonstration for ObserverDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Observer
    }

    fn summary(&self) -> &'static str {
        "A weather station notifies a display and a fan of each new temperature"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let mut weather_station = WeatherStation::new();

        weather_station.register_observer(Box::new(TemperatureDisplay));
        weather_station.register_observer(Box::new(Fan::new(self.config.fan_threshold)));

        for &temperature in &self.config.temperatures {
            weather_station.set_temperature(temperature, console)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Transcript;
    use crate::utils::error::ShowcaseError;
    use std::cell::RefCell;
    use std::rc::Rc;

    type CallLog = Rc<RefCell<Vec<(String, i32)>>>;

    struct RecordingObserver {
        name: String,
        calls: CallLog,
        fail_on: Option<i32>,
    }

    impl RecordingObserver {
        fn new(name: &str, calls: &CallLog) -> Self {
            Self {
                name: name.to_string(),
                calls: Rc::clone(calls),
                fail_on: None,
            }
        }

        fn failing_on(mut self, temperature: i32) -> Self {
            self.fail_on = Some(temperature);
            self
        }
    }

    impl Observer for RecordingObserver {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&self, temperature: i32, _console: &mut dyn Console) -> Result<()> {
            self.calls.borrow_mut().push((self.name.clone(), temperature));
            if self.fail_on == Some(temperature) {
                return Err(ShowcaseError::ObserverError {
                    observer: self.name.clone(),
                    message: format!("cannot handle {}", temperature),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let calls: CallLog = Rc::default();
        let mut station = WeatherStation::new();
        station.register_observer(Box::new(RecordingObserver::new("first", &calls)));
        station.register_observer(Box::new(RecordingObserver::new("second", &calls)));

        let mut transcript = Transcript::new();
        station.set_temperature(20, &mut transcript).unwrap();
        station.set_temperature(30, &mut transcript).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![
                ("first".to_string(), 20),
                ("second".to_string(), 20),
                ("first".to_string(), 30),
                ("second".to_string(), 30),
            ]
        );
        assert_eq!(station.temperature(), Some(30));
    }

    #[test]
    fn test_failing_observer_aborts_notification() {
        let calls: CallLog = Rc::default();
        let mut station = WeatherStation::new();
        station.register_observer(Box::new(
            RecordingObserver::new("broken", &calls).failing_on(30),
        ));
        station.register_observer(Box::new(RecordingObserver::new("after", &calls)));

        let mut transcript = Transcript::new();
        let err = station.set_temperature(30, &mut transcript).unwrap_err();

        assert!(matches!(err, ShowcaseError::ObserverError { .. }));
        assert_eq!(*calls.borrow(), vec![("broken".to_string(), 30)]);
        // The value is stored before observers run.
        assert_eq!(station.temperature(), Some(30));
    }

    #[test]
    fn test_remove_observer_only_removes_that_observer() {
        let calls: CallLog = Rc::default();
        let mut station = WeatherStation::new();
        let first = station.register_observer(Box::new(RecordingObserver::new("first", &calls)));
        station.register_observer(Box::new(RecordingObserver::new("second", &calls)));

        let removed = station.remove_observer(first).unwrap();
        assert_eq!(removed.name(), "first");
        assert!(station.remove_observer(first).is_none());
        assert_eq!(station.observer_count(), 1);

        station.set_temperature(10, &mut Transcript::new()).unwrap();
        assert_eq!(*calls.borrow(), vec![("second".to_string(), 10)]);
    }

    #[test]
    fn test_notify_before_any_measurement_is_silent() {
        let mut station = WeatherStation::new();
        station.register_observer(Box::new(TemperatureDisplay));

        let mut transcript = Transcript::new();
        station.notify_observers(&mut transcript).unwrap();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_fan_threshold_is_exclusive() {
        let fan = Fan::default();
        let mut transcript = Transcript::new();
        fan.update(25, &mut transcript).unwrap();
        fan.update(26, &mut transcript).unwrap();
        assert_eq!(
            transcript.lines(),
            [
                "Fan: Its nice and cool, turning myself off...",
                "Fan: Its hot here, turning myself on...",
            ]
        );
    }

    #[test]
    fn test_observer_demo_output() {
        let mut transcript = Transcript::new();
        ObserverDemo::default().run(&mut transcript).unwrap();
        assert_eq!(
            transcript.lines(),
            [
                "WeatherStation: new temperature measurement: 20",
                "TemperatureDisplay: Temperature updated to 20 I need to update my display",
                "Fan: Its nice and cool, turning myself off...",
                "WeatherStation: new temperature measurement: 30",
                "TemperatureDisplay: Temperature updated to 30 I need to update my display",
                "Fan: Its hot here, turning myself on...",
            ]
        );
    }
}
