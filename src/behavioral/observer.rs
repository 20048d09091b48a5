// Observer Pattern: a weather station pushes every new reading to its displays.

use std::io::{self, Write};
use std::rc::Rc;
use tracing::debug;

/// Anything that wants to hear about temperature changes.
pub trait Observer {
    fn update(&self, temperature: f32, out: &mut dyn Write) -> io::Result<()>;
}

pub struct PhoneDisplay;

impl Observer for PhoneDisplay {
    fn update(&self, temperature: f32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Phone Display updated: Temp = {:?}°C", temperature)
    }
}

pub struct TvDisplay;

impl Observer for TvDisplay {
    fn update(&self, temperature: f32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "TV Display updated: Temp = {:?}°C", temperature)
    }
}

/// Subject holding the current reading.
///
/// Observers are notified in the order they were attached. Attaching the
/// same observer twice means it hears every reading twice.
pub struct WeatherStation {
    temperature: f32,
    observers: Vec<Rc<dyn Observer>>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self {
            temperature: 0.0,
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn set_temperature(&mut self, temperature: f32, out: &mut dyn Write) -> io::Result<()> {
        self.temperature = temperature;
        self.notify(out)
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!(
            temperature = self.temperature,
            observers = self.observers.len(),
            "notifying observers"
        );
        for observer in &self.observers {
            observer.update(self.temperature, out)?;
        }
        Ok(())
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}
