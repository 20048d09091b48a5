// Driver: runs every pattern once, in catalog order, into one writer.

use crate::behavioral::observer::{PhoneDisplay, TvDisplay, WeatherStation};
use crate::behavioral::strategy::{CreditCardPayment, ShoppingCart, UpiPayment};
use crate::config::DemoConfig;
use crate::creational::factory::ShapeFactory;
use crate::creational::singleton::Logger;
use crate::error::Result;
use crate::structural::adapter::{MicroUsbToTypeCAdapter, OldMicroUsbPhone, TypeCCharger};
use crate::structural::decorator::{receipt, MilkDecorator, SimpleCoffee, SugarDecorator};
use colored::Colorize;
use std::io::Write;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Observer,
    Strategy,
    Singleton,
    Factory,
    Adapter,
    Decorator,
}

impl Section {
    pub const ORDER: [Section; 6] = [
        Section::Observer,
        Section::Strategy,
        Section::Singleton,
        Section::Factory,
        Section::Adapter,
        Section::Decorator,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Observer => "Behavioral: Observer Pattern",
            Section::Strategy => "Behavioral: Strategy Pattern",
            Section::Singleton => "Creational: Singleton Pattern",
            Section::Factory => "Creational: Factory Pattern",
            Section::Adapter => "Structural: Adapter Pattern",
            Section::Decorator => "Structural: Decorator Pattern",
        }
    }

    fn run(self, config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
        match self {
            Section::Observer => observer_example(config, out),
            Section::Strategy => strategy_example(config, out),
            Section::Singleton => singleton_example(config, out),
            Section::Factory => factory_example(config, out),
            Section::Adapter => adapter_example(out),
            Section::Decorator => decorator_example(out),
        }
    }
}

pub fn run(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    for (index, section) in Section::ORDER.into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_header(config, section, out)?;
        debug!(section = ?section, "running example");
        section.run(config, out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_header(config: &DemoConfig, section: Section, out: &mut dyn Write) -> Result<()> {
    let header = format!("===== {} =====", section.title());
    if config.color {
        writeln!(out, "{}", header.as_str().bold().cyan())?;
    } else {
        writeln!(out, "{}", header)?;
    }
    Ok(())
}

fn observer_example(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    let mut station = WeatherStation::new();
    station.attach(Rc::new(PhoneDisplay));
    station.attach(Rc::new(TvDisplay));
    station.set_temperature(config.temperature, out)?;
    Ok(())
}

fn strategy_example(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    let card_cart = ShoppingCart::new(Box::new(CreditCardPayment));
    card_cart.checkout(config.credit_card_amount, out)?;

    let upi_cart = ShoppingCart::new(Box::new(UpiPayment));
    upi_cart.checkout(config.upi_amount, out)?;
    Ok(())
}

fn singleton_example(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    let logger = Logger::global();
    for message in &config.log_messages {
        logger.log(message, out)?;
    }
    Ok(())
}

fn factory_example(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    for name in &config.shapes {
        ShapeFactory::get_shape(name)?.draw(out)?;
    }
    Ok(())
}

fn adapter_example(out: &mut dyn Write) -> Result<()> {
    let adapter = MicroUsbToTypeCAdapter::new(OldMicroUsbPhone);
    adapter.charge_with_type_c(out)?;
    Ok(())
}

fn decorator_example(out: &mut dyn Write) -> Result<()> {
    let coffee = SugarDecorator::new(MilkDecorator::new(SimpleCoffee));
    writeln!(out, "{}", receipt(&coffee))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;

    const EXPECTED: &str = "\
===== Behavioral: Observer Pattern =====
Phone Display updated: Temp = 28.5°C
TV Display updated: Temp = 28.5°C

===== Behavioral: Strategy Pattern =====
Paid 500 using Credit Card.
Paid 300 using UPI.

===== Creational: Singleton Pattern =====
Log: System started.
Log: System running smoothly.

===== Creational: Factory Pattern =====
Drawing a Circle
Drawing a Square

===== Structural: Adapter Pattern =====
Charging phone with MicroUSB port.

===== Structural: Decorator Pattern =====
Simple Coffee, Milk, Sugar => Cost: 27.0
";

    fn run_to_string(config: &DemoConfig) -> Result<String> {
        let mut out = Vec::new();
        run(config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_output() {
        assert_eq!(run_to_string(&DemoConfig::default()).unwrap(), EXPECTED);
    }

    #[test]
    fn test_output_is_deterministic() {
        let config = DemoConfig::default();
        assert_eq!(run_to_string(&config).unwrap(), run_to_string(&config).unwrap());
    }

    #[test]
    fn test_sections_in_order() {
        let output = run_to_string(&DemoConfig::default()).unwrap();
        let positions: Vec<usize> = Section::ORDER
            .iter()
            .map(|section| output.find(section.title()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_unknown_shape_stops_the_run() {
        let config = DemoConfig {
            shapes: vec!["circle".to_string(), "hexagon".to_string()],
            ..DemoConfig::default()
        };
        let err = run_to_string(&config).unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnknownShape { ref requested } if requested == "hexagon"
        ));
    }

    #[test]
    fn test_custom_inputs_flow_through() {
        let config = DemoConfig {
            temperature: 30.0,
            credit_card_amount: 0,
            upi_amount: -5,
            shapes: vec!["SQUARE".to_string()],
            ..DemoConfig::default()
        };
        let output = run_to_string(&config).unwrap();
        assert!(output.contains("Temp = 30.0°C"));
        assert!(output.contains("Paid 0 using Credit Card."));
        assert!(output.contains("Paid -5 using UPI."));
        assert!(output.contains("Drawing a Square\n\n"));
    }
}
