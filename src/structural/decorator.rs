// Decorator Pattern: add-ons wrap a coffee and extend its description and cost.

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

// Lets `Box<dyn Coffee>` be wrapped like any concrete coffee
impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        20.0
    }
}

pub struct MilkDecorator<C> {
    inner: C,
}

impl<C: Coffee> MilkDecorator<C> {
    pub const SUFFIX: &'static str = ", Milk";
    pub const PRICE: f64 = 5.0;

    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for MilkDecorator<C> {
    fn description(&self) -> String {
        self.inner.description() + Self::SUFFIX
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + Self::PRICE
    }
}

pub struct SugarDecorator<C> {
    inner: C,
}

impl<C: Coffee> SugarDecorator<C> {
    pub const SUFFIX: &'static str = ", Sugar";
    pub const PRICE: f64 = 2.0;

    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for SugarDecorator<C> {
    fn description(&self) -> String {
        self.inner.description() + Self::SUFFIX
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + Self::PRICE
    }
}

/// One line summary, e.g. `Simple Coffee, Milk => Cost: 25.0`.
pub fn receipt(coffee: &dyn Coffee) -> String {
    format!("{} => Cost: {:?}", coffee.description(), coffee.cost())
}
