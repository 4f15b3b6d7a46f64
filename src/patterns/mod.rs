pub mod adapter;
pub mod decorator;
pub mod facade;
pub mod fluent;
pub mod observer;
pub mod oop_overview;
pub mod strategy;
pub mod template_method;

use crate::config::toml_config::ShowcaseConfig;
use crate::core::{Demonstration, PatternKind};

pub fn demonstration_for(kind: PatternKind, config: &ShowcaseConfig) -> Box<dyn Demonstration> {
    match kind {
        PatternKind::Adapter => Box::new(adapter::AdapterDemo),
        PatternKind::Decorator => Box::new(decorator::DecoratorDemo),
        PatternKind::Facade => Box::new(facade::FacadeDemo),
        PatternKind::FluentInterface => Box::new(fluent::FluentDemo::new(config.fluent.clone())),
        PatternKind::Observer => Box::new(observer::ObserverDemo::new(config.observer.clone())),
        PatternKind::Strategy => Box::new(strategy::StrategyDemo::new(config.strategy.clone())),
        PatternKind::TemplateMethod => Box::new(template_method::TemplateMethodDemo),
        PatternKind::OopOverview => Box::new(oop_overview::OopOverviewDemo::new(config.oop.clone())),
    }
}

/// Every demonstration, in canonical order.
pub fn all_demonstrations(config: &ShowcaseConfig) -> Vec<Box<dyn Demonstration>> {
    PatternKind::ALL
        .iter()
        .map(|&kind| demonstration_for(kind, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_pattern() {
        let config = ShowcaseConfig::default();
        let demos = all_demonstrations(&config);
        let kinds: Vec<PatternKind> = demos.iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, PatternKind::ALL.to_vec());
        assert!(demos.iter().all(|d| !d.summary().is_empty()));
    }
}
