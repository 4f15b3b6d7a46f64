use crate::config::toml_config::StrategyConfig;
use crate::core::{Console, Demonstration, PatternKind};
use crate::utils::error::Result;

/// Interchangeable ordering algorithm used by [`Context`].
pub trait SortStrategy {
    fn name(&self) -> &'static str;
    fn run_sort_algorithm(&self, data: Vec<String>) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct AlphabeticalSort;

impl SortStrategy for AlphabeticalSort {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn run_sort_algorithm(&self, mut data: Vec<String>) -> Vec<String> {
        data.sort();
        data
    }
}

/// Reverses the input order. It does not sort.
#[derive(Debug, Default)]
pub struct ReverseSort;

impl SortStrategy for ReverseSort {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn run_sort_algorithm(&self, mut data: Vec<String>) -> Vec<String> {
        data.reverse();
        data
    }
}

pub struct Context {
    strategy: Box<dyn SortStrategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        tracing::debug!(
            "Switching strategy from {} to {}",
            self.strategy.name(),
            strategy.name()
        );
        self.strategy = strategy;
    }

    pub fn run(&self, data: &[String]) -> Vec<String> {
        self.strategy.run_sort_algorithm(data.to_vec())
    }

    pub fn run_sorting_function(&self, data: &[String], console: &mut dyn Console) {
        console.line(
            "Context: Sorting data using the strategy (Context object is not aware of the implementation details of the strategy)",
        );
        console.line(&self.run(data).join(","));
    }
}

#[derive(Debug, Default)]
pub struct StrategyDemo {
    config: StrategyConfig,
}

impl StrategyDemo {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }
}

impl Demonstration for StrategyDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Strategy
    }

    fn summary(&self) -> &'static str {
        "Swaps the sorting algorithm a context uses without changing the context"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let data = &self.config.data;

        let mut context = Context::new(Box::new(AlphabeticalSort));
        console.line("Client: Strategy is set to normal sorting.");
        context.run_sorting_function(data, console);

        console.blank();

        console.line("Client: Strategy is set to reverse sorting.");
        context.set_strategy(Box::new(ReverseSort));
        context.run_sorting_function(data, console);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Transcript;

    fn letters(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_alphabetical_and_reverse() {
        let data = letters(&["a", "b", "c", "d", "e"]);
        let mut context = Context::new(Box::new(AlphabeticalSort));
        assert_eq!(context.run(&data).join(","), "a,b,c,d,e");

        context.set_strategy(Box::new(ReverseSort));
        assert_eq!(context.run(&data).join(","), "e,d,c,b,a");
    }

    #[test]
    fn test_reverse_does_not_sort() {
        let data = letters(&["b", "c", "a"]);
        assert_eq!(ReverseSort.run_sort_algorithm(data.clone()), letters(&["a", "c", "b"]));
        assert_eq!(AlphabeticalSort.run_sort_algorithm(data), letters(&["a", "b", "c"]));
    }

    #[test]
    fn test_context_leaves_input_untouched() {
        let data = letters(&["e", "a"]);
        let context = Context::new(Box::new(AlphabeticalSort));
        context.run(&data);
        assert_eq!(data, letters(&["e", "a"]));
    }

    #[test]
    fn test_strategy_demo_output() {
        let mut transcript = Transcript::new();
        StrategyDemo::default().run(&mut transcript).unwrap();

        let context_line = "Context: Sorting data using the strategy (Context object is not aware of the implementation details of the strategy)";
        assert_eq!(
            transcript.lines(),
            [
                "Client: Strategy is set to normal sorting.",
                context_line,
                "a,b,c,d,e",
                "",
                "Client: Strategy is set to reverse sorting.",
                context_line,
                "e,d,c,b,a",
            ]
        );
    }
}
