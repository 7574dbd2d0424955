mod suppression_evaluator;

pub use suppression_evaluator::ISuppressionEvaluator;
