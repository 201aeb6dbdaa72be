pub mod agent;
pub mod evaluator;
pub mod guard;
pub mod r#match;
pub mod outcome;
pub mod position;
pub mod result;
pub mod value;
