//! Configuration loading for the Business Validation Engine.
//!
//! This module loads rule-set definitions from JSON or YAML files and
//! builds the [`RuleSet`] the evaluator reads.
//!
//! # Example
//!
//! ```no_run
//! use business_validation::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/business.json").unwrap();
//! println!("Loaded {} rules", config.rules().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::RuleSet;
