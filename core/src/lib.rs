/// Here resides the domain logic of the application.
pub mod domain;

/// Here resides the use cases of the application.
pub mod use_cases;
