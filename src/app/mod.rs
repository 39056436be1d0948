// Application layer: concrete adapters for external services.

pub mod providers;
