// Dependency seams for the wizard.
//
// The engine only talks to the backend through `BaseAuthApi`, so tests can
// swap in `MockAuthApi` without a network.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use test_dependencies::{MockAuthApi, MockCall};
pub use traits::BaseAuthApi;
