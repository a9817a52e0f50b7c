//! Solvers dedicated to Dung semantics.

mod admissibility;
pub use admissibility::characteristic_function;
pub use admissibility::defends;
pub use admissibility::is_admissible;
pub use admissibility::is_conflict_free;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::grounded_extension;
pub use grounded_semantics_solver::GroundedExtension;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::preferred_extensions;
pub use preferred_semantics_solver::PreferredExtensions;
pub use preferred_semantics_solver::PreferredSearchConfig;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;
