//! This module contains the main material used to define Abstract Argumentation.

use crate::utils::{Label, LabelSet};

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;

mod labelling;
pub use labelling::ArgumentStatus;
pub use labelling::Labelling;

mod problem;
pub use problem::Query;
pub use problem::Semantics;

/// An argument of an [`AAFramework`], identified by its label and an id unique in its [`ArgumentSet`].
pub type Argument<T> = Label<T>;

/// The set of arguments of an [`AAFramework`].
pub type ArgumentSet<T> = LabelSet<T>;
