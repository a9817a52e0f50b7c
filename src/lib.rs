//! Dialectica is an evaluation core for deliberation argument graphs.
//!
//! Typed deliberation graphs are projected into Dung abstract argumentation frameworks ([projection]),
//! on which grounded and preferred semantics are computed ([solvers]);
//! claims are also given an evidential score from the strength of the arguments supporting them ([evidential]).

#![warn(missing_docs)]

pub mod aa;

pub mod evidential;

pub mod io;

pub mod projection;

pub mod solvers;

pub mod utils;
