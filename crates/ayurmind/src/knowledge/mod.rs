//! Static Ayurvedic reference tables. Everything here is read-only and lives for the
//! duration of the process.

pub mod citation;
pub mod dosha;
pub mod patterns;
pub mod questions;
pub mod recommendations;
pub mod subtypes;
pub mod texts;

pub use citation::Citation;
pub use dosha::{constitution_label, Dosha, DoshaParseError, DoshaPercentages, DoshaScores};
pub use questions::{Question, QuestionBank, QuestionCategory, QuestionOption};
pub use recommendations::{AdviceBlock, DoshaRegimen};
pub use subtypes::DoshaSubtype;
pub use texts::{ClassicalText, Methodology};
