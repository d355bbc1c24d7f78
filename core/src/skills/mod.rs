pub mod error;
pub mod manifest;
pub mod scaffold;
pub mod templates;

pub use error::ScaffoldError;
pub use manifest::{Skill, load_skill};
pub use scaffold::{ScaffoldReport, init_skill};
pub use templates::title_case_skill_name;

pub const MANIFEST_FILE: &str = "SKILL.md";
