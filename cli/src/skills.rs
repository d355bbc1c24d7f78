use console::style;
use skill_init_core::{ScaffoldError, ScaffoldReport};
use std::path::Path;

const EXAMPLES: [&str; 3] = [
    "init_skill my-new-skill --path skills/public",
    "init_skill my-api-helper --path skills/private",
    "init_skill custom-skill --path /custom/location",
];

pub fn print_usage() {
    println!("Usage: init_skill <skill-name> --path <path>");
    println!();
    println!("Skill name requirements:");
    println!("  - Kebab-case identifier (e.g., 'my-data-analyzer')");
    println!("  - Lowercase letters, digits, and hyphens only");
    println!("  - Max 64 characters");
    println!("  - Must match directory name exactly");
    println!();
    println!("Examples:");
    for example in EXAMPLES {
        println!("  {}", example);
    }
}

pub fn print_start(skill_name: &str, path: &Path) {
    println!(
        "{} Initializing skill: {}",
        style("🚀").cyan(),
        style(skill_name).white().bold()
    );
    println!("   Location: {}", path.display());
    println!();
}

pub fn print_report(report: &ScaffoldReport) {
    println!(
        "{} Created skill directory: {}",
        style("✅").green(),
        style(report.skill_dir.display()).cyan()
    );
    for file in &report.created {
        println!("{} Created {}", style("✅").green(), file.display());
    }

    println!();
    println!(
        "{} Skill '{}' initialized at {}",
        style("✅").green().bold(),
        report.skill_name,
        style(report.skill_dir.display()).cyan()
    );
    println!();
    println!("Next steps:");
    println!("1. Edit SKILL.md — fill in the description and instructions");
    println!("2. Customize or delete example files in scripts/, references/, assets/");
    println!("3. Run the validator when ready");
}

pub fn print_error(err: &ScaffoldError) {
    eprintln!("{} Error: {}", style("❌").red(), error_message(err));
}

fn error_message(err: &ScaffoldError) -> String {
    match (err, err.path()) {
        (ScaffoldError::AlreadyExists { .. }, _) | (_, None) => err.to_string(),
        (_, Some(path)) => format!("{} ({})", err, path.display()),
    }
}
