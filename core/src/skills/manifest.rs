use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::MANIFEST_FILE;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FrontMatter {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    argument_hint: Option<String>,
    #[serde(default)]
    disable_model_invocation: Option<bool>,
    #[serde(default)]
    user_invocable: Option<bool>,
    #[serde(default)]
    allowed_tools: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    agent: Option<String>,
}

/// A skill as described by its `SKILL.md`.
#[derive(Debug, Clone, Default)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub argument_hint: Option<String>,
    pub disable_model_invocation: bool,
    pub user_invocable: bool,
    pub allowed_tools: Vec<String>,
    pub model: Option<String>,
    pub context: Option<String>,
    pub agent: Option<String>,
    pub location: Option<PathBuf>,
}

pub fn load_skill(skill_dir: &Path) -> Result<Skill> {
    let md_path = skill_dir.join(MANIFEST_FILE);

    if md_path.exists() {
        load_skill_md(&md_path)
    } else {
        anyhow::bail!("No {} found in {}", MANIFEST_FILE, skill_dir.display());
    }
}

fn load_skill_md(path: &Path) -> Result<Skill> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if let Some(frontmatter_str) = front_matter(&content) {
        match serde_yaml::from_str::<FrontMatter>(&frontmatter_str) {
            Ok(fm) => {
                return Ok(Skill {
                    name: fm.name,
                    description: fm.description.trim().to_string(),
                    argument_hint: fm.argument_hint,
                    disable_model_invocation: fm.disable_model_invocation.unwrap_or(false),
                    user_invocable: fm.user_invocable.unwrap_or(true),
                    allowed_tools: fm
                        .allowed_tools
                        .map(|tools| {
                            tools
                                .split(',')
                                .map(|t| t.trim().to_string())
                                .filter(|t| !t.is_empty())
                                .collect()
                        })
                        .unwrap_or_default(),
                    model: fm.model,
                    context: fm.context,
                    agent: fm.agent,
                    location: Some(path.to_path_buf()),
                });
            }
            Err(e) => {
                tracing::debug!("Ignoring unparsable front matter in {}: {}", path.display(), e);
            }
        }
    }

    let body = strip_front_matter(&content);
    let first_line = body.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let name = first_line.trim_start_matches('#').trim().to_string();

    let description = body
        .lines()
        .find(|l| !(l.starts_with('#') || l.trim().is_empty()))
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "No description".to_string());

    Ok(Skill {
        name: if name.is_empty() {
            "unnamed".to_string()
        } else {
            name
        },
        description,
        user_invocable: true,
        location: Some(path.to_path_buf()),
        ..Default::default()
    })
}

fn front_matter(content: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() >= 3 && lines[0].trim() == "---" {
        let closing = lines[1..].iter().position(|l| l.trim() == "---")?;
        return Some(lines[1..=closing].join("\n"));
    }

    None
}

fn strip_front_matter(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() >= 3
        && lines[0].trim() == "---"
        && let Some(pos) = lines[1..].iter().position(|l| l.trim() == "---")
    {
        return lines[pos + 2..].join("\n");
    }

    content.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_front_matter_skill() {
        let tmp = TempDir::new().unwrap();
        let skill_dir = tmp.path().join("pdf-tools");
        fs::create_dir_all(&skill_dir).unwrap();

        fs::write(
            skill_dir.join("SKILL.md"),
            "---\nname: pdf-tools\ndescription: >-\n  Work with PDF files.\nallowed-tools: Bash, Read\nuser-invocable: false\n---\n\n# Pdf Tools\n",
        )
        .unwrap();

        let skill = load_skill(&skill_dir).unwrap();
        assert_eq!(skill.name, "pdf-tools");
        assert_eq!(skill.description, "Work with PDF files.");
        assert_eq!(skill.allowed_tools, vec!["Bash", "Read"]);
        assert!(!skill.user_invocable);
        assert!(!skill.disable_model_invocation);
        assert!(skill.model.is_none());
    }

    #[test]
    fn load_md_skill() {
        let tmp = TempDir::new().unwrap();
        let skill_dir = tmp.path().join("test-skill");
        fs::create_dir_all(&skill_dir).unwrap();

        fs::write(
            skill_dir.join("SKILL.md"),
            "# Test Skill\nThis is a test description.\n",
        )
        .unwrap();

        let skill = load_skill(&skill_dir).unwrap();
        assert_eq!(skill.name, "Test Skill");
        assert_eq!(skill.description, "This is a test description.");
        assert!(skill.user_invocable);
    }

    #[test]
    fn broken_front_matter_falls_back_to_heading() {
        let tmp = TempDir::new().unwrap();
        let skill_dir = tmp.path().join("broken");
        fs::create_dir_all(&skill_dir).unwrap();

        fs::write(
            skill_dir.join("SKILL.md"),
            "---\ndescription: no name here\n---\n# Broken\nBody text.\n",
        )
        .unwrap();

        let skill = load_skill(&skill_dir).unwrap();
        assert_eq!(skill.name, "Broken");
        assert_eq!(skill.description, "Body text.");
    }

    #[test]
    fn no_skill_file() {
        let tmp = TempDir::new().unwrap();
        let skill_dir = tmp.path().join("empty");
        fs::create_dir_all(&skill_dir).unwrap();

        assert!(load_skill(&skill_dir).is_err());
    }
}
