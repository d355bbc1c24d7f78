use crate::skills::ScaffoldError;
use std::path::{Component, Path, PathBuf};

/// Arguments for a single scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitConfig {
    pub skill_name: String,
    pub path: PathBuf,
}

impl InitConfig {
    /// The skill name is otherwise unchecked; only emptiness is rejected.
    pub fn new(
        skill_name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, ScaffoldError> {
        let skill_name = skill_name.into();
        if skill_name.is_empty() {
            return Err(ScaffoldError::InvalidArguments(
                "skill name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            skill_name,
            path: path.into(),
        })
    }

    pub fn skill_dir(&self) -> std::io::Result<PathBuf> {
        Ok(resolve_path(&self.path)?.join(&self.skill_name))
    }
}

/// Makes `path` absolute and resolves symlinks in the part of it that
/// already exists. The missing tail is normalized lexically: `.` is dropped
/// and `..` removes the preceding component.
pub fn resolve_path(path: &Path) -> std::io::Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path)?;
    let components: Vec<Component> = absolute.components().collect();

    for split in (1..=components.len()).rev() {
        let existing: PathBuf = components[..split].iter().collect();
        let Ok(mut resolved) = existing.canonicalize() else {
            continue;
        };

        let mut stepped_up = false;
        for component in &components[split..] {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                    stepped_up = true;
                }
                Component::CurDir => {}
                other => resolved.push(other),
            }
        }

        // After `..` the remaining tail may land on existing entries again.
        if stepped_up {
            return resolve_path(&resolved);
        }

        tracing::debug!(
            input = %path.display(),
            resolved = %resolved.display(),
            "Resolved destination path"
        );
        return Ok(resolved);
    }

    Ok(absolute)
}
