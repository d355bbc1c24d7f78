use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{
    EXAMPLE_ASSET, EXAMPLE_REFERENCE, render_example_script, render_manifest,
    title_case_skill_name,
};
use super::{MANIFEST_FILE, ScaffoldError};
use crate::config::InitConfig;

/// Outcome of a successful [`init_skill`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub skill_name: String,
    pub skill_dir: PathBuf,
    /// Files written, relative to `skill_dir`, in creation order.
    pub created: Vec<PathBuf>,
}

/// Creates `<path>/<skill_name>` with a templated `SKILL.md` and example
/// `scripts/`, `references/` and `assets/` entries.
///
/// Missing parents of `path` are created. The run stops at the first failure
/// and leaves anything already written in place.
pub fn init_skill(
    skill_name: &str,
    path: impl AsRef<Path>,
) -> Result<ScaffoldReport, ScaffoldError> {
    let config = InitConfig::new(skill_name, path.as_ref())?;
    scaffold(&config)
}

pub fn scaffold(config: &InitConfig) -> Result<ScaffoldReport, ScaffoldError> {
    let skill_name = config.skill_name.as_str();
    let skill_dir = config
        .skill_dir()
        .map_err(|source| ScaffoldError::DirectoryCreate {
            path: config.path.clone(),
            source,
        })?;

    if skill_dir.exists() {
        return Err(ScaffoldError::AlreadyExists { path: skill_dir });
    }

    create_skill_dir(&skill_dir).map_err(|source| ScaffoldError::DirectoryCreate {
        path: skill_dir.clone(),
        source,
    })?;
    tracing::info!(path = %skill_dir.display(), "Created skill directory");

    let mut created = vec![write_manifest(&skill_dir, skill_name)?];

    let resources = [
        Resource {
            dir: "scripts",
            file: "example.py",
            content: render_example_script(skill_name),
            executable: true,
        },
        Resource {
            dir: "references",
            file: "example.md",
            content: EXAMPLE_REFERENCE.to_string(),
            executable: false,
        },
        Resource {
            dir: "assets",
            file: "example.txt",
            content: EXAMPLE_ASSET.to_string(),
            executable: false,
        },
    ];

    for resource in &resources {
        let relative = resource.write(&skill_dir)?;
        tracing::info!(file = %relative.display(), "Created example resource");
        created.push(relative);
    }

    Ok(ScaffoldReport {
        skill_name: skill_name.to_string(),
        skill_dir,
        created,
    })
}

fn write_manifest(skill_dir: &Path, skill_name: &str) -> Result<PathBuf, ScaffoldError> {
    let skill_title = title_case_skill_name(skill_name);
    let manifest_path = skill_dir.join(MANIFEST_FILE);

    fs::write(&manifest_path, render_manifest(skill_name, &skill_title)).map_err(|source| {
        ScaffoldError::ManifestWrite {
            path: manifest_path.clone(),
            source,
        }
    })?;
    tracing::info!(path = %manifest_path.display(), "Created manifest");

    Ok(PathBuf::from(MANIFEST_FILE))
}

struct Resource {
    dir: &'static str,
    file: &'static str,
    content: String,
    executable: bool,
}

impl Resource {
    fn write(&self, skill_dir: &Path) -> Result<PathBuf, ScaffoldError> {
        let dir = skill_dir.join(self.dir);
        let target = dir.join(self.file);
        let failed = |source| ScaffoldError::ResourceCreate {
            path: target.clone(),
            source,
        };

        create_resource_dir(&dir).map_err(failed)?;
        fs::write(&target, &self.content).map_err(failed)?;
        if self.executable {
            make_executable(&target).map_err(failed)?;
        }

        Ok(Path::new(self.dir).join(self.file))
    }
}

fn create_skill_dir(skill_dir: &Path) -> std::io::Result<()> {
    if let Some(parent) = skill_dir.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(skill_dir)
}

fn create_resource_dir(dir: &Path) -> std::io::Result<()> {
    match fs::create_dir(dir) {
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        other => other,
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(path: &Path) -> std::io::Result<()> {
    tracing::warn!(
        path = %path.display(),
        "Executable permission not supported on this platform, skipping"
    );
    Ok(())
}
