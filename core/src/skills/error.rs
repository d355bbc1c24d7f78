use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for scaffolding a skill. Nothing is rolled back: whatever
/// was written before the failing step stays on disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Skill directory already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Error creating directory: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating SKILL.md: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating resource directories: {source}")]
    ResourceCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// The path the failing step was working on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScaffoldError::InvalidArguments(_) => None,
            ScaffoldError::AlreadyExists { path }
            | ScaffoldError::DirectoryCreate { path, .. }
            | ScaffoldError::ManifestWrite { path, .. }
            | ScaffoldError::ResourceCreate { path, .. } => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn already_exists_reports_path() {
        let err = ScaffoldError::AlreadyExists {
            path: PathBuf::from("/tmp/skills/foo"),
        };
        assert_eq!(
            err.to_string(),
            "Skill directory already exists: /tmp/skills/foo"
        );
        assert_eq!(err.path(), Some(std::path::Path::new("/tmp/skills/foo")));
    }

    #[test]
    fn io_variants_keep_cause() {
        let err = ScaffoldError::ManifestWrite {
            path: PathBuf::from("foo/SKILL.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error creating SKILL.md: denied");
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn invalid_arguments_has_no_path() {
        let err = ScaffoldError::InvalidArguments("missing --path".into());
        assert!(err.path().is_none());
    }
}
