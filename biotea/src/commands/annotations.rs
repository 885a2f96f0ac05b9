use crate::cli::Species;
use crate::commands::Outcome;
use std::path::Path;
use tracing::debug;

pub fn apply(target: &Path, annotation_database: &str) -> Outcome {
    debug!(
        "annotations apply: target={} database={annotation_database}",
        target.display()
    );
    Outcome::NotImplemented("annotations apply")
}

pub fn generate(target: &Path, organism: Species) -> Outcome {
    debug!(
        "annotations generate: target={} organism={organism}",
        target.display()
    );
    Outcome::NotImplemented("annotations generate")
}
