use crate::banner::WIZARD_LOGO;
use crate::commands::Outcome;
use std::path::Path;
use tracing::debug;

pub fn update() -> Outcome {
    Outcome::NotImplemented("update")
}

pub fn wizard() -> Outcome {
    println!("{WIZARD_LOGO}");
    Outcome::NotImplemented("wizard")
}

pub fn analyze(options_path: &Path, output_dir: &Path, input_dir: &Path) -> Outcome {
    debug!(
        "analyze: options={} output={} input={}",
        options_path.display(),
        output_dir.display(),
        input_dir.display()
    );
    Outcome::NotImplemented("analyze")
}
