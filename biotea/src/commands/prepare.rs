use crate::cli::{AffymetrixArgs, AgilentArgs};
use crate::commands::Outcome;
use tracing::debug;

pub fn agilent(args: &AgilentArgs) -> Outcome {
    debug!(
        "prepare agilent: input={} output={} pattern={} remove_controls={} plot_number={:?} plot_size={}",
        args.input_dir.display(),
        args.output_file.display(),
        args.grep_pattern,
        args.plots.remove_controls,
        args.plots.plot_number,
        args.plots.plot_size
    );
    Outcome::NotImplemented("prepare agilent")
}

pub fn affymetrix(args: &AffymetrixArgs) -> Outcome {
    debug!(
        "prepare affymetrix: input={} output={} remove_controls={} plot_number={:?} plot_size={}",
        args.input_dir.display(),
        args.output_file.display(),
        args.plots.remove_controls,
        args.plots.plot_number,
        args.plots.plot_size
    );
    Outcome::NotImplemented("prepare affymetrix")
}
