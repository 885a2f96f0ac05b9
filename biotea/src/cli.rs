use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "biotea", version, arg_required_else_help = true)]
#[command(about = "bioTEA - retrieve GEO data, prepare microarrays and run GATTACA", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get information on the status of the tool
    Info {
        #[command(subcommand)]
        command: Option<InfoCommands>,
    },
    /// Check bioTEA and the container repository for updates
    Update,
    /// Run the bioTEA wizard
    Wizard,
    /// Retrieve the metadata of a GEO series
    Retrieve {
        /// Directory that receives metadata.csv
        output_path: PathBuf,
        /// GEO series accession, e.g. GSE12345
        geo_id: String,
    },
    /// Prepare expression data for analysis
    Prepare {
        #[command(subcommand)]
        command: PrepareCommands,
    },
    /// Run differential gene expression with GATTACA
    Analyze {
        /// GATTACA options file
        options_path: PathBuf,
        /// Directory that receives the analysis output
        output_dir: PathBuf,
        /// Directory with the prepared expression data
        input_dir: PathBuf,
    },
    /// Manage annotation databases
    Annotations {
        #[command(subcommand)]
        command: AnnotationsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum InfoCommands {
    /// Show the bioTEA version
    Biotea,
    /// Show downloaded and available GATTACA containers
    Containers,
}

#[derive(Subcommand, Debug)]
pub enum PrepareCommands {
    /// Prepare Agilent expression data
    Agilent(AgilentArgs),
    /// Prepare Affymetrix expression data
    Affymetrix(AffymetrixArgs),
}

#[derive(Subcommand, Debug)]
pub enum AnnotationsCommands {
    /// Annotate expression data or DEA output
    Apply {
        /// Expression matrix or DEA table to annotate
        target: PathBuf,
        /// Annotation database to use
        #[arg(long, default_value = "internal")]
        annotation_database: String,
    },
    /// Generate annotations for an organism
    Generate {
        /// Where to write the annotations
        target: PathBuf,
        /// Organism to generate annotations for
        #[arg(long, value_enum, default_value_t = Species::Human)]
        organism: Species,
    },
}

#[derive(Args, Debug)]
pub struct AgilentArgs {
    /// Directory with the raw Agilent files
    pub input_dir: PathBuf,
    /// Expression matrix to write
    pub output_file: PathBuf,
    /// Pattern selecting the raw files inside input_dir
    #[arg(long, default_value = r"\.txt$", value_parser = parse_pattern)]
    pub grep_pattern: Regex,
    #[command(flatten)]
    pub plots: PlotArgs,
}

#[derive(Args, Debug)]
pub struct AffymetrixArgs {
    /// Directory with the raw CEL files
    pub input_dir: PathBuf,
    /// Expression matrix to write
    pub output_file: PathBuf,
    #[command(flatten)]
    pub plots: PlotArgs,
}

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Drop control probes before normalization
    #[arg(long)]
    pub remove_controls: bool,
    /// Number of arrays shown in each diagnostic plot
    #[arg(long)]
    pub plot_number: Option<u32>,
    /// Diagnostic plot size in inches, as WIDTH,HEIGHT
    #[arg(long, default_value = "12,5")]
    pub plot_size: PlotSize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Human,
    Drosophila,
    Mouse,
    Rat,
    Apis,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Human => "human",
            Self::Drosophila => "drosophila",
            Self::Mouse => "mouse",
            Self::Rat => "rat",
            Self::Apis => "apis",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for PlotSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("'{s}' is not a plot size (expected WIDTH,HEIGHT)");
        let (width, height) = s.split_once(',').ok_or_else(invalid)?;
        let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = height.trim().parse::<u32>().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for PlotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

fn parse_pattern(raw: &str) -> Result<Regex, String> {
    Regex::new(raw).map_err(|err| format!("invalid pattern: {err}"))
}
