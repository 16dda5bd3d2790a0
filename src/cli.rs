use clap::Parser;
use phylolabel::formats::TreeFormat;
use std::path::PathBuf;

/// Label higher-order taxa in a phylogeny using a reference taxonomy.
///
/// Inner vertices of the phylogeny are labeled with the names of the
/// taxonomic groups (genus, family, order, ...) their leaves belong to;
/// the labeled tree is written to stdout.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Phylogeny file to label
    pub phylogeny_file: PathBuf,

    /// Reference taxonomy file
    pub taxonomy_file: PathBuf,

    /// Format of the phylogeny file
    #[arg(short = 'p', long = "phylogeny-format", value_enum, default_value_t = TreeFormat::Newick)]
    pub phylogeny_format: TreeFormat,

    /// Format of the taxonomy file
    #[arg(short = 't', long = "taxonomy-format", value_enum, default_value_t = TreeFormat::Newick)]
    pub taxonomy_format: TreeFormat,

    /// Output format for the labeled phylogeny
    #[arg(short = 'o', long = "output-format", value_enum, default_value_t = TreeFormat::Newick)]
    pub output_format: TreeFormat,

    /// Restrict the taxonomy to the clade rooted at this name
    #[arg(short = 'r', long = "root")]
    pub root: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
