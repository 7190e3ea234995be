use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "social-graph", author, version, about)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clean a dataset, save it, and print suggestions for one user.
    Analyze(AnalyzeArgs),

    /// Write a synthetic, deliberately messy dataset.
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Raw dataset in json format.
    #[arg(short, long, default_value = "codebook_data.json")]
    pub input: PathBuf,

    /// Where the cleaned dataset is written.
    #[arg(short, long, default_value = "cleaned_codebook_data.json")]
    pub output: PathBuf,

    /// User to print suggestions for. Integer ids are tried first, then text.
    #[arg(short, long, default_value = "1")]
    pub user: String,

    /// Only keep this many suggestions per list.
    #[arg(long)]
    pub top: Option<usize>,

    /// Also write the friendship graph in graphviz format.
    #[arg(long)]
    pub dot: Option<PathBuf>,

    /// Also write ranked suggestions for every user as csv.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 50)]
    pub users: usize,

    #[arg(long, default_value_t = 20)]
    pub pages: usize,

    #[arg(long, default_value_t = 6)]
    pub max_friends: usize,

    #[arg(long, default_value_t = 4)]
    pub max_likes: usize,

    /// Same seed, same dataset.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(short, long, default_value = "codebook_data.json")]
    pub output: PathBuf,
}
