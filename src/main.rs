use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use social_graph::*;

use crate::config::{AnalyzeArgs, Command, Config, GenerateArgs};

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    match config.command {
        Command::Analyze(args) => analyze(&args),
        Command::Generate(args) => generate(&args),
    }
}

fn analyze(args: &AnalyzeArgs) -> Result<()> {
    // 1. Load and clean
    let raw = load_dataset(&args.input).context("load raw dataset")?;
    let cleaned = clean(&raw);
    save_dataset(&args.output, &cleaned).context("save cleaned dataset")?;
    println!("Data cleaned successfully!\n");

    // 2. Show what survived
    print!("{}", DatasetReport(&cleaned));

    // 3. Suggestions for the requested user
    let user = UserId(Id::parse(&args.user));
    if !cleaned.contains_user(&user) {
        warn!("user {} is not in the cleaned dataset", user);
    }
    let rec = Recommendations::for_user(user, &cleaned, args.top);
    let friends: Vec<UserId> = rec.friends.iter().map(|(id, _)| id.clone()).collect();
    let pages: Vec<PageId> = rec.pages.iter().map(|(id, _)| id.clone()).collect();
    println!();
    print!(
        "{}",
        RecommendationReport {
            user: rec.user.clone(),
            friends: &friends,
            pages: &pages,
        }
    );

    // 4. Optional exports
    if let Some(path) = &args.dot {
        let mut graph = FriendGraph::from_dataset(&cleaned);
        graph.detect_communities();
        graph.save_dot(path).context("write friendship graph")?;
    }
    if let Some(path) = &args.csv {
        let recs = recommend_all(&cleaned, args.top);
        write_recommendations_csv(path, &recs).context("write recommendations csv")?;
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let dataset = generate_dataset(&synth_config(args));
    save_dataset(&args.output, &dataset).context("save generated dataset")?;
    println!(
        "Generated {} users and {} pages into {}",
        dataset.users.len(),
        dataset.pages.len(),
        args.output.display()
    );
    Ok(())
}

fn synth_config(args: &GenerateArgs) -> SynthConfig {
    SynthConfig {
        users: args.users,
        pages: args.pages,
        max_friends: args.max_friends,
        max_likes: args.max_likes,
        seed: args.seed,
    }
}
