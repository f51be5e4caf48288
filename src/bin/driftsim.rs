use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use driftsim::simulation::{run_replicates, DriftParameters, FixationState, Simulation};
use driftsim::storage;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Driftsim: a Wright-Fisher genetic drift simulator
///
/// Tracks the count of one allele at a bi-allelic locus as it drifts
/// generation by generation in a finite, randomly-mating diploid population.
#[derive(Parser, Debug)]
#[command(name = "driftsim")]
#[command(author, version, about = "Simulates neutral allele-frequency drift", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a drift simulation and write the trajectory to a file.
    ///
    /// With `--replicates R > 1`, runs R independent trajectories in
    /// parallel and writes them side by side (columns x1..xR).
    Run {
        /// Population size (diploid individuals; the allele pool is 2N)
        #[arg(short = 'n', long, default_value = "100")]
        population_size: u64,

        /// Number of generations, including the initial one
        #[arg(short = 'g', long, default_value = "1000")]
        generations: usize,

        /// Initial count of the tracked allele (0..=2N)
        #[arg(short = 'a', long)]
        initial_count: u64,

        /// Number of independent replicate trajectories
        #[arg(short = 'r', long, default_value = "1")]
        replicates: usize,

        /// Output path (tab-delimited)
        #[arg(short, long, default_value = "trajectory.tsv")]
        output: PathBuf,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Show progress bar (single-trajectory runs only; replicate runs
        /// complete in one parallel pass)
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        progress: bool,
    },

    /// Inspect: summarize a previously written trajectory file.
    Inspect {
        /// Trajectory file path
        #[arg(short, long, default_value = "trajectory.tsv")]
        input: PathBuf,

        /// Population size the file was simulated with; enables
        /// fixation/loss classification
        #[arg(short = 'n', long)]
        population_size: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            population_size,
            generations,
            initial_count,
            replicates,
            output,
            seed,
            progress,
        } => run_command(
            population_size,
            generations,
            initial_count,
            replicates,
            &output,
            seed,
            progress,
        ),
        Commands::Inspect {
            input,
            population_size,
        } => inspect_command(&input, population_size),
    }
}

fn run_command(
    population_size: u64,
    generations: usize,
    initial_count: u64,
    replicates: usize,
    output: &PathBuf,
    seed: Option<u64>,
    show_progress: bool,
) -> Result<()> {
    println!("🧬 Driftsim - Wright-Fisher Drift Simulation");
    println!("============================================\n");

    if replicates == 0 {
        anyhow::bail!("At least one replicate is required");
    }

    let params = DriftParameters::new(population_size, generations, initial_count)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("Configuration:");
    println!("  Population size (N): {}", params.population_size());
    println!("  Allele copies (2N):  {}", params.allele_copies());
    println!("  Generations:         {}", params.generations());
    println!("  Initial count:       {}", params.initial_count());
    println!("  Initial frequency:   {:.4}", params.initial_frequency());
    if let Some(seed) = seed {
        println!("  Seed:                {seed}");
    }
    println!();

    if replicates == 1 {
        println!("Running {} generations...", params.generations());

        let pb = if show_progress {
            let pb = ProgressBar::new(params.generations() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.inc(1); // the initial generation is already present
            Some(pb)
        } else {
            None
        };

        let mut sim = Simulation::new(params, seed);
        while !sim.is_complete() {
            sim.step();
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("Done");
        }

        let trajectory = sim.into_trajectory();
        storage::write_trajectory(output, &trajectory)
            .with_context(|| format!("Failed to write trajectory to {}", output.display()))?;

        println!("\n✓ Simulation complete!");
        println!("  Final count:     {}", trajectory.final_count());
        match trajectory.fixation_state() {
            FixationState::Lost => println!("  Outcome:         allele lost"),
            FixationState::Fixed => println!("  Outcome:         allele fixed"),
            FixationState::Segregating => println!("  Outcome:         still segregating"),
        }
        if let Some(generation) = trajectory.absorption_time() {
            println!("  Absorbed at gen: {}", generation + 1);
        }
    } else {
        println!(
            "Running {replicates} replicates of {} generations...",
            params.generations()
        );

        let trajectories = run_replicates(&params, replicates, seed);
        storage::write_replicates(output, &trajectories)
            .with_context(|| format!("Failed to write replicates to {}", output.display()))?;

        let absorbed = trajectories.iter().filter(|t| t.is_absorbed()).count();
        let fixed = trajectories
            .iter()
            .filter(|t| t.fixation_state() == FixationState::Fixed)
            .count();

        println!("\n✓ Simulation complete!");
        println!("  Replicates:      {replicates}");
        println!("  Absorbed:        {absorbed}");
        println!("  Fixed:           {fixed}");
        println!("  Lost:            {}", absorbed - fixed);
    }

    println!("\n💡 Use 'driftsim inspect -i {}' to view results", output.display());

    Ok(())
}

fn inspect_command(input: &PathBuf, population_size: Option<u64>) -> Result<()> {
    println!("🧬 Driftsim - Trajectory Summary");
    println!("============================================\n");

    let counts = storage::read_trajectory(input)
        .with_context(|| format!("Failed to read trajectory from {}", input.display()))?;

    // read_trajectory rejects empty files, so first/last always exist
    let initial = counts[0];
    let final_count = counts[counts.len() - 1];

    println!("File: {}", input.display());
    println!("  Generations:   {}", counts.len());
    println!("  Initial count: {initial}");
    println!("  Final count:   {final_count}");

    if let Some(n) = population_size {
        let allele_copies = n.checked_mul(2).context("Population size too large")?;
        if counts.iter().any(|&c| c > allele_copies) {
            anyhow::bail!(
                "File contains counts above 2N = {allele_copies}; wrong --population-size?"
            );
        }

        let outcome = match final_count {
            0 => "allele lost",
            c if c == allele_copies => "allele fixed",
            _ => "still segregating",
        };
        println!("  Outcome:       {outcome}");

        if let Some(generation) = counts
            .iter()
            .position(|&c| c == 0 || c == allele_copies)
        {
            println!("  Absorbed at:   generation {}", generation + 1);
        }
    }

    Ok(())
}
