//! wordcache: CLI tool for building and reading wordlist cache files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordcache::config::WordlistConfig;
use wordcache::{
    generate_cache_file, open_or_generate, parse_duration, parse_duration_secs, CacheReader,
    PhraseGenerator,
};

#[derive(Parser)]
#[command(name = "wordcache")]
#[command(version)]
#[command(about = "Build and read fixed-width wordlist cache files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a newline-delimited wordlist to a cache file
    Generate {
        /// Input wordlist
        #[arg(short, long)]
        input: PathBuf,

        /// Output cache file
        #[arg(short, long)]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Print the generation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the layout and leading tokens of a cache file
    Inspect {
        /// Cache file to read
        cache: PathBuf,

        /// Number of tokens to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a random phrase drawn from a cache file
    Phrase {
        /// YAML config with wordlist and cache paths
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cache file (overrides the config)
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Words per phrase (overrides the config)
        #[arg(short, long)]
        words: Option<usize>,

        /// Seed for a reproducible phrase
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Parse a duration string such as "1h30m"
    Duration {
        /// Duration text
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Print whole seconds instead of nanoseconds
        #[arg(long)]
        secs: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            verbose,
            json,
        } => generate(&input, &output, verbose, json),
        Commands::Inspect { cache, limit, json } => inspect(&cache, limit, json),
        Commands::Phrase {
            config,
            cache,
            words,
            seed,
        } => phrase(config, cache, words, seed),
        Commands::Duration { text, secs } => duration(&text, secs),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<wordcache::Error>()
            .map(|e| e.status().as_i32())
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn generate(
    input: &PathBuf,
    output: &PathBuf,
    verbose: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        println!("Reading wordlist: {:?}", input);
    }

    let report = generate_cache_file(input, output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        println!(
            "Parsed {} lines: {} tokens kept, {} rejected",
            report.lines,
            report.tokens,
            report.rejected()
        );
        println!(
            "Record width {} (header byte {})",
            report.record_width,
            report.record_width + 1
        );
    }

    println!(
        "Successfully generated {:?} -> {:?} ({} bytes)",
        input, output, report.output_bytes
    );
    Ok(())
}

fn inspect(cache: &PathBuf, limit: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reader = CacheReader::open(cache)?;
    let tokens: Vec<String> = reader
        .iter()
        .take(limit)
        .map(|t| String::from_utf8_lossy(t).into_owned())
        .collect();

    if json {
        let value = serde_json::json!({
            "record_width": reader.record_width(),
            "stride": reader.stride(),
            "records": reader.len(),
            "tokens": tokens,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Cache: {:?}", cache);
    println!("  Record width: {}", reader.record_width());
    println!("  Stride:       {}", reader.stride());
    println!("  Records:      {}", reader.len());
    for (i, token) in tokens.iter().enumerate() {
        println!("  [{}] {}", i, token);
    }
    if reader.len() > tokens.len() {
        println!("  ... {} more", reader.len() - tokens.len());
    }
    Ok(())
}

fn phrase(
    config: Option<PathBuf>,
    cache: Option<PathBuf>,
    words: Option<usize>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config {
        Some(path) => WordlistConfig::load(path)?,
        None => WordlistConfig::default(),
    };
    if let Some(cache) = cache {
        config.cache = cache;
    }
    if let Some(words) = words {
        config.phrase_words = words;
    }
    config.validate()?;

    let reader = open_or_generate(&config)?;
    let mut generator = match seed {
        Some(seed) => PhraseGenerator::from_seed(seed, &config),
        None => PhraseGenerator::new(&config),
    };

    println!("{}", generator.generate(&reader)?);
    Ok(())
}

fn duration(text: &str, secs: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = if secs {
        parse_duration_secs(text)?
    } else {
        parse_duration(text)?
    };
    println!("{}", value);
    Ok(())
}
