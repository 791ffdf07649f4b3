use std::{fs, path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use randnft_common::{
    config::CollectionConfig,
    crypto::Address,
    nft::{MintCoordinator, MockVrfCoordinator, NftEvent, OsRandomness, Token},
    utils::{format_coin, parse_coin},
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "randnft-minter", version, about = "Drive a collectible collection locally")]
struct Args {
    /// JSON collection configuration; built-in presets are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mint fixed-uri tokens directly
    Basic {
        /// Receiving address (hex)
        #[arg(short, long)]
        owner: String,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,
    },
    /// Pay for randomized mints and fulfill them
    Random {
        /// Requesting address (hex)
        #[arg(short, long)]
        requester: String,

        /// Payment per request in coins, e.g. 0.01
        #[arg(short, long)]
        payment: String,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,

        /// Draw words from the OS CSPRNG instead of the deterministic mock
        #[arg(long)]
        os_rng: bool,
    },
    /// Resolve a modded random value to its breed
    Breed { value: u64 },
}

#[derive(Serialize)]
struct Report<'a> {
    collection: &'a str,
    symbol: &'a str,
    token_counter: u64,
    tokens: Vec<&'a Token>,
    events: Vec<NftEvent>,
}

fn load_config(path: Option<&PathBuf>, fallback: CollectionConfig) -> Result<CollectionConfig> {
    let Some(path) = path else {
        return Ok(fallback);
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: CollectionConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

fn parse_address(value: &str) -> Result<Address> {
    Address::from_str(value).with_context(|| format!("Invalid address {}", value))
}

fn print_report(collection: &MintCoordinator, minted: &[u64]) -> Result<()> {
    let tokens = minted
        .iter()
        .map(|id| collection.token(*id))
        .collect::<Result<Vec<_>, _>>()?;
    let report = Report {
        collection: collection.name(),
        symbol: collection.symbol(),
        token_counter: collection.token_counter(),
        tokens,
        events: collection.events().to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_basic(config: CollectionConfig, owner: &str, count: u64) -> Result<()> {
    let owner = parse_address(owner)?;
    let mut collection = MintCoordinator::from_config(&config)?;

    let mut minted = Vec::new();
    for _ in 0..count {
        minted.push(collection.mint_direct(&owner)?);
    }
    info!("minted {} token(s) for {}", minted.len(), owner);
    print_report(&collection, &minted)
}

fn run_random(
    config: CollectionConfig,
    requester: &str,
    payment: &str,
    count: u64,
    os_rng: bool,
) -> Result<()> {
    let requester = parse_address(requester)?;
    let payment = parse_coin(payment).context("Invalid payment amount")?;
    let mut collection = MintCoordinator::from_config(&config)?;

    if payment < collection.mint_fee() {
        bail!(
            "Payment {} is below the mint fee {}",
            format_coin(payment),
            format_coin(collection.mint_fee())
        );
    }

    let mut minted = Vec::new();
    if os_rng {
        let mut provider = OsRandomness::new();
        for _ in 0..count {
            collection.request_mint(&mut provider, payment, &requester)?;
        }
        for (request_id, result) in provider.drain_into(&mut collection) {
            match result {
                Ok(token_id) => minted.push(token_id),
                Err(e) => warn!("request {} was not fulfilled: {}", request_id, e),
            }
        }
    } else {
        let mut provider = MockVrfCoordinator::new();
        let mut requests = Vec::new();
        for _ in 0..count {
            requests.push(collection.request_mint(&mut provider, payment, &requester)?);
        }
        for request_id in requests {
            minted.push(provider.fulfill_random_words(&request_id, &mut collection)?);
        }
    }

    info!(
        "{} request(s) paid at {} each, {} token(s) minted",
        count,
        format_coin(payment),
        minted.len()
    );
    print_report(&collection, &minted)
}

fn run_breed(config: CollectionConfig, value: u64) -> Result<()> {
    let collection = MintCoordinator::from_config(&config)?;
    let breed = collection
        .breed_from_modded_rng(value)
        .with_context(|| format!("Value {} is outside the chance table", value))?;
    println!("{}", breed);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Command::Basic { owner, count } => {
            let config = load_config(args.config.as_ref(), CollectionConfig::basic())?;
            run_basic(config, &owner, count)
        }
        Command::Random {
            requester,
            payment,
            count,
            os_rng,
        } => {
            let config = load_config(args.config.as_ref(), CollectionConfig::randomized())?;
            run_random(config, &requester, &payment, count, os_rng)
        }
        Command::Breed { value } => {
            let config = load_config(args.config.as_ref(), CollectionConfig::randomized())?;
            run_breed(config, value)
        }
    }
}
