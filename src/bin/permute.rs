use std::env;
use std::error::Error;
use std::io;
use std::time::Instant;

use anyhow::bail;
use clap::Parser;
use num_bigint::BigInt;
use serde::Serialize;
use tracing::{debug, info};

use lehmer::factorial::Strategy;
use lehmer::Engine;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// permute the indexes 0..SIZE
    #[clap(short = 's', long)]
    size: Option<usize>,

    /// permute the given comma-separated items
    #[clap(short = 'i', long, value_delimiter = ',')]
    items: Option<Vec<String>>,

    /// 1-based rank of the permutation, up to SIZE!
    #[clap(short = 'r', long)]
    rank: Option<BigInt>,

    /// print the largest valid rank instead of permuting
    #[clap(short = 'l', long)]
    largest: bool,

    /// recompute factorials on every call instead of caching them
    #[clap(long)]
    direct: bool,

    /// emit JSON
    #[clap(short = 'j', long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.size.is_none() && self.items.is_none()
            || self.size.is_some() && self.items.is_some()
        {
            bail!("either the -s or the -i flag must be specified");
        }
        if self.rank.is_none() && !self.largest {
            bail!("a rank must be specified with -r, unless -l is set");
        }
        Ok(())
    }

    fn strategy(&self) -> Strategy {
        Strategy::from(!self.direct)
    }

    fn items(&self) -> Vec<String> {
        match (&self.items, self.size) {
            (Some(items), _) => items.clone(),
            (None, Some(size)) => (0..size).map(|index| index.to_string()).collect(),
            (None, None) => unreachable!(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Largest {
    strategy: Strategy,
    size: usize,
    largest_rank: String,
}

#[derive(Debug, Serialize)]
struct Permutation {
    strategy: Strategy,
    size: usize,
    rank: String,
    permutation: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let strategy = args.strategy();
    let mut engine: Engine = Engine::from(strategy);
    let items = args.items();
    let size = items.len();

    if args.largest {
        let largest_rank = engine.largest_rank_for_size(size);
        if args.json {
            let largest = Largest {
                strategy,
                size,
                largest_rank: largest_rank.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&largest)?);
        } else {
            println!("{largest_rank}");
        }
        return Ok(());
    }

    let Some(rank) = args.rank.as_ref() else {
        unreachable!()
    };
    let start_time = Instant::now();
    let permuted = engine.nth_permutation(&items, rank)?;
    info!(
        "permuted {size} items using the {strategy} strategy in {:.3}s",
        start_time.elapsed().as_millis() as f64 / 1_000.
    );

    if args.json {
        let permutation = Permutation {
            strategy,
            size,
            rank: rank.to_string(),
            permutation: permuted,
        };
        println!("{}", serde_json::to_string_pretty(&permutation)?);
    } else {
        println!("{}", permuted.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("permute").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn validate_sources() {
        assert!(parse(&["-s", "3", "-r", "1"]).validate().is_ok());
        assert!(parse(&["-i", "a,b", "-r", "2"]).validate().is_ok());
        assert!(parse(&["-r", "1"]).validate().is_err());
        assert!(parse(&["-s", "3", "-i", "a,b,c", "-r", "1"]).validate().is_err());
    }

    #[test]
    fn validate_rank() {
        assert!(parse(&["-s", "3"]).validate().is_err());
        assert!(parse(&["-s", "3", "-l"]).validate().is_ok());
    }

    #[test]
    fn parse_items_and_big_rank() {
        let args = parse(&["-i", "red,green,blue", "-r", "123456789012345678901234567890", "--direct"]);
        assert_eq!(vec!["red", "green", "blue"], args.items());
        assert_eq!(
            Some("123456789012345678901234567890".parse::<BigInt>().unwrap()),
            args.rank
        );
        assert_eq!(Strategy::Direct, args.strategy());
        assert_eq!(vec!["0", "1", "2"], parse(&["-s", "3", "-l"]).items());
    }

    #[test]
    fn json_output_names_strategy() {
        let permutation = Permutation {
            strategy: Strategy::Memoizing,
            size: 2,
            rank: "2".into(),
            permutation: vec!["b".into(), "a".into()],
        };
        assert_eq!(
            r#"{"strategy":"Memoizing","size":2,"rank":"2","permutation":["b","a"]}"#,
            serde_json::to_string(&permutation).unwrap()
        );

        let largest = Largest {
            strategy: Strategy::Direct,
            size: 3,
            largest_rank: "6".into(),
        };
        assert_eq!(
            r#"{"strategy":"Direct","size":3,"largest_rank":"6"}"#,
            serde_json::to_string(&largest).unwrap()
        );
    }
}
