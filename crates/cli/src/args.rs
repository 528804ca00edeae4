//! Argument parsing.
//!
//! `catalog-cli [FILE] [--reprice PRODUCT PRICE] [--yes]`

use std::path::PathBuf;

use anyhow::{bail, Context};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    /// Catalog file; falls back to `CATALOG_FILE`.
    pub file: Option<PathBuf>,
    pub reprice: Option<Reprice>,
    /// Accept markdowns without prompting.
    pub yes: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reprice {
    pub product: String,
    pub price: f64,
}

impl Args {
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--yes" | "-y" => parsed.yes = true,
                "--reprice" => {
                    let product = args.next().context("--reprice needs a product name")?;
                    let raw = args.next().context("--reprice needs a price")?;
                    let price = raw
                        .parse::<f64>()
                        .with_context(|| format!("invalid price: {raw}"))?;
                    parsed.reprice = Some(Reprice { product, price });
                }
                flag if flag.starts_with('-') => bail!("unknown option: {flag}"),
                _ if parsed.file.is_none() => parsed.file = Some(PathBuf::from(arg)),
                _ => bail!("unexpected argument: {arg}"),
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn no_arguments_means_defaults() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn file_and_reprice() {
        let args = parse(&["catalog.json", "--reprice", "Iphone 15", "199999.5", "-y"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("catalog.json")));
        assert_eq!(
            args.reprice,
            Some(Reprice {
                product: "Iphone 15".into(),
                price: 199999.5
            })
        );
        assert!(args.yes);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--reprice", "A"]).is_err());
        assert!(parse(&["--reprice", "A", "cheap"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
    }
}
