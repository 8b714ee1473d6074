// src/cli.rs
//
// Headless front: fetch (or read) the feed, build the catalog, apply a
// filter, write the matching records as delimited text.

use std::{env, fs, path::PathBuf};

use crate::config::options::{FeedOptions, FeedSource};
use crate::csv::Delim;
use crate::feed;
use crate::filter::{self, FilterSelection};

pub struct Params {
    pub feed: FeedOptions,
    pub filter: FilterSelection,
    pub list_facets: bool,
    pub out: Option<PathBuf>,
    pub format: Delim,
    pub include_headers: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            feed: FeedOptions::default(),
            filter: FilterSelection::default(),
            list_facets: false,
            out: None,
            format: Delim::Csv,
            include_headers: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    let (text, cached) = feed::fetch_or_cached(&params.feed, None)?;
    if cached {
        eprintln!("Note: feed fetch failed, using cached snapshot");
    }
    let catalog = feed::ingest(&text);

    if params.list_facets {
        for (name, slugs) in [
            ("category", catalog.facets.category.iter().cloned().collect::<Vec<_>>()),
            ("style", catalog.facets.style.iter().cloned().collect()),
            ("size", catalog.facets.sizes_ordered().iter().map(|s| s!(*s)).collect()),
        ] {
            println!("{}: {}", name, slugs.join(", "));
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = catalog
        .records
        .iter()
        .filter(|r| filter::matches(r, &params.filter))
        .map(|r| {
            vec![
                r.id.clone(),
                r.name.clone(),
                r.price_display(),
                r.size_text.clone(),
                if r.sold { s!("yes") } else { s!() },
            ]
        })
        .collect();

    let headers = params
        .include_headers
        .then(|| ["id", "name", "price", "size", "sold"].iter().map(|h| s!(*h)).collect());

    let out = crate::csv::rows_to_string(&rows, &headers, params.format);

    match &params.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, out)?;
            eprintln!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => print!("{}", out),
    }

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--feed" => {
                let v = args.next().ok_or("Missing value for --feed")?;
                params.feed.source = if v.contains("://") {
                    let (host, path) = crate::net::split_url(&v)?;
                    FeedSource::Remote { host, path }
                } else {
                    FeedSource::File(PathBuf::from(v))
                };
            }
            "--filter" | "-f" => {
                let v = args.next().ok_or("Missing value for --filter")?;
                params.filter = FilterSelection::parse_fragment(&v);
            }
            "--facets" => params.list_facets = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}
