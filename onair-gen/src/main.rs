mod cli;
mod records;

use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use log::{info, warn};

use onair_parser::{parse_schedule, Timetable};

/// Placeholder every page template must contain; replaced by the
/// rendered timetable fragment.
const MARKER: &str = "{{timetable}}";

fn main() {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());

    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn run(args: &cli::Args) -> Result<()> {
    let records = records::read_records(&args.input)?;
    let entries = parse_schedule(&records)
        .with_context(|| format!("could not parse {}", args.input.display()))?;
    let timetable = Timetable::build(&entries)
        .with_context(|| format!("could not build a timetable from {}", args.input.display()))?;

    info!("parsed {} schedule entries", entries.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timetable)?);
        return Ok(());
    }

    let fragment = timetable.to_html();

    // Render every page before writing any of them: a missing template
    // must not leave a partial set of outputs behind.
    let documents = args
        .pages
        .iter()
        .map(|page| Ok((page, render_page(page, &fragment)?)))
        .collect::<Result<Vec<_>>>()?;

    for (page, document) in documents {
        if let Some(parent) = page.output.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        fs::write(&page.output, document)
            .with_context(|| format!("could not write {}", page.output.display()))?;
        info!("wrote {}", page.output.display());
    }

    Ok(())
}

fn render_page(page: &cli::Page, fragment: &str) -> Result<String> {
    let template = fs::read_to_string(&page.template)
        .with_context(|| format!("could not read template {}", page.template.display()))?;

    if !template.contains(MARKER) {
        warn!(
            "{} does not contain the {MARKER} marker, writing it unchanged",
            page.template.display()
        );
    }

    Ok(template.replace(MARKER, fragment))
}

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "onair_gen=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}
