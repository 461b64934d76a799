use std::path::PathBuf;
use std::process;

use getopts::Options;

pub struct Args {
    pub input: PathBuf,
    pub pages: Vec<Page>,
    pub json: bool,
}

/// One output target: a template file and the document to write.
pub struct Page {
    pub template: PathBuf,
    pub output: PathBuf,
}

const DEFAULT_PAGES: [&str; 2] = [
    "templates/index.html:public/index.html",
    "templates/obs.html:public/obs.html",
];

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "i",
        "input",
        "Schedule CSV file to read [Default: timetable.csv]",
        "CSV_FILE",
    );
    opts.optmulti(
        "p",
        "page",
        "Page to generate, may be passed multiple times \
         [Default: templates/index.html:public/index.html and templates/obs.html:public/obs.html]",
        "TEMPLATE:OUTPUT",
    );
    opts.optflag(
        "j",
        "json",
        "Print the timetable as JSON to stdout instead of writing pages",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let input = matches
        .opt_str("input")
        .map_or_else(|| PathBuf::from("timetable.csv"), PathBuf::from);

    let mut specs = matches.opt_strs("page");
    if specs.is_empty() {
        specs = DEFAULT_PAGES.iter().map(|spec| spec.to_string()).collect();
    }

    let pages = specs
        .iter()
        .map(|spec| match parse_page(spec) {
            Some(page) => page,
            None => {
                eprintln!("Provided value for option 'page' is invalid: {spec} (expected TEMPLATE:OUTPUT)");
                process::exit(1);
            }
        })
        .collect();

    let json = matches.opt_present("json");

    Args { input, pages, json }
}

fn parse_page(spec: &str) -> Option<Page> {
    let (template, output) = spec.split_once(':')?;
    if template.is_empty() || output.is_empty() {
        return None;
    }

    Some(Page {
        template: PathBuf::from(template),
        output: PathBuf::from(output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_two_overlay_pages() {
        let args = parse(vec![]);
        assert_eq!(args.input, PathBuf::from("timetable.csv"));
        assert_eq!(args.pages.len(), 2);
        assert_eq!(args.pages[0].template, PathBuf::from("templates/index.html"));
        assert_eq!(args.pages[0].output, PathBuf::from("public/index.html"));
        assert!(!args.json);
    }

    #[test]
    fn explicit_pages_replace_the_defaults() {
        let args = parse(vec![
            "--input".to_string(),
            "shows.csv".to_string(),
            "--page".to_string(),
            "base.html:out/show.html".to_string(),
        ]);
        assert_eq!(args.input, PathBuf::from("shows.csv"));
        assert_eq!(args.pages.len(), 1);
        assert_eq!(args.pages[0].output, PathBuf::from("out/show.html"));
    }

    #[test]
    fn page_spec_requires_both_sides() {
        assert!(parse_page("only-template").is_none());
        assert!(parse_page(":out.html").is_none());
        assert!(parse_page("tmpl.html:").is_none());
        assert!(parse_page("tmpl.html:out.html").is_some());
    }
}
