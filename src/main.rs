use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagegrep::{
    cli::{Cli, Command, ReplArgs, SearchArgs},
    corpus,
    document::Document,
    error::{Error, Result},
    pages::PageConfig,
    report, search,
};

fn init_tracing(verbose: u8) {
    let filter = if let Ok(env) = std::env::var("PAGEGREP_LOG") {
        EnvFilter::new(env)
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Search(args) => cmd_search(&args),
        Command::Repl(args) => cmd_repl(&args),
        Command::Completions(args) => {
            args.generate();
            Ok(())
        }
    }
}

fn load_corpus(
    files: &[PathBuf],
    dir: Option<&Path>,
    max_jump: u32,
) -> Result<Vec<Document>> {
    let mut paths = files.to_vec();
    if let Some(dir) = dir {
        paths.extend(corpus::discover_books(dir)?);
    }
    if paths.is_empty() {
        return Err(Error::Config(
            "no book files given; pass paths or --dir".into(),
        ));
    }

    let config = PageConfig { max_jump };
    Ok(corpus::load_documents(&paths, &config))
}

fn cmd_search(args: &SearchArgs) -> Result<()> {
    let documents =
        load_corpus(&args.files, args.dir.as_deref(), args.max_jump)?;
    let results = search::search(&documents, &args.keyword);

    if args.json {
        println!("{}", report::render_json(&results, &args.keyword)?);
    } else {
        print!("{}", report::render_table(&results, &args.keyword));
    }

    if let Some(index) = args.context {
        println!("{}", report::context_for(&results, index)?);
    }

    Ok(())
}

fn cmd_repl(args: &ReplArgs) -> Result<()> {
    let documents =
        load_corpus(&args.files, args.dir.as_deref(), args.max_jump)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let keyword = prompt(&mut input, "Enter keyword: ")?;
    let keyword = keyword.trim();
    let results = search::search(&documents, keyword);
    print!("{}", report::render_table(&results, keyword));

    loop {
        let line =
            prompt(&mut input, "Result number for context (blank to quit): ")?;
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("q") {
            break;
        }
        match line.parse::<usize>() {
            Ok(index) => match report::context_for(&results, index) {
                Ok(context) => println!("{context}\n"),
                Err(err) => eprintln!("{err}"),
            },
            Err(_) => eprintln!("not a result number: {line}"),
        }
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
