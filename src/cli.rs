// src/cli.rs
use std::{env, error::Error, fs, path::{Path, PathBuf}};

use crate::{
    config::{consts::CONFIG_FILE, file, options::AppOptions},
    listing::TextColumn,
    pipeline,
    progress::{Progress, Stage},
    render,
};

pub const HELP: &str = include_str!("cli_help.txt");

/// Flag values; `None` means "keep what the config file says".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub source: Option<String>,
    pub out: Option<String>,
    pub key_column: Option<TextColumn>,
    pub locale: Option<String>,
    pub title: Option<String>,
    pub fragment: bool,
    pub config: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(v) = &self.source { opts.source = v.clone(); }
        if let Some(v) = &self.out { opts.output.set_path(v); }
        if let Some(v) = self.key_column { opts.key_column = v; }
        if let Some(v) = &self.locale { opts.locale = v.clone(); }
        if let Some(v) = &self.title { opts.output.title = v.clone(); }
        if self.fragment { opts.output.fragment_only = true; }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Render(Overrides),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error + Send + Sync>>
where
    I: IntoIterator<Item = String>,
{
    let mut o = Overrides::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--source" => o.source = Some(args.next().ok_or("Missing value for --source")?),
            "-o" | "--out" => o.out = Some(args.next().ok_or("Missing output path")?),
            "--key-column" => {
                let v = args.next().ok_or("Missing value for --key-column")?;
                o.key_column = Some(v.parse::<TextColumn>()?);
            }
            "--locale" => o.locale = Some(args.next().ok_or("Missing value for --locale")?),
            "--title" => o.title = Some(args.next().ok_or("Missing value for --title")?),
            "--fragment" => o.fragment = true,
            "-c" | "--config" => {
                o.config = Some(PathBuf::from(args.next().ok_or("Missing config path")?));
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(Command::Render(o))
}

/// Config file (explicit or default) with flags layered on top.
pub fn resolve_options(o: &Overrides) -> Result<AppOptions, Box<dyn Error + Send + Sync>> {
    let mut opts = match &o.config {
        Some(p) if !p.exists() => return Err(format!("Config file not found: {}", p.display()).into()),
        Some(p) => file::load(p)?,
        None => file::load(Path::new(CONFIG_FILE))?,
    };
    o.apply(&mut opts);
    Ok(opts)
}

/// Prints pipeline stages to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage, detail: &str) {
        eprintln!("  {:<6} {}", stage.label(), detail);
    }
}

/// One fetch, one render, one file. Nothing is written when the fetch fails.
pub fn render_to_file(opts: &AppOptions) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let mut prog = CliProgress;
    let listing = pipeline::run(opts, Some(&mut prog))?;

    let html = if opts.output.fragment_only {
        render::render_table(&listing)
    } else {
        render::render_page(&listing, &opts.page())
    };

    let path = opts.output.out_path();
    crate::log::ensure_parent_dir(&path)?;
    fs::write(&path, html)?;
    logf!("Render: wrote {}", path.display());
    Ok(path)
}

pub fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Render(o) => {
            let opts = resolve_options(&o)?;
            let path = render_to_file(&opts)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
