mod input;
mod logging;
mod options;

use std::{
    io::{self, BufWriter, Write},
    ops::Deref,
    path::PathBuf,
    process,
};

use argh::FromArgs;
use rankmerge::{Item, Merger};

#[derive(FromArgs)]
/// Merge locally ranked result lists into one globally ranked list.
/// Input lines are of form `<points>\t<text>`, lower points rank first.
struct Cli {
    /// input files, one result list per file, stdin if none
    #[argh(positional)]
    files: Vec<PathBuf>,

    /// pool the input and split it to this many worker lists
    #[argh(option, short = 'w')]
    workers: Option<usize>,

    /// concatenate lists in input order instead of merging by rank
    #[argh(switch, short = 'u')]
    unsorted: bool,

    /// reverse the unsorted output
    #[argh(switch)]
    tac: bool,

    /// global position of the first item to print
    #[argh(option, short = 'o', default = "0")]
    offset: usize,

    /// number of items to print, 0 prints all
    #[argh(option, short = 'n')]
    count: Option<usize>,

    /// configuration file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// turn debugging information on
    #[argh(switch, short = 'd')]
    debug: bool,
}

fn main() {
    let cli: Cli = argh::from_env();

    if let Err(e) = run(cli) {
        log::error!("{e:?}");
        eprintln!("rmerge: {e:?}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut opts = options::read_config(cli.config.as_deref())?;
    if let Some(workers) = cli.workers {
        opts.workers = workers;
    }
    if let Some(count) = cli.count {
        opts.count = count;
    }
    opts.sorted &= !cli.unsorted;
    opts.tac |= cli.tac;

    logging::setup(cli.debug, &opts.log_file)?;
    log::info!("Starting with {opts:?}");

    let mut lists = input::read_lists(&cli.files)?;
    if opts.workers > 0 {
        lists = input::split(lists, opts.workers);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if opts.sorted {
        let lists = input::sort_lists(lists);
        print(&lists, &opts, cli.offset, &mut out)?;
    } else {
        print(&lists, &opts, cli.offset, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn print<L, W>(
    lists: &[L],
    opts: &options::Options,
    offset: usize,
    out: &mut W,
) -> anyhow::Result<()>
where
    L: Deref<Target = [Item]>,
    W: Write,
{
    let merger = Merger::new(lists, opts.sorted).tac(opts.tac);
    let count = if opts.count == 0 {
        merger.len()
    } else {
        opts.count
    };

    for item in merger.window(offset, count) {
        writeln!(out, "{}\t{}", item.points(), item.text())?;
    }

    log::info!(
        "Printed window {offset}+{count} of {} items, merged {}",
        merger.len(),
        merger.realized()
    );
    Ok(())
}
