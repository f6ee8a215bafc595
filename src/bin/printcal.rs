use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use printcal::{
    CalendarMonth, OrdinalTable, Orientation, PageOpts, PageSpec, calendar_rect, layout_month,
    parse_weekday,
};

#[derive(Parser, Debug)]
#[command(name = "printcal", version, about = "Render a printable one-month calendar as PDF")]
struct Cli {
    /// Year (defaults to the current year).
    #[arg(long)]
    year: Option<i32>,

    /// Month number 1-12 (defaults to the current month).
    #[arg(long)]
    month: Option<u32>,

    /// Output PDF path.
    #[arg(long, short = 'o', default_value = "calendar.pdf")]
    out: PathBuf,

    /// Paper preset (letter, legal, a4, label_4x6, label_4x8) or WIDTHxHEIGHT in points.
    #[arg(long, default_value = "letter", value_parser = parse_page_spec)]
    size: PageSpec,

    /// Page orientation (portrait or landscape). Presets default to landscape;
    /// explicit sizes are used as given.
    #[arg(long, value_parser = parse_orientation)]
    orientation: Option<Orientation>,

    /// Add ordinal suffixes ("1st", "2nd", ...) to day numbers.
    #[arg(long)]
    ordinals: bool,

    /// Weekday in the leftmost column.
    #[arg(long, default_value = "sunday", value_parser = parse_weekday_arg)]
    first_weekday: printcal::Weekday,

    /// JSON ordinal suffix table replacing the English one.
    #[arg(long)]
    ordinal_table: Option<PathBuf>,

    /// Print the computed layout as JSON to stdout instead of writing a PDF.
    #[arg(long)]
    dump_layout: bool,
}

fn parse_page_spec(s: &str) -> Result<PageSpec, String> {
    s.parse().map_err(|e: printcal::CalError| e.to_string())
}

fn parse_orientation(s: &str) -> Result<Orientation, String> {
    s.parse().map_err(|e: printcal::CalError| e.to_string())
}

fn parse_weekday_arg(s: &str) -> Result<printcal::Weekday, String> {
    parse_weekday(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("printcal=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let month = CalendarMonth::resolve(cli.year, cli.month)?;

    let orientation = match (cli.orientation, cli.size) {
        (Some(o), _) => Some(o),
        (None, PageSpec::Preset(_)) => Some(Orientation::Landscape),
        (None, PageSpec::Points { .. }) => None,
    };
    let page_size = cli.size.resolve(orientation)?;

    let ordinals = match &cli.ordinal_table {
        Some(path) => OrdinalTable::from_path(path)
            .with_context(|| format!("load ordinal table '{}'", path.display()))?,
        None => OrdinalTable::english(),
    };
    let opts = PageOpts {
        show_ordinals: cli.ordinals,
        first_weekday: cli.first_weekday,
        ordinals,
    };

    if cli.dump_layout {
        let layout = layout_month(month, opts.first_weekday, calendar_rect(page_size))?;
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    printcal::generate_page(month, &cli.out, page_size, &opts)
        .with_context(|| format!("render {month} to '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
