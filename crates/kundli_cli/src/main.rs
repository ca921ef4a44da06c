use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use kundli_config::{Settings, SettingsSource};
use kundli_ephem::{GeoLocation, MeanElementsEphemeris};
use kundli_search::{Chart, compute_chart, is_retrograde_at, retrograde_periods};
use kundli_time::Instant;
use kundli_vedic::{
    ALL_PLANETS, AyanamsaSetting, DashaRegistry, DashaSystemId, Planet, PlanetPosition,
    dasha_timeline, deg_to_dms, find_running_dasha, kattams_in_house_order, lahiri_ayanamsa_deg,
    nakshatra_from_longitude, rasi_from_longitude,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic chart CLI")]
struct Cli {
    /// Settings file (TOML); explicit flags override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart: ascendant, nine grahas, kattams
    Chart {
        /// UTC instant (RFC 3339 or YYYY-MM-DD[THH:MM:SS])
        #[arg(long)]
        date: String,
        /// Observer latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Fixed ayanamsa in degrees instead of the configured one
        #[arg(long)]
        ayanamsa: Option<f64>,
        /// Compute the grahas on one thread
        #[arg(long)]
        serial: bool,
        /// List kattams from house 1 instead of by rasi
        #[arg(long)]
        houses: bool,
    },
    /// Running dasha planet
    Dasha {
        /// Birth instant
        #[arg(long)]
        birth: String,
        /// Query instant (default: now)
        #[arg(long)]
        now: Option<String>,
        /// Dasha system name or numeric id
        #[arg(long)]
        system: Option<String>,
    },
    /// Every period of the dasha cycle containing the query instant
    DashaTimeline {
        #[arg(long)]
        birth: String,
        #[arg(long)]
        now: Option<String>,
        #[arg(long)]
        system: Option<String>,
    },
    /// Retrograde state at an instant, or retrograde periods in a window
    Retrograde {
        /// Planet name (Mercury, Ve, ...)
        #[arg(long)]
        planet: String,
        /// Single instant to test
        #[arg(long, conflicts_with_all = ["from", "to"])]
        date: Option<String>,
        /// Window start
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Window end
        #[arg(long, requires = "from")]
        to: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Lahiri ayanamsa at an instant
    Ayanamsa {
        #[arg(long)]
        date: String,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Decimal degrees to DMS
    Dms {
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

fn parse_instant(s: &str) -> Result<Instant> {
    Instant::parse(s).with_context(|| format!("invalid instant `{s}`"))
}

fn parse_planet(name: &str) -> Result<Planet> {
    let name = name.trim();
    ALL_PLANETS
        .iter()
        .copied()
        .find(|p| p.name().eq_ignore_ascii_case(name) || p.short_name().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("unknown planet `{name}`"))
}

fn resolve_system(
    registry: &DashaRegistry,
    system: Option<&str>,
    settings: &Settings,
) -> Result<DashaSystemId> {
    let Some(system) = system else {
        return Ok(settings.dasha_system());
    };
    if let Ok(id) = system.trim().parse::<u16>() {
        return Ok(registry.get(DashaSystemId(id))?.id);
    }
    registry
        .find_by_name(system.trim())
        .map(|t| t.id)
        .ok_or_else(|| anyhow!("unknown dasha system `{system}`"))
}

fn resolve_location(settings: &Settings, lat: Option<f64>, lon: Option<f64>) -> Result<GeoLocation> {
    let fallback = settings.default_location();
    let location = GeoLocation::new(
        lat.unwrap_or(fallback.latitude_deg),
        lon.unwrap_or(fallback.longitude_deg),
    );
    location.validate()?;
    Ok(location)
}

fn print_position(p: &PlanetPosition) {
    println!(
        "{:<10} {:<10} {:>12}  {:<16} pada {}  house {:>2}{}",
        p.name(),
        p.rasi.name(),
        deg_to_dms(p.advanced_by_deg).to_string(),
        p.nakshatra.name(),
        p.pada,
        p.house,
        if p.retrograde { "  (R)" } else { "" }
    );
}

fn print_chart(chart: &Chart, houses: bool) {
    println!(
        "{}  lat {:.4}  lon {:.4}",
        chart.instant, chart.location.latitude_deg, chart.location.longitude_deg
    );
    println!(
        "Ayanamsa: {:.6} deg ({})",
        chart.ayanamsa_deg,
        deg_to_dms(chart.ayanamsa_deg)
    );
    println!();
    print_position(&chart.ascendant);
    for p in &chart.planets {
        print_position(p);
    }
    println!();

    let cells: Vec<_> = if houses {
        kattams_in_house_order(&chart.kattams)
    } else {
        chart.kattams.iter().collect()
    };
    for k in cells {
        let occupants: Vec<&str> = k.planets.iter().map(|p| p.short_name()).collect();
        println!(
            "{:>2} {:<10} lord {:<8} house {:>2}{:<5} {}",
            k.order,
            k.rasi.name(),
            k.owner.name(),
            k.house,
            if k.is_ascendant { " Asc" } else { "" },
            occupants.join(" ")
        );
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_ref())?;
    debug!(?settings, "active settings");
    let provider = MeanElementsEphemeris::new();

    match cli.command {
        Commands::Chart {
            date,
            lat,
            lon,
            ayanamsa,
            serial,
            houses,
        } => {
            let instant = parse_instant(&date)?;
            let location = resolve_location(&settings, lat, lon)?;
            let mut config = settings.chart_config();
            if let Some(deg) = ayanamsa {
                config.ayanamsa = AyanamsaSetting::Fixed(deg);
            }
            config.parallel &= !serial;
            let chart = compute_chart(&provider, &instant, &location, &config)?;
            print_chart(&chart, houses);
        }

        Commands::Dasha { birth, now, system } => {
            let registry = DashaRegistry::builtin();
            let id = resolve_system(&registry, system.as_deref(), &settings)?;
            let birth = parse_instant(&birth)?;
            let now = now.as_deref().map(parse_instant).transpose()?.unwrap_or_else(Instant::now);
            let planet = find_running_dasha(&registry, &birth, &now, id)?;
            let table = registry.get(id)?;
            println!("{} dasha at {now}: {}", table.name, planet.name());
        }

        Commands::DashaTimeline { birth, now, system } => {
            let registry = DashaRegistry::builtin();
            let id = resolve_system(&registry, system.as_deref(), &settings)?;
            let table = registry.get(id)?;
            let birth = parse_instant(&birth)?;
            let now = now.as_deref().map(parse_instant).transpose()?.unwrap_or_else(Instant::now);
            println!("{} ({} years)", table.name, table.cycle_years);
            for period in dasha_timeline(table, &birth, &now)? {
                let marker = if period.is_running {
                    format!("  <- running, {:.0} days left", period.remaining_days(&now))
                } else {
                    String::new()
                };
                println!(
                    "{:<8} {}  {}{marker}",
                    period.planet.name(),
                    period.start.datetime().format("%Y-%m-%d"),
                    period.end.datetime().format("%Y-%m-%d"),
                );
            }
        }

        Commands::Retrograde {
            planet,
            date,
            from,
            to,
            lat,
            lon,
        } => {
            let planet = parse_planet(&planet)?;
            let location = resolve_location(&settings, lat, lon)?;
            let config = settings.retrograde_config();
            match (date, from, to) {
                (Some(date), _, _) => {
                    let instant = parse_instant(&date)?;
                    let retro = is_retrograde_at(&provider, planet, &location, &instant, &config)?;
                    println!(
                        "{} at {instant}: {}",
                        planet.name(),
                        if retro { "retrograde" } else { "direct" }
                    );
                }
                (None, Some(from), Some(to)) => {
                    let start = parse_instant(&from)?;
                    let end = parse_instant(&to)?;
                    let periods =
                        retrograde_periods(&provider, planet, &location, &start, &end, &config)?;
                    if periods.is_empty() {
                        println!("{}: no retrograde periods", planet.name());
                    }
                    for p in periods {
                        println!(
                            "{:<8} {}  {}  ({:.1} days)",
                            planet.name(),
                            p.start,
                            p.end,
                            p.end.days_since(&p.start)
                        );
                    }
                }
                _ => bail!("give either --date or both --from and --to"),
            }
        }

        Commands::Ayanamsa { date } => {
            let instant = parse_instant(&date)?;
            let deg = lahiri_ayanamsa_deg(&instant)?;
            println!("Lahiri at {instant}: {deg:.6} deg ({})", deg_to_dms(deg));
        }

        Commands::Rashi { lon } => {
            let info = rasi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rasi.name(),
                info.rasi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rasi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (number {}) - Pada {} ({:.1}% traversed)",
                info.nakshatra.name(),
                info.nakshatra.number(),
                info.pada,
                info.fraction * 100.0
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            let sign = if d.negative { "-" } else { "" };
            println!("{sign}{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
