mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use tracing::{debug, info};

use gluster_repo_resolver::{
    Catalog, DEFAULT_RELEASE, OsFamily, Provider, RepositoryDescriptor, RequestParameters,
    helpers::choose_one, provider_for, repositories,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Resolve the GlusterFS package repository for a host")]
pub struct Args {
    /// Host OS family (osfamily fact)
    #[arg(long, default_value = "Debian")]
    pub os_family: String,

    /// Distribution codename, e.g. bookworm
    #[arg(long, required_unless_present = "list")]
    pub codename: Option<String>,

    /// Package architecture, e.g. amd64
    #[arg(long, required_unless_present = "list")]
    pub arch: Option<String>,

    /// GlusterFS release [default: LATEST]
    #[arg(long, conflicts_with = "pick")]
    pub release: Option<String>,

    /// APT pin priority applied to the source
    #[arg(long)]
    pub priority: Option<String>,

    /// Release catalog JSON file (overrides $GLUSTER_REPO_CATALOG)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Choose the release from a menu
    #[arg(long)]
    pub pick: bool,

    /// List catalogued releases and exit
    #[arg(long)]
    pub list: bool,

    /// Print the descriptor (and log events) as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// A tiny wrapper to render the final descriptor cleanly
fn print_descriptor(descriptor: &RepositoryDescriptor) {
    println!("=== Repository ===");
    println!("Name:     {}", descriptor.name());
    println!("Section:  {}", descriptor.repo_section());
    println!("Location: {}", descriptor.location());
    match descriptor.key() {
        Some(key) => {
            println!("Key:");
            println!("  id:     {}", key.id());
            println!("  source: {}", key.key_source());
        }
        None => println!("Key:      <none>"),
    }
    println!("Pin:      {}", descriptor.pin().unwrap_or("<none>"));
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup_logging(&args)?;

    let catalog = Catalog::load(args.catalog.as_deref()).context("load release catalog")?;
    let catalog = repositories::install(catalog)?;

    if args.list {
        for entry in catalog.entries() {
            let archs = entry.supported_architectures().iter().cloned().collect::<Vec<_>>().join(", ");
            let archived = if entry.is_archived() { " (archived)" } else { "" };
            println!("{}{archived}: {archs}", entry.release_id());
        }
        return Ok(());
    }

    let (Some(codename), Some(arch)) = (args.codename.clone(), args.arch.clone()) else {
        bail!("--codename and --arch are required");
    };

    let release = if args.pick {
        choose_one("Select GlusterFS Release", catalog.releases().collect::<Vec<_>>())?
    } else {
        args.release.clone().unwrap_or_else(|| DEFAULT_RELEASE.to_string())
    };

    let mut params = RequestParameters::new(codename, arch).with_release(release);
    if let Some(priority) = &args.priority {
        params = params.with_priority(priority);
    }

    let family = OsFamily::from(args.os_family.as_str());
    let provider = provider_for(&family, catalog)?;
    debug!("using the {} provider for OS family {family}", provider.family());
    let descriptor = provider.resolve(&params)?;

    info!("resolved {} for {} on {}", descriptor.name(), params.architecture, params.distro_codename);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptor)?);
    } else {
        print_descriptor(&descriptor);
    }

    Ok(())
}
