use clap::Parser;
use sdntopo_rs::run::{NetRunner, SnapshotRunner};
use sdntopo_rs::topo::{
    DEFAULT_TOPO_FILE, SDNIP_TOPO, TopoError, TopoParams, TopoRegistry, build_network,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Debug, Parser)]
#[command(
    name = "sdntopo",
    about = "Build an SDN emulator topology from a topology file"
)]
struct Args {
    /// Registered topology key
    #[arg(long, default_value = SDNIP_TOPO)]
    topo: String,

    /// Topology file (relative to the working directory)
    #[arg(long, default_value = DEFAULT_TOPO_FILE)]
    file: PathBuf,

    /// Write a JSON snapshot of the built topology
    #[arg(long)]
    json: Option<PathBuf>,

    /// List registered topology keys and exit
    #[arg(long)]
    list: bool,
}

fn run(args: Args) -> Result<(), TopoError> {
    let registry = TopoRegistry::default();
    if args.list {
        for key in registry.keys() {
            println!("{key}");
        }
        return Ok(());
    }

    let params = TopoParams { file: args.file };
    let topo = registry.create(&args.topo, &params)?;
    let net = build_network(topo.as_ref())?;

    let mut runner = SnapshotRunner::new(args.json);
    runner.run(&net)?;

    println!(
        "topology={} hosts={} switches={} links={}",
        args.topo,
        net.host_count(),
        net.switch_count(),
        net.links().len()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "拓扑构建失败");
            ExitCode::FAILURE
        }
    }
}
