use clap::{Parser, Subcommand, ValueEnum};
use cn_app::{
    AppResult, CallMode, Endpoint, LoadedNetwork, PublicityOrder, network_service,
    publicity_service,
};
use cn_core::AreaCode;
use cn_graph::{Client, Network, Trajectory};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cn-cli")]
#[command(about = "CallNet CLI - Telecom station network manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a network description and certify the resulting graph
    Check {
        /// Path to the network description (YAML or JSON)
        network_path: PathBuf,
    },
    /// List stations in a network
    Stations {
        /// Path to the network description (YAML or JSON)
        network_path: PathBuf,
    },
    /// Show the shortest trajectory between two stations
    Route {
        /// Path to the network description (YAML or JSON)
        network_path: PathBuf,
        /// Area code of the first station
        from: AreaCode,
        /// Area code of the last station
        to: AreaCode,
    },
    /// Place a call between two clients (e.g. 55-12345678 801-22334455)
    Call {
        /// Path to the network description (YAML or JSON)
        network_path: PathBuf,
        /// Caller as areaCode-XXXXXXXX
        from: Endpoint,
        /// Callee as areaCode-XXXXXXXX
        to: Endpoint,
        /// Use video when the route allows it
        #[arg(long)]
        video: bool,
    },
    /// Send publicity to every client, or to the clients of one station
    Publicity {
        /// Path to the network description (YAML or JSON)
        network_path: PathBuf,
        /// Order for a network-wide campaign
        #[arg(long, value_enum, conflicts_with = "station")]
        by: Option<OrderArg>,
        /// Only reach the clients of this station
        #[arg(long)]
        station: Option<AreaCode>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Phone,
    AreaCode,
}

impl From<OrderArg> for PublicityOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Phone => PublicityOrder::Phone,
            OrderArg::AreaCode => PublicityOrder::AreaCode,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { network_path } => cmd_check(&network_path),
        Commands::Stations { network_path } => cmd_stations(&network_path),
        Commands::Route {
            network_path,
            from,
            to,
        } => cmd_route(&network_path, from, to),
        Commands::Call {
            network_path,
            from,
            to,
            video,
        } => cmd_call(&network_path, from, to, video),
        Commands::Publicity {
            network_path,
            by,
            station,
        } => cmd_publicity(&network_path, by, station),
    }
}

fn load(network_path: &Path) -> AppResult<LoadedNetwork> {
    debug!(path = %network_path.display(), "loading network description");
    network_service::load_network(network_path)
}

fn cmd_check(network_path: &Path) -> AppResult<()> {
    println!("Checking network: {}", network_path.display());
    // Loading builds and certifies the graph; any defect surfaces as an error here
    let mut loaded = load(network_path)?;
    let summary = network_service::summarize(&mut loaded.network);
    let edges = loaded.network.quick_edges_size()?;
    info!(name = %loaded.name(), edges, "network certified");

    println!("✓ Network '{}' is valid", loaded.name());
    println!("  Stations: {}", summary.station_count);
    println!("  Clients: {}", summary.client_count);
    println!("  Links: {}", edges);
    Ok(())
}

fn cmd_stations(network_path: &Path) -> AppResult<()> {
    let loaded = load(network_path)?;
    let stations = network_service::list_stations(&loaded.network);

    if stations.is_empty() {
        println!("No stations found in network");
    } else {
        println!("Stations in network:");
        for station in stations {
            println!(
                "  {} - {} ({} clients, {} links)",
                station.area_code, station.name, station.client_count, station.degree
            );
        }
    }
    Ok(())
}

fn cmd_route(network_path: &Path, from: AreaCode, to: AreaCode) -> AppResult<()> {
    let mut network = load(network_path)?.network;
    let route = network.trajectory(from, to)?;
    debug!(%from, %to, hops = route.hops(), "trajectory computed");

    if route.is_empty() {
        println!("No trajectory between stations {} and {}", from, to);
    } else {
        println!("Trajectory between stations {} and {}:", from, to);
        print_route(&network, &route);
        println!("  Hops: {}", route.hops());
    }
    Ok(())
}

fn cmd_call(network_path: &Path, from: Endpoint, to: Endpoint, video: bool) -> AppResult<()> {
    let mut network = load(network_path)?.network;
    let plan = cn_app::place_call(&mut network, from, to)?;
    info!(%from, %to, mode = ?plan.mode(video), "call started");

    println!("This is the trajectory between the clients:");
    print_route(&network, &plan.route);

    if video && !plan.video_offered {
        println!("  Video is not available on a route of {} hops", plan.hops());
    }
    match plan.mode(video) {
        CallMode::Video => println!("✓ Video call in progress: {} -> {}", from, to),
        CallMode::Voice => println!("✓ Phone call in progress: {} -> {}", from, to),
    }
    Ok(())
}

fn cmd_publicity(
    network_path: &Path,
    by: Option<OrderArg>,
    station: Option<AreaCode>,
) -> AppResult<()> {
    let mut network = load(network_path)?.network;

    match station {
        Some(area_code) => {
            let clients = publicity_service::for_station(&network, area_code)?;
            print_clients(&clients);
            let name = network_service::get_station(&network, area_code)?.name();
            println!("✓ Sent publicity to all clients in {} : {}", area_code, name);
        }
        None => {
            let order = by.map_or(PublicityOrder::Phone, PublicityOrder::from);
            let clients = publicity_service::send(&mut network, order);
            debug!(?order, recipients = clients.len(), "publicity sent");
            print_clients(&clients);
            let described = match order {
                PublicityOrder::Phone => "phone number",
                PublicityOrder::AreaCode => "area code",
            };
            println!(
                "✓ Publicity was sent to all {} clients in order by their {}",
                clients.len(),
                described
            );
        }
    }
    Ok(())
}

fn print_route(network: &Network, route: &Trajectory) {
    let stops: Vec<String> = route
        .stations(network)
        .map(|station| format!("{} : {}", station.area_code(), station.name()))
        .collect();
    println!("  {}", stops.join(" --> "));
}

fn print_clients(clients: &[Client]) {
    for client in clients {
        println!("  {}", client);
    }
}
