use airport_client::{codec, ClientConfig, RestClient};
use clap::{Parser, Subcommand};
use log::info;

mod output;

#[derive(Parser)]
#[command(name = "airport-cli")]
#[command(about = "Browse passengers, aircraft and airports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of one line per entry
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all passengers
    Passengers,
    /// List all aircraft
    Aircraft,
    /// List airports, optionally filtered
    Airports {
        /// Only airports in this city
        #[arg(long, conflicts_with = "aircraft_id")]
        city_id: Option<i64>,

        /// Only airports this aircraft uses
        #[arg(long)]
        aircraft_id: Option<i64>,
    },
    /// Count everything the service knows about
    Summary,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the environment may already be set
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    info!("Using airport service at {}", config.base_url);
    let client = RestClient::with_config(&config)?;

    match cli.command {
        Commands::Passengers => {
            let passengers = client.get_all_passengers().await;
            if cli.json {
                println!("{}", codec::to_json(&passengers)?);
            } else {
                output::passengers(&passengers);
            }
        }
        Commands::Aircraft => {
            let aircraft = client.get_all_aircraft().await;
            if cli.json {
                println!("{}", codec::to_json(&aircraft)?);
            } else {
                output::aircraft(&aircraft);
            }
        }
        Commands::Airports {
            city_id,
            aircraft_id,
        } => {
            let airports = match (city_id, aircraft_id) {
                (Some(city_id), _) => client.get_airports_by_city_id(city_id).await,
                (None, Some(aircraft_id)) => client.get_airports_by_aircraft(aircraft_id).await,
                (None, None) => client.get_all_airports().await,
            };
            if cli.json {
                println!("{}", codec::to_json(&airports)?);
            } else {
                output::airports(&airports);
            }
        }
        Commands::Summary => {
            let (passengers, aircraft, airports) = futures::join!(
                client.get_all_passengers(),
                client.get_all_aircraft(),
                client.get_all_airports()
            );
            println!("Passengers: {}", passengers.len());
            println!("Aircraft: {}", aircraft.len());
            println!("Airports: {}", airports.len());
        }
    }

    Ok(())
}
