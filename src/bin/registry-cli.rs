use clap::{Args, Parser, Subcommand};
use customer_registry_sdk::{CustomerDraft, RegistryClient};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "registry-cli")]
#[command(about = "Command-line client for the customer registry", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all customers
    List,
    /// Show a single customer
    Get { id: String },
    /// Add a new customer
    Create(CustomerArgs),
    /// Replace an existing customer's fields
    Update {
        id: String,
        #[command(flatten)]
        fields: CustomerArgs,
    },
    /// Delete a customer and print the remaining ones
    Delete { id: String },
}

#[derive(Args)]
struct CustomerArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long)]
    contacted: bool,
}

impl From<CustomerArgs> for CustomerDraft {
    fn from(args: CustomerArgs) -> Self {
        Self {
            name: args.name,
            role: args.role,
            email: args.email,
            phone: args.phone,
            contacted: args.contacted,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RegistryClient::new(&cli.url);

    match cli.command {
        Commands::List => print_json(&client.list().await?)?,
        Commands::Get { id } => print_json(&client.get(&id).await?)?,
        Commands::Create(fields) => print_json(&client.create(&fields.into()).await?)?,
        Commands::Update { id, fields } => {
            print_json(&client.update(&id, &fields.into()).await?)?
        }
        Commands::Delete { id } => print_json(&client.delete(&id).await?)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
