use catalog_admin::AdminConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Scriptable catalog administration console
#[derive(Parser, Debug)]
#[command(name = "catalog-admin", version)]
struct Cli {
    /// Config file (defaults to ./catalog-admin.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides config and API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token, overrides config and CATALOG_ADMIN_TOKEN
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with a phone number and print the token
    Login {
        phone: String,
        /// Store the token in the config file
        #[arg(long)]
        save: bool,
    },
    /// Dashboard statistics
    Stats,
    #[command(subcommand)]
    Products(ProductsCommand),
    #[command(subcommand)]
    Collections(CollectionsCommand),
    #[command(subcommand)]
    Users(UsersCommand),
}

#[derive(Subcommand, Debug)]
enum ProductsCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Create(ProductFields),
    /// Unspecified fields keep their current values
    Update {
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug, Default)]
struct ProductFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    collection_id: Option<i64>,
    #[arg(long)]
    image: Option<String>,
    /// Comma-separated, e.g. "P, M, G"
    #[arg(long)]
    sizes: Option<String>,
    /// Repeatable, as name=#hex
    #[arg(long = "color")]
    colors: Vec<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    model: Option<String>,
}

#[derive(Subcommand, Debug)]
enum CollectionsCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Products that belong to a collection
    Products {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    List,
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AdminConfig::load(cli.config.as_deref());
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(token) = cli.token {
        config.api.token = Some(token);
    }
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

    let client = config.client();

    match cli.command {
        Command::Login { phone, save } => {
            commands::login(&client, &phone).await?;
            if save {
                config.api.token = client.session().token();
                let path = cli.config.unwrap_or_else(|| PathBuf::from(catalog_admin::config::DEFAULT_CONFIG_FILE));
                config.save_to_file(&path)?;
                println!("Token salvo em {}", path.display());
            }
        }
        Command::Stats => commands::stats(client).await?,
        Command::Products(command) => match command {
            ProductsCommand::List { search } => commands::list_products(client, search).await?,
            ProductsCommand::Create(fields) => commands::create_product(client, fields).await?,
            ProductsCommand::Update { id, fields } => {
                commands::update_product(client, id, fields).await?
            }
            ProductsCommand::Delete { id } => commands::delete_product(client, id).await?,
        },
        Command::Collections(command) => match command {
            CollectionsCommand::List { search } => {
                commands::list_collections(client, search).await?
            }
            CollectionsCommand::Create { name, quantity } => {
                commands::create_collection(client, name, quantity).await?
            }
            CollectionsCommand::Update { id, name, quantity } => {
                commands::update_collection(client, id, name, quantity).await?
            }
            CollectionsCommand::Delete { id } => commands::delete_collection(client, id).await?,
            CollectionsCommand::Products { id } => {
                commands::collection_products(&client, &id).await?
            }
        },
        Command::Users(command) => match command {
            UsersCommand::List => commands::list_users(&client).await?,
            UsersCommand::Delete { id } => commands::delete_user(&client, &id).await?,
        },
    }

    Ok(())
}
