use clap::{Parser, Subcommand};
use goi_manager_client::{lcd::LcdQueryClient, GoiManagerConfig, GoiManagerQueryClient};

#[derive(Subcommand, Debug)]
enum Query {
    /// Active management fees
    ManagementInfo,
    /// Management record of a contract
    ManagedContract {
        /// Address of the managed contract
        contract: String,
    },
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Overrides GOI_MANAGER_LCD_URL
    #[arg(short, long)]
    lcd_url: Option<String>,
    #[command(subcommand)]
    query: Query,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Arguments::parse();

    let mut config = GoiManagerConfig::from_env()?;
    if let Some(lcd_url) = args.lcd_url {
        config = config.with_lcd_url(lcd_url);
    }
    let lcd = LcdQueryClient::from_config(&config)?;
    let manager = GoiManagerQueryClient::from_config(lcd, &config);

    let res = match args.query {
        Query::ManagementInfo => {
            serde_json::to_string_pretty(&manager.get_management_info().await?)?
        }
        Query::ManagedContract { contract } => {
            serde_json::to_string_pretty(&manager.get_managed_contract(contract).await?)?
        }
    };
    println!("{res}");
    Ok(())
}
