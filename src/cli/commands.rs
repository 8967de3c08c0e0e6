use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use console::{style, Emoji};
use tracing::{error, info};

use crate::{
    cli::args::*,
    services::PricingService,
    utils::{
        formatting::{format_quote_table, format_total},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");

pub struct CliApp {
    config: Config,
    pricing_service: Arc<PricingService>,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        let pricing_service = Arc::new(PricingService::new(config.price_policy()));
        Self {
            config,
            pricing_service,
        }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Demo => self.handle_demo(),
            Commands::Quote { file, flat, json } => self.handle_quote(&file, flat, json),
            Commands::Check { file } => self.handle_check(&file),
        }
    }

    fn handle_demo(&self) -> Result<()> {
        println!("{} {}", PACKAGE, style("Composite pricing demo").bold().cyan());

        let catalog = self.pricing_service.demo_catalog();
        let quote = self.pricing_service.quote(&catalog, true);

        println!("{}", format_quote_table(&quote, self.config.price_precision));
        println!(
            "{} Products and boxes are priced through the same call",
            INFO
        );
        Ok(())
    }

    fn handle_quote(&self, file: &Path, flat: bool, json: bool) -> Result<()> {
        let catalog = self
            .pricing_service
            .load_catalog(file)
            .with_context(|| format!("Failed to load catalog {}", file.display()))?;

        let quote = self.pricing_service.quote(&catalog, flat);
        if json {
            let output = serde_json::to_string_pretty(&quote).context("Failed to serialize quote")?;
            println!("{}", output);
            return Ok(());
        }

        if quote.lines.is_empty() {
            println!("{} Catalog is empty", INFO);
        } else {
            println!("{}", format_quote_table(&quote, self.config.price_precision));
        }
        println!("{}", format_total(quote.total, self.config.price_precision));

        info!("Quoted catalog {}", file.display());
        Ok(())
    }

    fn handle_check(&self, file: &Path) -> Result<()> {
        match self.pricing_service.load_catalog(file) {
            Ok(catalog) => {
                let (products, boxes) = catalog.counts();
                println!(
                    "{} Catalog is valid: {} products, {} boxes",
                    CHECKMARK,
                    style(products).green(),
                    style(boxes).green()
                );
                Ok(())
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                error!("Catalog check failed: {}", e);
                Err(e).with_context(|| format!("Catalog {} is invalid", file.display()))
            }
        }
    }
}
