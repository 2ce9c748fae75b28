mod input;

use landing_app::domain::ProductData;
use landing_app::{AppConfig, AppContext};
use landing_errors::AppError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run().await {
        Ok(path) => {
            println!("\nLanding page generated successfully: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("Generation failed: {:?}", e);
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<PathBuf, AppError> {
    let config = AppConfig::from_env()?;
    print_config(&config);

    let ctx = AppContext::new_openrouter(config)?;

    let product = match std::env::args().nth(1) {
        Some(path) => input::read_product_file(Path::new(&path))?,
        None => {
            let stdin = std::io::stdin();
            input::prompt_product(&mut stdin.lock(), &mut std::io::stdout())?
        }
    };

    let html = ctx
        .render_landing_page
        .render(&product, &ctx.config.store_name)
        .await?;

    std::fs::create_dir_all(&ctx.config.output_dir)?;
    let output_path = ctx
        .config
        .output_dir
        .join(input::output_file_name(&product.name));
    std::fs::write(&output_path, html)?;
    tracing::info!("Wrote {}", output_path.display());

    print!("{}", summary(&product));
    Ok(output_path)
}

fn print_config(config: &AppConfig) {
    println!("\nConfiguration:");
    println!("{}", "-".repeat(50));
    println!("OPENROUTER_API_KEY: {}", config.masked_api_key());
    println!("STORE_NAME: {}", config.store_name);
    println!("OUTPUT_DIR: {}", config.output_dir.display());
    println!("{}", "-".repeat(50));
}

fn summary(product: &ProductData) -> String {
    let rule = "-".repeat(50);
    format!(
        "\nPreview of generated content:\n{rule}\nProduct: {}\nPrice: {}\nStock: {} units\n{rule}\n",
        product.name, product.price, product.stock_quantity
    )
}

fn failure_message(err: &AppError) -> String {
    if err.is_validation() {
        format!("Invalid product data: {}", err.user_message())
    } else {
        format!("Error generating landing page: {}", err.user_message())
    }
}
