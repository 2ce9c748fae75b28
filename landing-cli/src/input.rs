use landing_app::domain::ProductData;
use landing_errors::AppError;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn read_product_file(path: &Path) -> Result<ProductData, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::InvalidFormat(format!("{}: {}", path.display(), e)))
}

/// Asks for each product field on `output` and reads the answers from `input`.
pub fn prompt_product<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ProductData, AppError> {
    writeln!(output, "\nEnter product details:")?;
    writeln!(output, "{}", "-".repeat(50))?;

    let name = ask(input, output, "Product name: ")?;
    let description = ask(input, output, "Product description: ")?;
    let price = ask(input, output, "Product price: ")?;

    if name.is_empty() || description.is_empty() || price.is_empty() {
        return Err(AppError::InvalidArgument(
            "product name, description, and price are required".to_string(),
        ));
    }

    let main_image = ask(input, output, "Main image URL (optional): ")?;
    let gallery = ask(input, output, "Gallery image URLs (comma-separated, optional): ")?;
    let stock = ask(input, output, "Stock quantity (default 0): ")?;

    Ok(ProductData::new(name, description, price)
        .with_main_image(Some(main_image))
        .with_gallery_images(parse_gallery(&gallery))
        .with_stock_quantity(parse_stock(&stock)?))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String, AppError> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn parse_gallery(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_stock(raw: &str) -> Result<u32, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map_err(|_| {
        AppError::InvalidFormat(format!(
            "stock quantity '{}' must be a whole number of 0 or more",
            raw
        ))
    })
}

/// `product_{slug}.html`, with the slug's hyphens turned into underscores.
pub fn output_file_name(product_name: &str) -> String {
    format!("product_{}.html", slug::slugify(product_name).replace('-', "_"))
}
