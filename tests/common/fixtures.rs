use chrono::NaiveDate;
use image::{ImageFormat, Rgba, RgbaImage};
use rentdesk::storefront::Product;
use rentdesk::{BrandingOptions, ColorScheme, TabularRow};
use std::io::Cursor;

/// The three-row price list used across the export tests.
pub fn price_rows() -> Vec<TabularRow> {
    [("A", 10), ("B", 20), ("C", 30)]
        .into_iter()
        .map(|(name, price)| TabularRow::new().with("name", name).with("price", price))
        .collect()
}

/// `n` rental records with a date column.
pub fn rental_rows(n: usize) -> Vec<TabularRow> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (0..n)
        .map(|i| {
            TabularRow::new()
                .with("rental_id", i as i64 + 1)
                .with("customer", format!("Customer {}", i + 1))
                .with("start_date", start + chrono::Days::new(i as u64))
                .with("total", 150.5 + i as f64)
        })
        .collect()
}

pub fn branding(company: &str) -> BrandingOptions {
    BrandingOptions {
        company_name: company.to_string(),
        contact_info: "tel: 555-0100".to_string(),
        color_scheme: ColorScheme::Default,
        ..Default::default()
    }
}

pub fn solid_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([40, 90, 160, 255]))
}

pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("PNG encoding of an in-memory image");
    out.into_inner()
}

pub fn product(id: u64, name: &str, category: &str, brand: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        price,
        deposit: price * 5.0,
        discount: None,
        is_available: true,
        description: format!("{} for rent", name),
        image: String::new(),
    }
}

/// A small catalog spanning two categories and three brands.
pub fn catalog() -> Vec<Product> {
    let mut products = vec![
        product(1, "Hammer drill", "tools", "Makita", 800.0),
        product(2, "Angle grinder", "tools", "Bosch", 500.0),
        product(3, "Concrete mixer", "construction", "Makita", 1500.0),
        product(4, "Tile cutter", "tools", "DeWalt", 650.0),
        product(5, "Scaffold tower", "construction", "Bosch", 2200.0),
        product(6, "Circular saw", "tools", "Makita", 700.0),
        product(7, "Jackhammer", "construction", "DeWalt", 1800.0),
        product(8, "Cordless screwdriver", "tools", "Bosch", 300.0),
    ];
    products[3].is_available = false;
    products
}
