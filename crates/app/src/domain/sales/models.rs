//! Sales Models

use crate::domain::products::records::ProductId;

/// Units sold per product, straight from the movement log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldQuantity {
    pub product: ProductId,
    pub product_name: String,
    pub quantity: i64,
}

/// Sales value of one product, in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product: ProductId,
    pub product_name: String,
    pub quantity_sold: u64,
    pub unit_price: u64,
    pub total_value: u64,
}
