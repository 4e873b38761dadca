//! Stock aggregation.

use std::collections::BTreeMap;

use crate::domain::{
    products::records::ProductId,
    sizes::records::SizeRecord,
    stock::models::{ProductStock, SizeQuantity, StockLevelRow},
};

/// Groups join rows into one [`ProductStock`] per product, in product id order.
///
/// Sized products keep only the sizes that have a stock row; rows without a
/// size are ignored for them. Simple products sum their quantities.
#[must_use]
pub fn group_product_stock(rows: impl IntoIterator<Item = StockLevelRow>) -> Vec<ProductStock> {
    let mut products: BTreeMap<ProductId, ProductStock> = BTreeMap::new();

    for row in rows {
        let quantity = i64::from(row.quantity.unwrap_or(0));

        let stock = products.entry(row.product).or_insert_with(|| {
            ProductStock::empty(row.product, row.product_name.clone(), row.has_sizes)
        });

        match stock {
            ProductStock::Sized { sizes, .. } => {
                if let (Some(size), Some(name)) = (row.size, row.size_name) {
                    sizes.push(SizeQuantity {
                        size,
                        name,
                        quantity,
                    });
                }
            }
            ProductStock::Simple {
                quantity: total, ..
            } => *total += quantity,
        }
    }

    products
        .into_values()
        .map(|mut stock| {
            if let ProductStock::Sized { sizes, .. } = &mut stock {
                sizes.sort_by_key(|size| size.size);
            }

            stock
        })
        .collect()
}

/// Stock of every active product with all defined sizes filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub products: Vec<ProductStock>,

    /// Every defined size, in definition order.
    pub sizes: Vec<SizeRecord>,
}

impl StockSummary {
    #[must_use]
    pub fn build(products: Vec<ProductStock>, sizes: &[SizeRecord]) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|stock| stock.with_all_sizes(sizes))
                .collect(),
            sizes: sizes.to_vec(),
        }
    }

    /// Sum of all product totals.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.products.iter().map(ProductStock::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::sizes::records::SizeId;

    use super::*;

    fn sizes() -> Vec<SizeRecord> {
        ["P", "M", "G", "GG"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| SizeRecord {
                id: SizeId::from_i32(id),
                name: name.to_string(),
            })
            .collect()
    }

    fn sized_row(product: i32, name: &str, size: Option<(i32, &str)>, quantity: Option<i32>) -> StockLevelRow {
        StockLevelRow {
            product: ProductId::from_i32(product),
            product_name: name.to_string(),
            has_sizes: true,
            size: size.map(|(id, _)| SizeId::from_i32(id)),
            size_name: size.map(|(_, label)| label.to_string()),
            quantity,
        }
    }

    fn simple_row(product: i32, name: &str, quantity: Option<i32>) -> StockLevelRow {
        StockLevelRow {
            product: ProductId::from_i32(product),
            product_name: name.to_string(),
            has_sizes: false,
            size: None,
            size_name: None,
            quantity,
        }
    }

    #[test]
    fn groups_rows_per_product_in_id_order() {
        let products = group_product_stock([
            simple_row(2, "Redinha", Some(12)),
            sized_row(1, "Collant Básico Adulto", Some((2, "M")), Some(3)),
            sized_row(1, "Collant Básico Adulto", Some((1, "P")), Some(5)),
        ]);

        assert_eq!(products.len(), 2, "expected one entry per product");

        let ProductStock::Sized { sizes, .. } = &products[0] else {
            panic!("expected sized product first, got {:?}", products[0]);
        };

        let labels: Vec<&str> = sizes.iter().map(|size| size.name.as_str()).collect();

        assert_eq!(labels, ["P", "M"]);
        assert_eq!(products[0].total(), 8);
        assert_eq!(products[1].total(), 12);
    }

    #[test]
    fn simple_product_without_stock_row_totals_zero() {
        let products = group_product_stock([simple_row(7, "Coque", None)]);

        assert_eq!(
            products,
            vec![ProductStock::Simple {
                product: ProductId::from_i32(7),
                name: "Coque".to_string(),
                quantity: 0,
            }]
        );
    }

    #[test]
    fn sized_product_ignores_sizeless_rows() {
        let products = group_product_stock([sized_row(1, "Collant", None, Some(9))]);

        assert_eq!(products[0].total(), 0);
    }

    #[test]
    fn summary_fills_missing_sizes_with_zero() {
        let products = group_product_stock([
            sized_row(1, "Collant", Some((1, "P")), Some(4)),
            sized_row(1, "Collant", Some((3, "G")), Some(2)),
        ]);

        let summary = StockSummary::build(products, &sizes());

        let ProductStock::Sized { sizes, .. } = &summary.products[0] else {
            panic!("expected sized product, got {:?}", summary.products[0]);
        };

        let quantities: Vec<(&str, i64)> = sizes
            .iter()
            .map(|size| (size.name.as_str(), size.quantity))
            .collect();

        assert_eq!(quantities, [("P", 4), ("M", 0), ("G", 2), ("GG", 0)]);
        assert_eq!(summary.total(), 6);
    }

    #[test]
    fn summary_leaves_simple_products_untouched() {
        let products = group_product_stock([simple_row(2, "Redinha", Some(12))]);

        let summary = StockSummary::build(products.clone(), &sizes());

        assert_eq!(summary.products, products);
    }
}
