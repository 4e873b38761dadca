//! Stock JSON views.
//!
//! Products are keyed either by normalized key or by display name. When two
//! products collapse to the same key, the one with the higher id wins.

use std::collections::BTreeMap;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use estoque_app::domain::stock::{models::ProductStock, summary::StockSummary};

pub(crate) const TOTAL_KEY: &str = "total";

/// Per-size quantities of a sized product, or the quantity of a simple one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum StockValue {
    Sizes(BTreeMap<String, i64>),
    Total(i64),
}

fn sizes_of(stock: &ProductStock) -> BTreeMap<String, i64> {
    match stock {
        ProductStock::Sized { sizes, .. } => sizes
            .iter()
            .map(|size| (size.name.clone(), size.quantity))
            .collect(),
        ProductStock::Simple { .. } => BTreeMap::new(),
    }
}

fn value_of(stock: &ProductStock) -> StockValue {
    match stock {
        ProductStock::Sized { .. } => StockValue::Sizes(sizes_of(stock)),
        ProductStock::Simple { quantity, .. } => StockValue::Total(*quantity),
    }
}

/// Normalized key → sizes or quantity.
pub(crate) fn by_key<'a>(
    products: impl IntoIterator<Item = &'a ProductStock>,
) -> BTreeMap<String, StockValue> {
    products
        .into_iter()
        .map(|stock| (stock.key(), value_of(stock)))
        .collect()
}

/// Display name → sizes plus `total`, or just `total` for simple products.
pub(crate) fn by_name(summary: &StockSummary) -> BTreeMap<String, BTreeMap<String, i64>> {
    summary
        .products
        .iter()
        .map(|stock| {
            let mut quantities = sizes_of(stock);

            quantities.insert(TOTAL_KEY.to_string(), stock.total());

            (stock.name().to_string(), quantities)
        })
        .collect()
}

/// Display name → every defined size plus `total`; simple products report
/// zero per size and their quantity as `total`.
pub(crate) fn by_product(summary: &StockSummary) -> BTreeMap<String, BTreeMap<String, i64>> {
    summary
        .products
        .iter()
        .map(|stock| {
            let held = sizes_of(stock);

            let mut quantities: BTreeMap<String, i64> = summary
                .sizes
                .iter()
                .map(|size| (size.name.clone(), held.get(&size.name).copied().unwrap_or(0)))
                .collect();

            quantities.insert(TOTAL_KEY.to_string(), stock.total());

            (stock.name().to_string(), quantities)
        })
        .collect()
}
