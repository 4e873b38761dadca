//! Unit price table.
//!
//! Loaded from a YAML mapping of product id to unit price in cents:
//!
//! ```yaml
//! 1: 8990
//! 2: 4500
//! ```

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::products::records::ProductId;

#[derive(Debug, Error)]
pub enum PriceTableError {
    #[error("failed to read price table {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse price table")]
    Yaml(#[from] serde_norway::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
struct PriceFile(FxHashMap<i32, u64>);

/// Unit prices in cents, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    prices: FxHashMap<ProductId, u64>,
}

impl PriceTable {
    /// Parses a YAML price table.
    ///
    /// # Errors
    ///
    /// Returns [`PriceTableError::Yaml`] when the document is not a mapping of
    /// integer ids to non-negative integer prices.
    pub fn from_yaml(source: &str) -> Result<Self, PriceTableError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let PriceFile(prices) = serde_norway::from_str(source)?;

        Ok(prices.into_iter().collect())
    }

    /// Reads and parses a YAML price table from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PriceTableError::Io`] when the file cannot be read, or
    /// [`PriceTableError::Yaml`] when it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, PriceTableError> {
        let source = fs::read_to_string(path).map_err(|source| PriceTableError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml(&source)
    }

    #[must_use]
    pub fn price(&self, product: ProductId) -> Option<u64> {
        self.prices.get(&product).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(i32, u64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (i32, u64)>>(iter: I) -> Self {
        Self {
            prices: iter
                .into_iter()
                .map(|(id, price)| (ProductId::from_i32(id), price))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_id_keyed_prices() -> TestResult {
        let table = PriceTable::from_yaml("1: 8990\n2: 4500\n")?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.price(ProductId::from_i32(1)), Some(8990));
        assert_eq!(table.price(ProductId::from_i32(2)), Some(4500));
        assert_eq!(table.price(ProductId::from_i32(3)), None);

        Ok(())
    }

    #[test]
    fn empty_document_is_empty_table() -> TestResult {
        assert!(PriceTable::from_yaml("")?.is_empty(), "expected empty table");
        assert!(PriceTable::from_yaml("  \n")?.is_empty(), "expected empty table");

        Ok(())
    }

    #[test]
    fn rejects_name_keys() {
        let result = PriceTable::from_yaml("Redinha: 1500\n");

        assert!(
            matches!(result, Err(PriceTableError::Yaml(_))),
            "expected a parse error, got {result:?}"
        );
    }

    #[test]
    fn rejects_negative_prices() {
        let result = PriceTable::from_yaml("1: -10\n");

        assert!(
            matches!(result, Err(PriceTableError::Yaml(_))),
            "expected a parse error, got {result:?}"
        );
    }

    #[test]
    fn loads_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;

        writeln!(file, "7: 12000")?;

        let table = PriceTable::load(file.path())?;

        assert_eq!(table.price(ProductId::from_i32(7)), Some(12_000));

        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PriceTable::load(Path::new("/nonexistent/precos.yaml"));

        assert!(
            matches!(result, Err(PriceTableError::Io { .. })),
            "expected an io error, got {result:?}"
        );
    }
}
