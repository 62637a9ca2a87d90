//! # Query Engine
//!
//! Read-mostly catalog operations layered over the [`ProductClient`]. Every operation
//! validates its own parameters before touching the store, then works on a snapshot, so
//! it is idempotent with respect to the store contents at the time of the call.
//!
//! Text comparisons (name search, category, specification values) ignore case.
//! Specification *keys* are matched exactly.

use crate::clients::ProductClient;
use crate::model::{mapper, Product, ProductRecord};
use crate::product_store::{CatalogError, CatalogResult};
use crate::query::params::{self, SortOrder, MAX_COMPARE_IDS, MAX_TOP_RATED};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Stateless query layer. Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct QueryEngine {
    products: ProductClient,
}

impl QueryEngine {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    /// The underlying store client, for direct mutation paths.
    pub fn products(&self) -> &ProductClient {
        &self.products
    }

    pub async fn all_products(&self) -> CatalogResult<Vec<Product>> {
        self.products.find_all().await
    }

    /// # Errors
    /// `InvalidParameter` for a blank id, `NotFound` if nothing is stored under it.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> CatalogResult<Product> {
        params::non_blank("id", id)?;
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))
    }

    /// Products whose name contains `query`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, query: &str) -> CatalogResult<Vec<Product>> {
        params::non_blank("query", query)?;
        let needle = query.to_lowercase();
        let found = self
            .filtered(|p| p.name().to_lowercase().contains(&needle))
            .await?;
        debug!(matched = found.len(), "Search complete");
        Ok(found)
    }

    /// Products priced within `[min, max]`, bounds inclusive.
    #[instrument(skip(self))]
    pub async fn filter_by_price_range(&self, min: f64, max: f64) -> CatalogResult<Vec<Product>> {
        params::price_range(min, max)?;
        self.filtered(|p| (min..=max).contains(&p.price())).await
    }

    /// Rated products with a rating of at least `min`.
    #[instrument(skip(self))]
    pub async fn filter_by_rating(&self, min: f64) -> CatalogResult<Vec<Product>> {
        params::min_rating(min)?;
        self.filtered(|p| p.rating().is_some_and(|r| r >= min)).await
    }

    /// Products in `category`, ignoring case.
    ///
    /// An empty match is only an error when the category is unknown: if no product
    /// matches, the category is checked against [`get_all_categories`](Self::get_all_categories)
    /// and `CategoryNotFound` is raised only if it is not there.
    #[instrument(skip(self))]
    pub async fn filter_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        params::non_blank("category", category)?;
        let found = self
            .filtered(|p| p.category().is_some_and(|c| eq_ignore_case(c, category)))
            .await?;
        if !found.is_empty() {
            return Ok(found);
        }

        let known = self.get_all_categories().await?;
        if known.iter().any(|k| eq_ignore_case(k, category)) {
            debug!("Known category holds no products");
            Ok(found)
        } else {
            Err(CatalogError::CategoryNotFound {
                category: category.to_string(),
            })
        }
    }

    /// Sorted, de-duplicated, non-blank category values across the catalog.
    pub async fn get_all_categories(&self) -> CatalogResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .products
            .find_all()
            .await?
            .iter()
            .filter_map(Product::category)
            .filter(|c| !c.trim().is_empty())
            .map(str::to_string)
            .collect();
        Ok(categories.into_iter().collect())
    }

    /// The products among `ids` that exist, in request order, without duplicates.
    ///
    /// Unknown ids are dropped silently; only a request where *none* resolve fails.
    ///
    /// # Errors
    /// `InvalidParameter` unless `1 <= ids.len() <= 10`; `NotFound` if no id resolves.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn compare_products<S>(&self, ids: &[S]) -> CatalogResult<Vec<Product>>
    where
        S: AsRef<str> + Sync,
    {
        params::count_within("ids", ids.len(), 1..=MAX_COMPARE_IDS)?;

        let mut found: Vec<Product> = Vec::with_capacity(ids.len());
        for id in ids {
            let id: &str = id.as_ref();
            if found.iter().any(|p| p.id() == id) {
                continue;
            }
            if let Some(product) = self.products.find_by_id(id).await? {
                found.push(product);
            }
        }

        if found.is_empty() {
            let requested: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
            return Err(CatalogError::not_found(requested.join(", ")));
        }
        debug!(found = found.len(), "Comparison assembled");
        Ok(found)
    }

    /// Every product ordered by price. Ties keep id order.
    pub async fn sort_by_price(&self, order: SortOrder) -> CatalogResult<Vec<Product>> {
        let products = self.products.find_all().await?;
        Ok(sorted_by(products, order, |p| Some(p.price())))
    }

    /// Every product ordered by rating; unrated products sort below any rating.
    /// Ties keep id order.
    pub async fn sort_by_rating(&self, order: SortOrder) -> CatalogResult<Vec<Product>> {
        let products = self.products.find_all().await?;
        Ok(sorted_by(products, order, Product::rating))
    }

    /// The `limit` highest-rated products.
    ///
    /// # Errors
    /// `InvalidParameter` unless `1 <= limit <= 100`.
    #[instrument(skip(self))]
    pub async fn top_rated(&self, limit: usize) -> CatalogResult<Vec<Product>> {
        params::count_within("limit", limit, 1..=MAX_TOP_RATED)?;
        let mut ranked = self.sort_by_rating(SortOrder::Descending).await?;
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Products whose specification `key` equals `value`, ignoring the value's case.
    #[instrument(skip(self))]
    pub async fn find_by_specification(
        &self,
        key: &str,
        value: &str,
    ) -> CatalogResult<Vec<Product>> {
        params::non_blank("key", key)?;
        params::non_blank("value", value)?;
        self.filtered(|p| p.specification(key).is_some_and(|v| eq_ignore_case(v, value)))
            .await
    }

    /// Converts and stores a new product, rejecting out-of-range values up front.
    #[instrument(skip(self))]
    pub async fn create_product(&self, record: &ProductRecord) -> CatalogResult<Product> {
        let product = mapper::to_entity(record)?;
        mapper::check_range(&product)?;
        let stored = self.products.save(product).await?;
        info!(id = %stored.id(), "Product created");
        Ok(stored)
    }

    /// Replaces the product under `id` with `record`. The path id wins over any id in
    /// the record, and the record may omit it.
    #[instrument(skip(self))]
    pub async fn update_product(&self, id: &str, record: &ProductRecord) -> CatalogResult<Product> {
        params::non_blank("id", id)?;
        let record = ProductRecord {
            id: Some(id.to_string()),
            ..record.clone()
        };
        let product = mapper::to_entity(&record)?;
        mapper::check_range(&product)?;
        let stored = self.products.update(id, product).await?;
        info!(id = %stored.id(), "Product updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> CatalogResult<()> {
        params::non_blank("id", id)?;
        self.products.delete_by_id(id).await?;
        info!(id, "Product deleted");
        Ok(())
    }

    async fn filtered(&self, keep: impl Fn(&Product) -> bool) -> CatalogResult<Vec<Product>> {
        let mut products = self.products.find_all().await?;
        products.retain(|p| keep(p));
        Ok(products)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// `None` compares below every value. The sort is stable, so equal keys keep the
// snapshot's id order in both directions.
fn sorted_by(
    mut products: Vec<Product>,
    order: SortOrder,
    key: impl Fn(&Product) -> Option<f64>,
) -> Vec<Product> {
    products.sort_by(|a, b| {
        let ascending = match (key(a), key(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        match order {
            SortOrder::Ascending => ascending,
            SortOrder::Descending => ascending.reverse(),
        }
    });
    products
}
