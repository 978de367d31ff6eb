//! In-memory catalog filtering, sorting and pagination.

use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    All,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub availability: Availability,
    pub sort_by: SortOrder,
    pub search: Option<String>,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            brands: Vec::new(),
            min_price: None,
            max_price: None,
            availability: Availability::All,
            sort_by: SortOrder::Relevance,
            search: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ProductFilter {
    /// Number of active narrowing filters, shown as a badge next to the filter button.
    /// A price range counts once.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len()
            + self.brands.len()
            + usize::from(self.availability != Availability::All)
            + usize::from(self.min_price.is_some() || self.max_price.is_some())
    }

    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }
        if self.min_price.is_some_and(|min| product.price < min)
            || self.max_price.is_some_and(|max| product.price > max)
        {
            return false;
        }
        let availability_ok = match self.availability {
            Availability::All => true,
            Availability::Available => product.is_available,
            Availability::Unavailable => !product.is_available,
        };
        if !availability_ok {
            return false;
        }
        needle.is_none_or(|needle| {
            [&product.name, &product.description, &product.brand]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
        })
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Filters, sorts and paginates `products`. Out-of-range pages are empty.
pub fn query(products: &[Product], filter: &ProductFilter) -> Page<Product> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| filter.matches(p, needle.as_deref()))
        .collect();

    match filter.sort_by {
        SortOrder::Relevance => {}
        SortOrder::PriceAsc => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::NameAsc => matched.sort_by(|a, b| compare_names(a, b)),
        SortOrder::NameDesc => matched.sort_by(|a, b| compare_names(b, a)),
    }

    let limit = filter.limit.max(1);
    let page = filter.page.max(1);
    let total = matched.len();
    let items = matched
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    Page {
        items,
        total,
        page,
        limit,
        total_pages: total.div_ceil(limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;

    fn catalog() -> Vec<Product> {
        let mut items = vec![
            product(1, "Hammer drill", 40.0),
            product(2, "Angle grinder", 25.0),
            product(3, "Concrete mixer", 90.0),
            product(4, "Tile cutter", 30.0),
            product(5, "Generator", 150.0),
            product(6, "Pressure washer", 60.0),
            product(7, "Scaffold tower", 120.0),
        ];
        items[2].category = "construction".into();
        items[6].category = "construction".into();
        items[4].brand = "Honda".into();
        items[4].description = "Quiet inverter unit".into();
        items[5].is_available = false;
        items
    }

    fn ids(page: &Page<Product>) -> Vec<u64> {
        page.items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_paginates_by_six() {
        let page = query(&catalog(), &ProductFilter::default());
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 2);

        let second = query(&catalog(), &ProductFilter { page: 2, ..Default::default() });
        assert_eq!(ids(&second), vec![7]);

        let beyond = query(&catalog(), &ProductFilter { page: 5, ..Default::default() });
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 7);
    }

    #[test]
    fn test_category_price_and_availability() {
        let filter = ProductFilter {
            categories: vec!["construction".into()],
            max_price: Some(100.0),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &filter)), vec![3]);

        let unavailable = ProductFilter {
            availability: Availability::Unavailable,
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &unavailable)), vec![6]);

        let inclusive = ProductFilter {
            min_price: Some(30.0),
            max_price: Some(40.0),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &inclusive)), vec![1, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_description_brand() {
        let by_brand = ProductFilter {
            search: Some("HONDA".into()),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &by_brand)), vec![5]);

        let by_description = ProductFilter {
            search: Some("inverter".into()),
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &by_description)), vec![5]);

        let blank = ProductFilter {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(query(&catalog(), &blank).total, 7);
    }

    #[test]
    fn test_sort_orders() {
        let by_price = ProductFilter {
            sort_by: SortOrder::PriceDesc,
            limit: 3,
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &by_price)), vec![5, 7, 3]);

        let by_name = ProductFilter {
            sort_by: SortOrder::NameAsc,
            limit: 2,
            ..Default::default()
        };
        assert_eq!(ids(&query(&catalog(), &by_name)), vec![2, 3]);
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(ProductFilter::default().active_filter_count(), 0);
        let filter = ProductFilter {
            categories: vec!["tools".into(), "garden".into()],
            brands: vec!["Honda".into()],
            availability: Availability::Available,
            min_price: Some(10.0),
            max_price: Some(500.0),
            ..Default::default()
        };
        assert_eq!(filter.active_filter_count(), 5);
    }

    #[test]
    fn test_sort_order_serde_names() {
        let filter: ProductFilter =
            serde_json::from_str(r#"{"sortBy":"price-asc","availability":"available"}"#).unwrap();
        assert_eq!(filter.sort_by, SortOrder::PriceAsc);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, DEFAULT_LIMIT);
    }
}
