use serde::{Deserialize, Serialize};

/// A rentable item. Prices are per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub deposit: f64,
    /// Percent off the rental price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    pub is_available: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Rental price for `quantity` units over `days`, after any discount.
    pub fn rental_price(&self, quantity: u32, days: u32) -> f64 {
        let gross = self.price * quantity as f64 * days as f64;
        match self.discount {
            Some(discount) if discount > 0.0 => gross * (1.0 - discount / 100.0),
            _ => gross,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;

    #[test]
    fn test_rental_price_applies_discount() {
        let mut drill = product(1, "Drill", 100.0);
        assert_eq!(drill.rental_price(2, 3), 600.0);
        drill.discount = Some(10.0);
        assert_eq!(drill.rental_price(2, 3), 540.0);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let drill: super::Product = serde_json::from_str(
            r#"{"id":7,"name":"Drill","category":"tools","brand":"Bosch","price":50,"isAvailable":false}"#,
        )
        .unwrap();
        assert!(!drill.is_available);
        assert_eq!(drill.deposit, 0.0);
        assert_eq!(drill.discount, None);
    }
}
