//! New products

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    catalog::CatalogError,
    products::{Category, Product},
};

/// Lowest base price a new pizza may have.
pub const MIN_PRICE: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Highest base price a new pizza may have. Keeps every size of a line far inside the
/// `Decimal` range for any `u32` quantity.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Prices are whole cents.
const PRICE_SCALE: u32 = 2;

/// Image used when a new pizza is added without one.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1513104890138-7c749659a591?auto=format&fit=crop&w=800&q=80";

/// Unvalidated "add to menu" input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Pizza name
    pub name: String,

    /// Base (medium) price
    pub price: Decimal,

    /// Toppings
    pub ingredients: Vec<String>,

    /// Menu category
    pub category: Category,

    /// Optional image reference
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Validate the input and build a product with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] validation failure.
    pub fn validate(self) -> Result<Product, CatalogError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(CatalogError::MissingName);
        }

        if self.price < MIN_PRICE {
            return Err(CatalogError::PriceTooLow {
                minimum: MIN_PRICE,
                price: self.price,
            });
        }

        if self.price > MAX_PRICE {
            return Err(CatalogError::PriceTooHigh {
                maximum: MAX_PRICE,
                price: self.price,
            });
        }

        let price = self.price.normalize();

        if price.scale() > PRICE_SCALE {
            return Err(CatalogError::PriceNotInCents(self.price));
        }

        let ingredients: Vec<String> = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_string)
            .collect();

        if ingredients.is_empty() {
            return Err(CatalogError::NoIngredients);
        }

        let image_url = match self.image_url.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_IMAGE_URL.to_string(),
            Some(url) if is_web_url(url) => url.to_string(),
            Some(url) => return Err(CatalogError::InvalidImageUrl(url.to_string())),
        };

        Ok(Product {
            id: Uuid::now_v7().to_string(),
            name: name.to_string(),
            price,
            ingredients,
            image_url,
            category: self.category,
        })
    }
}

fn is_web_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    rest.is_some_and(|rest| {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();

        !host.is_empty() && !rest.contains(char::is_whitespace)
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn valid() -> NewProduct {
        NewProduct {
            name: "  Quattro Formaggi ".to_string(),
            price: Decimal::from(15),
            ingredients: vec!["Mozzarella".to_string(), " ".to_string()],
            category: Category::Vegetarian,
            image_url: Some("https://example.com/quattro.jpg".to_string()),
        }
    }

    #[test]
    fn valid_product_is_built() -> TestResult {
        let product = valid().validate()?;

        assert_eq!(product.name, "Quattro Formaggi");
        assert_eq!(product.ingredients, vec!["Mozzarella".to_string()]);
        assert_eq!(product.image_url, "https://example.com/quattro.jpg");
        assert!(!product.id.is_empty());

        Ok(())
    }

    #[test]
    fn each_product_gets_a_unique_id() -> TestResult {
        let first = valid().validate()?;
        let second = valid().validate()?;

        assert_ne!(first.id, second.id);

        Ok(())
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = NewProduct {
            name: "   ".to_string(),
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::MissingName)));
    }

    #[test]
    fn price_below_minimum_is_rejected() {
        let result = NewProduct {
            price: Decimal::new(799, 2),
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::PriceTooLow { .. })));
    }

    #[test]
    fn minimum_price_is_allowed() {
        let result = NewProduct {
            price: MIN_PRICE,
            ..valid()
        }
        .validate();

        assert!(result.is_ok(), "expected minimum price to validate: {result:?}");
    }

    #[test]
    fn price_above_maximum_is_rejected() {
        let result = NewProduct {
            price: MAX_PRICE + Decimal::new(1, 2),
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::PriceTooHigh { .. })));

        let result = NewProduct {
            price: Decimal::MAX,
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::PriceTooHigh { .. })));
    }

    #[test]
    fn maximum_price_is_allowed() {
        let result = NewProduct {
            price: MAX_PRICE,
            ..valid()
        }
        .validate();

        assert!(result.is_ok(), "expected maximum price to validate: {result:?}");
    }

    #[test]
    fn fractional_cents_are_rejected() -> TestResult {
        let result = NewProduct {
            price: "8.123456789012345678".parse()?,
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::PriceNotInCents(_))));

        Ok(())
    }

    #[test]
    fn trailing_zeros_still_count_as_cents() -> TestResult {
        let product = NewProduct {
            price: Decimal::new(12_500, 3),
            ..valid()
        }
        .validate()?;

        assert_eq!(product.price, Decimal::new(125, 1));
        assert_eq!(product.price.scale(), 1);

        Ok(())
    }

    #[test]
    fn ingredients_are_required() {
        let result = NewProduct {
            ingredients: vec![],
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::NoIngredients)));
    }

    #[test]
    fn image_url_must_be_web_url() {
        let result = NewProduct {
            image_url: Some("not a url".to_string()),
            ..valid()
        }
        .validate();

        assert!(matches!(result, Err(CatalogError::InvalidImageUrl(_))));
    }

    #[test]
    fn missing_image_uses_default() -> TestResult {
        let product = NewProduct {
            image_url: Some(String::new()),
            ..valid()
        }
        .validate()?;

        assert_eq!(product.image_url, DEFAULT_IMAGE_URL);

        Ok(())
    }
}
