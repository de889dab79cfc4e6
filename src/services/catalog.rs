use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{Category, Product},
};

/// Immutable product catalog grouped by category.
///
/// Groups are stored in [`Category::ALL`] order so iteration is deterministic.
/// A category with no products is kept as an empty group.
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<(Category, Vec<Product>)>,
}

impl Catalog {
    /// Builds a catalog from a flat product list, preserving the input order
    /// within each category. Rejects duplicate product ids.
    pub fn new(products: Vec<Product>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate product id in catalog: {}",
                    product.id
                )));
            }
        }

        let mut groups: Vec<(Category, Vec<Product>)> =
            Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        for product in products {
            if let Some((_, group)) = groups.iter_mut().find(|(c, _)| *c == product.category) {
                group.push(product);
            }
        }

        Ok(Self { groups })
    }

    /// The catalog the service ships with: five products per category
    pub fn builtin() -> Self {
        use Category::*;

        let products = vec![
            Product::new("daily_001", "Toothbrush Set", "Soft-bristle gum-care toothbrushes, pack of 4", Daily),
            Product::new("daily_002", "Towel", "Absorbent pure cotton towel", Daily),
            Product::new("daily_003", "Shampoo", "Nourishing repair shampoo 500ml", Daily),
            Product::new("daily_004", "Body Wash", "Refreshing body wash 600ml", Daily),
            Product::new("daily_005", "Tissues", "3-ply facial tissues, 100 sheets", Daily),
            Product::new("food_001", "Organic Apples", "Fresh organic Fuji apples", Food),
            Product::new("food_002", "Whole Wheat Bread", "Healthy sliced whole wheat bread", Food),
            Product::new("food_003", "Fresh Milk", "Pure fresh milk 1L", Food),
            Product::new("food_004", "Eggs", "Organic free-range eggs, dozen", Food),
            Product::new("food_005", "Olive Oil", "Extra virgin olive oil 500ml", Food),
            Product::new("elec_001", "Wireless Mouse", "Silent Bluetooth office mouse", Electronics),
            Product::new("elec_002", "Mechanical Keyboard", "Blue-switch mechanical keyboard with RGB backlight", Electronics),
            Product::new("elec_003", "USB Charger", "65W fast charger", Electronics),
            Product::new("elec_004", "Bluetooth Earbuds", "Noise-cancelling wireless earbuds", Electronics),
            Product::new("elec_005", "Portable Drive", "1TB portable hard drive", Electronics),
            Product::new("house_001", "Robot Vacuum", "Smart sweeping and mopping robot", Household),
            Product::new("house_002", "Air Purifier", "HEPA filter air purifier", Household),
            Product::new("house_003", "Humidifier", "Quiet ultrasonic humidifier", Household),
            Product::new("house_004", "Stick Vacuum", "Cordless handheld vacuum cleaner", Household),
            Product::new("house_005", "Rice Cooker", "Smart programmable rice cooker", Household),
        ];

        Self {
            groups: Category::ALL
                .into_iter()
                .map(|c| {
                    let group = products.iter().filter(|p| p.category == c).cloned().collect();
                    (c, group)
                })
                .collect(),
        }
    }

    /// Categories in definition order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|(c, _)| *c)
    }

    /// Products of one category, in catalog order
    pub fn products(&self, category: Category) -> &[Product] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, group)| group.as_slice())
            .unwrap_or(&[])
    }

    /// Category groups in definition order
    pub fn groups(&self) -> impl Iterator<Item = (Category, &[Product])> + '_ {
        self.groups.iter().map(|(c, group)| (*c, group.as_slice()))
    }

    /// Every product, category by category
    pub fn all_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.groups.iter().flat_map(|(_, group)| group.iter())
    }

    /// Looks up a product by id
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.all_products().find(|p| p.id == product_id)
    }

    /// Total number of products across all categories
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, group)| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.categories().collect::<Vec<_>>(), Category::ALL.to_vec());
        for category in Category::ALL {
            let products = catalog.products(category);
            assert_eq!(products.len(), 5);
            assert!(products.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<&str> = catalog.all_products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_product() {
        let catalog = Catalog::builtin();
        let product = catalog.find("elec_002").unwrap();
        assert_eq!(product.name, "Mechanical Keyboard");
        assert_eq!(product.category, Category::Electronics);
        assert!(catalog.find("elec_999").is_none());
    }

    #[test]
    fn test_new_keeps_empty_categories_and_order() {
        let catalog = Catalog::new(vec![
            Product::new("f2", "B", "", Category::Food),
            Product::new("f1", "A", "", Category::Food),
        ])
        .unwrap();

        assert_eq!(catalog.categories().count(), 4);
        assert!(catalog.products(Category::Daily).is_empty());
        let ids: Vec<&str> = catalog.products(Category::Food).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["f2", "f1"]);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Product::new("x", "A", "", Category::Food),
            Product::new("x", "B", "", Category::Daily),
        ]);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
