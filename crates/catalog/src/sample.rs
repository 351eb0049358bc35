//! Literal sample data loaded into the process-wide catalog.

use crate::product::Product;

pub(crate) fn products() -> Vec<Product> {
    vec![
        Product::trusted(1, "Fresh Apples", "Fruits", 2.99, "Fresh red apples from local farms", true),
        Product::trusted(2, "Organic Bananas", "Fruits", 1.99, "Organic bananas rich in potassium", true),
        Product::trusted(3, "Whole Milk", "Dairy", 3.49, "Fresh whole milk from grass-fed cows", true),
        Product::trusted(4, "Bread Loaf", "Bakery", 2.49, "Freshly baked whole wheat bread", false),
        Product::trusted(5, "Chicken Breast", "Meat", 8.99, "Fresh boneless chicken breast", true),
        Product::trusted(6, "Cheddar Cheese", "Dairy", 4.99, "Aged cheddar cheese block", true),
        Product::trusted(7, "Salmon Fillet", "Seafood", 12.99, "Fresh Atlantic salmon fillet", true),
        Product::trusted(8, "Broccoli", "Vegetables", 1.79, "Fresh green broccoli crowns", true),
    ]
}
