use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Books,
    Sports,
    Beauty,
}

impl Category {
    /// Every category, in filter-bar order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Books,
        Category::Sports,
        Category::Beauty,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Books => "books",
            Category::Sports => "sports",
            Category::Beauty => "beauty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Books => "Books",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Electronics => "📱",
            Category::Fashion => "👕",
            Category::Books => "📚",
            Category::Sports => "⚽",
            Category::Beauty => "💄",
        }
    }

    /// Look a category up by its serialized id (`"books"`, `"fashion"`, ...).
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.id() == id)
    }
}

/// Category selection in the home screen filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar entries: `All` first, then each category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryFilter::All => "🏪",
            CategoryFilter::Only(category) => category.icon(),
        }
    }
}

/// A product listed in the marketplace grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    /// Price in Korean won
    pub price: u64,
    pub category: Category,
    /// Free-form text from the sell form, empty when none was given
    #[serde(default)]
    pub description: String,
    /// Emoji stand-in for a product photo
    pub image: String,
    pub seller: String,
    pub location: String,
    pub likes: u32,
    pub is_new: bool,
}

/// A validated listing ready to be added to the [`Catalog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub title: String,
    pub price: u64,
    pub category: Category,
    pub description: String,
    pub location: String,
}

/// Seller name stamped on listings created from this browser.
pub const LOCAL_SELLER: &str = "me";

/// In-memory product list. Resets to [`Catalog::sample`] on reload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The hardcoded listings the marketplace starts with.
    pub fn sample() -> Self {
        Self::new(vec![
            Product {
                id: 1,
                title: "iPhone 15 Pro".to_string(),
                price: 1_200_000,
                category: Category::Electronics,
                description: String::new(),
                image: "📱".to_string(),
                seller: "TechUser".to_string(),
                location: "서울 강남구".to_string(),
                likes: 12,
                is_new: true,
            },
            Product {
                id: 2,
                title: "Nike Air Max".to_string(),
                price: 150_000,
                category: Category::Fashion,
                description: String::new(),
                image: "👟".to_string(),
                seller: "FashionLover".to_string(),
                location: "부산 해운대구".to_string(),
                likes: 8,
                is_new: false,
            },
            Product {
                id: 3,
                title: "Clean Code".to_string(),
                price: 25_000,
                category: Category::Books,
                description: String::new(),
                image: "📖".to_string(),
                seller: "BookWorm".to_string(),
                location: "인천 연수구".to_string(),
                likes: 5,
                is_new: true,
            },
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose title contains `query` (case-insensitive) and whose
    /// category passes `filter`, in catalog order.
    pub fn filtered(&self, query: &str, filter: CategoryFilter) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|product| filter.matches(product.category))
            .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Append a listing and return it with its assigned id.
    pub fn add(&mut self, listing: NewListing) -> &Product {
        let id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.products.push(Product {
            id,
            title: listing.title,
            price: listing.price,
            category: listing.category,
            description: listing.description,
            image: listing.category.icon().to_string(),
            seller: LOCAL_SELLER.to_string(),
            location: listing.location,
            likes: 0,
            is_new: true,
        });
        &self.products[self.products.len() - 1]
    }
}

/// Sell-form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Enter a product title")]
    MissingTitle,

    #[error("Price must be a whole number of won, got '{0}'")]
    InvalidPrice(String),

    #[error("Enter a trade location")]
    MissingLocation,
}

/// Raw values typed into the sell form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    /// Kept as typed so the input can hold partial values like `"12,"`
    pub price: String,
    pub category: Category,
    pub description: String,
    pub location: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            category: Category::Electronics,
            description: String::new(),
            location: String::new(),
        }
    }
}

impl ProductDraft {
    pub fn validate(&self) -> Result<NewListing, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }

        let price_text: String = self.price.trim().chars().filter(|c| *c != ',').collect();
        let price = price_text
            .parse::<u64>()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;

        let location = self.location.trim();
        if location.is_empty() {
            return Err(DraftError::MissingLocation);
        }

        Ok(NewListing {
            title: title.to_string(),
            price,
            category: self.category,
            description: self.description.trim().to_string(),
            location: location.to_string(),
        })
    }
}
