use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::menu::model::{Category, Menu, MenuItem};

/// Menu pages to scan.
#[derive(Debug, Multipart)]
pub struct ScanMenuForm {
    /// Menu photos or PDFs (.jpg, .jpeg, .png, .pdf), one per page
    pub images: Vec<Upload>,
}

/// A recognized dish and its price.
#[derive(Debug, Clone, Object)]
pub struct MenuItemResponse {
    pub name: String,
    pub price: f64,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            name: item.name,
            price: item.price,
        }
    }
}

/// A menu section, in the order it appeared on the pages.
#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub name: String,
    pub items: Vec<MenuItemResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            items: category.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MenuResponse {
    pub categories: Vec<CategoryResponse>,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            categories: menu.categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Scan result with every non-fatal problem met along the way.
#[derive(Debug, Clone, Object)]
pub struct ScanMenuResultResponse {
    pub menu: MenuResponse,
    /// Rejected uploads followed by pages that failed OCR ("path: reason")
    #[oai(skip_serializing_if_is_empty)]
    pub errors: Vec<String>,
}
