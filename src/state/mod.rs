mod catalog;
mod persistence;

pub use catalog::RecipeCatalog;
pub use persistence::{load_catalog, load_plan, save_catalog, save_plan, write_shopping_csv};
