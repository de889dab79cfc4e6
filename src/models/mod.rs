mod category;
mod product;
mod weights;

pub use category::{ActionKind, Category};
pub use product::Product;
pub use weights::UserWeightProfile;
