pub mod collection;
pub mod repository;
pub mod seed;
pub mod state;

pub use collection::Collection;
pub use repository::Repository;
pub use seed::StoreSeed;
pub use state::{DEFAULT_COMPANY_NAME, StoreState};
