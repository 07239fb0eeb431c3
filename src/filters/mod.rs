pub mod apply;
pub mod controls;
pub mod state;

pub use apply::{evaluate, evaluate_indices};
pub use controls::FilterControls;
pub use state::{FilterGroup, FilterState, PriceBucket};
