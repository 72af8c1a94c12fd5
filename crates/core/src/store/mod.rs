pub mod memory;
pub mod store_traits;

pub use memory::MemoryFormStore;
pub use store_traits::{load_form, save_form, FormKey, FormStoreTrait};
