mod memory_contact_store;
mod traits;

pub use memory_contact_store::MemoryContactStore;
pub use traits::ContactStore;
