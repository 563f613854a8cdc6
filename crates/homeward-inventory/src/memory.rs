//! [`MemoryInventory`] — an in-process map implementing [`InventoryStore`],
//! for tests and local development.

use std::{collections::HashMap, convert::Infallible, sync::Arc};

use homeward_core::{
  pet::{BatchReport, Pet},
  store::InventoryStore,
};
use tokio::sync::Mutex;

/// A pet inventory held in a shared in-process map. Clones share storage.
#[derive(Clone, Default)]
pub struct MemoryInventory {
  pets: Arc<Mutex<HashMap<String, Pet>>>,
}

impl MemoryInventory {
  pub fn new() -> Self { Self::default() }
}

impl InventoryStore for MemoryInventory {
  type Error = Infallible;

  async fn put_batch(&self, pets: &[Pet]) -> Result<BatchReport, Infallible> {
    let mut map = self.pets.lock().await;
    for pet in pets {
      map.insert(pet.petid.clone(), pet.clone());
    }
    Ok(BatchReport { written: pets.len(), failed: Vec::new() })
  }

  async fn get(&self, pet_id: &str) -> Result<Option<Pet>, Infallible> {
    Ok(self.pets.lock().await.get(pet_id).cloned())
  }

  async fn count(&self) -> Result<usize, Infallible> {
    Ok(self.pets.lock().await.len())
  }
}
