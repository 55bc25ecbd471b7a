//! Copy-on-write layered map backing the staged-view contract shared by
//! `AccountState` and `DelegateState`.
//!
//! Reads consult the layer stack top-down, falling back to the committed
//! base. A fresh staged view starts with a single layer; `push_layer`
//! opens a nested staging scope and `commit_layer`/`discard_layer` close
//! it, merging or dropping its writes. The top-level `commit` flattens
//! every remaining layer into the shared base.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub struct LayeredMap<K, V> {
    base: Arc<RwLock<HashMap<K, V>>>,
    layers: Vec<HashMap<K, V>>,
}

impl<K, V> LayeredMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(base: Arc<RwLock<HashMap<K, V>>>) -> Self {
        Self {
            base,
            layers: vec![HashMap::new()],
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        for layer in self.layers.iter().rev() {
            if let Some(value) = layer.get(key) {
                return Some(value.clone());
            }
        }
        self.base.read().expect("overlay base poisoned").get(key).cloned()
    }

    pub fn set(&mut self, key: K, value: V) {
        self.layers
            .last_mut()
            .expect("layer stack is never empty")
            .insert(key, value);
    }

    /// Opens a nested staging scope.
    pub fn push_layer(&mut self) {
        self.layers.push(HashMap::new());
    }

    /// Merges the innermost layer into the one below it, or into the base
    /// if it was the only layer left.
    pub fn commit_layer(&mut self) {
        let top = self.layers.pop().expect("layer stack is never empty");
        if let Some(below) = self.layers.last_mut() {
            below.extend(top);
        } else {
            self.base.write().expect("overlay base poisoned").extend(top);
            self.layers.push(HashMap::new());
        }
    }

    /// Discards the innermost layer's writes.
    pub fn discard_layer(&mut self) {
        self.layers.pop();
        if self.layers.is_empty() {
            self.layers.push(HashMap::new());
        }
    }

    /// Flattens every remaining layer into the base. Consumes the map, so
    /// a dropped (uncommitted) `LayeredMap` never touches the base.
    pub fn commit(mut self) {
        while self.layers.len() > 1 {
            self.commit_layer();
        }
        let top = self.layers.pop().expect("layer stack is never empty");
        self.base.write().expect("overlay base poisoned").extend(top);
    }
}
