// src/services/memo.rs

/// Guarda um valor derivado enquanto as revisões das entradas não mudam.
#[derive(Debug)]
pub struct Memo<V> {
    deps: Option<Vec<u64>>,
    value: Option<V>,
}

impl<V> Default for Memo<V> {
    fn default() -> Self {
        Self { deps: None, value: None }
    }
}

impl<V> Memo<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&mut self, deps: &[u64], compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        if self.deps.as_deref() != Some(deps) {
            self.deps = Some(deps.to_vec());
            self.value = None;
        }
        self.value.get_or_insert_with(compute)
    }
}
