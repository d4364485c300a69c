//! Named evolve implementations
//!
//! The harness looks methods up here by name and labels its reports with
//! those names. A registry is an ordinary value; build one and pass it in.

use crate::error::LifeError;
use crate::game_of_life::{evolve_bordered, evolve_column_major, evolve_reference, Board};
use std::fmt;

/// Signature every evolve implementation shares: read the previous
/// generation, overwrite every cell of the next one.
pub type EvolveFn = fn(&Board, &mut Board);

/// A registered implementation
#[derive(Clone)]
pub struct Method {
    pub name: String,
    pub evolve: EvolveFn,
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered table of named implementations
#[derive(Debug, Clone, Default)]
pub struct Registry {
    methods: Vec<Method>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every implementation shipped with the crate
    pub fn with_builtin() -> Self {
        Self {
            methods: Self::builtin()
                .into_iter()
                .map(|(name, evolve)| Method {
                    name: name.to_string(),
                    evolve,
                })
                .collect(),
        }
    }

    fn builtin() -> [(&'static str, EvolveFn); 3] {
        [
            ("reference", evolve_reference),
            ("column_major", evolve_column_major),
            ("bordered", evolve_bordered),
        ]
    }

    /// Register `evolve` under `name`
    pub fn register(&mut self, name: impl Into<String>, evolve: EvolveFn) -> Result<(), LifeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LifeError::InvalidMethodName(name));
        }
        if self.get(&name).is_some() {
            return Err(LifeError::DuplicateMethod(name));
        }
        self.methods.push(Method { name, evolve });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Like [`get`](Self::get) but an unknown name is an error
    pub fn require(&self, name: &str) -> Result<&Method, LifeError> {
        self.get(name)
            .ok_or_else(|| LifeError::UnknownMethod(name.to_string()))
    }

    /// Methods in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.methods.iter().map(|method| method.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Narrow to `names`, in the order given. An empty list keeps everything.
    pub fn select(&self, names: &[String]) -> Result<Registry, LifeError> {
        if names.is_empty() {
            return Ok(self.clone());
        }
        let mut selected = Registry::new();
        for name in names {
            let method = self.require(name)?;
            selected.register(method.name.clone(), method.evolve)?;
        }
        Ok(selected)
    }
}
