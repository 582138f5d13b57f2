use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::value::{RuntimeError, Value};

#[derive(Default)]
struct Scope {
    store: HashMap<Rc<str>, Value>,
    constants: HashSet<Rc<str>>,
    parent: Option<Environment>,
}

/// A scope in the chain searched by name resolution. The handle is a cheap
/// clone sharing the underlying scope, which is what lets escaping function
/// values keep their defining environment alive.
#[derive(Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scope: Rc::new(RefCell::new(Scope::default())),
        }
    }

    pub fn with_parent(parent: &Environment) -> Self {
        Environment {
            scope: Rc::new(RefCell::new(Scope {
                parent: Some(parent.clone()),
                ..Scope::default()
            })),
        }
    }

    /// Root environment with the constants and native functions installed.
    pub fn global() -> Self {
        let env = Environment::new();
        crate::builtins::install(&env);
        env
    }

    /// A name may be declared at most once per scope; shadowing an outer
    /// scope is fine.
    pub fn declare(&self, name: &str, value: Value, constant: bool) -> Result<Value, RuntimeError> {
        let mut scope = self.scope.borrow_mut();
        if scope.store.contains_key(name) {
            return Err(RuntimeError::AlreadyDeclared(name.into()));
        }

        let name: Rc<str> = name.into();
        if constant {
            scope.constants.insert(name.clone());
        }
        scope.store.insert(name, value.clone());
        Ok(value)
    }

    /// Overwrites the binding in the scope that owns `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<Value, RuntimeError> {
        let owner = self
            .resolve(name)
            .ok_or_else(|| RuntimeError::UndefinedName(name.into()))?;

        let mut scope = owner.scope.borrow_mut();
        if scope.constants.contains(name) {
            return Err(RuntimeError::AssignToConstant(name.into()));
        }
        scope.store.insert(name.into(), value.clone());
        Ok(value)
    }

    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeError> {
        let owner = self
            .resolve(name)
            .ok_or_else(|| RuntimeError::UndefinedName(name.into()))?;
        let value = owner.scope.borrow().store.get(name).cloned();
        value.ok_or_else(|| RuntimeError::UndefinedName(name.into()))
    }

    /// First scope on the self → parent → … chain whose own bindings
    /// contain `name`.
    pub fn resolve(&self, name: &str) -> Option<Environment> {
        if self.scope.borrow().store.contains_key(name) {
            return Some(self.clone());
        }
        let parent = self.scope.borrow().parent.clone();
        parent.and_then(|parent| parent.resolve(name))
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }

    /// Unchecked insert used while populating the root environment.
    pub(crate) fn define_constant(&self, name: &str, value: Value) {
        let mut scope = self.scope.borrow_mut();
        let name: Rc<str> = name.into();
        scope.constants.insert(name.clone());
        scope.store.insert(name, value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
