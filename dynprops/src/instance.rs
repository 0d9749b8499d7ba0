//! The dynamic instance handle.

use crate::access::{subsasgn, subsref};
use dynprops_core::{
    AccessError, Fields, FieldName, Hook, InstanceId, PropertyAdded, PropertyRemoved, Value,
};
use dynprops_std::{DynamicField, DynamicStore, ListenerId, Registry};
use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

pub(crate) struct Inner<T> {
    pub(crate) id: InstanceId,
    pub(crate) value: T,
    pub(crate) store: DynamicStore,
    pub(crate) added: Registry<PropertyAdded>,
    pub(crate) removed: Registry<PropertyRemoved>,
}

/// An instance of `T` that can acquire fields at runtime.
///
/// `Dynamic` is a reference handle: clones alias the same instance, so a
/// field added or written through one clone is visible through all of
/// them. The dynamic store lives and dies with the instance.
///
/// # Example
///
/// ```rust,ignore
/// let obj = Dynamic::new(Sensor::default());
/// addprop(&obj, "field1")?;
/// assert_eq!(obj.get("field1")?, Value::Empty);
///
/// obj.set("field1", 42)?;
/// assert_eq!(obj.get("field1")?, Value::Int(42));
/// ```
pub struct Dynamic<T: Fields> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Fields> Clone for Dynamic<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Fields + Default> Default for Dynamic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Fields> From<T> for Dynamic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Fields> Dynamic<T> {
    /// Wrap `value` with an empty dynamic store.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                id: InstanceId::next(),
                value,
                store: DynamicStore::new(),
                added: Registry::new(),
                removed: Registry::new(),
            })),
        }
    }

    /// Identity shared by all aliases of this instance.
    pub fn id(&self) -> InstanceId {
        self.inner.borrow().id
    }

    /// Returns `true` if both handles alias the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrow the statically typed value.
    ///
    /// Field reads through [`get`](Self::get) work inside `f`; writes fail
    /// with [`AccessError::Borrowed`].
    ///
    /// # Panics
    ///
    /// If the instance is mutably borrowed, i.e. when called inside
    /// [`with_mut`](Self::with_mut).
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Mutably borrow the statically typed value.
    ///
    /// Field access through the interceptor fails with
    /// [`AccessError::Borrowed`] inside `f`.
    ///
    /// # Panics
    ///
    /// If the instance is already borrowed, i.e. when nested in
    /// [`with`](Self::with), `with_mut` or while a [`store`](Self::store)
    /// reference is held.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut().value)
    }

    /// Read `.name`. Shorthand for [`subsref`] with a single member step.
    pub fn get(&self, name: &str) -> Result<Value, AccessError> {
        subsref(self, name)
    }

    /// Write `.name`. Shorthand for [`subsasgn`] with a single member step.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), AccessError> {
        subsasgn(self, name, value.into()).map(|_| ())
    }

    /// Returns `true` if `name` is a static or dynamic field.
    pub fn is_prop(&self, name: &str) -> bool {
        T::has_field(name) || self.is_dynamic(name)
    }

    /// Returns `true` if `name` is a dynamic field of this instance.
    pub fn is_dynamic(&self, name: &str) -> bool {
        self.inner.borrow().store.contains(name)
    }

    /// Static field names followed by visible dynamic names, in
    /// declaration and registration order.
    pub fn field_names(&self) -> Vec<String> {
        let inner = self.inner.borrow();
        T::FIELD_NAMES
            .iter()
            .map(|name| (*name).to_owned())
            .chain(inner.store.visible_names().map(str::to_owned))
            .collect()
    }

    /// All dynamic names, hidden ones included.
    pub fn dynamic_names(&self) -> Vec<String> {
        self.inner
            .borrow()
            .store
            .names()
            .map(str::to_owned)
            .collect()
    }

    /// Borrow the dynamic store.
    ///
    /// Writes to this instance fail with [`AccessError::Borrowed`] while the
    /// returned reference is alive.
    ///
    /// # Panics
    ///
    /// When called inside [`with_mut`](Self::with_mut).
    pub fn store(&self) -> Ref<'_, DynamicStore> {
        Ref::map(self.inner.borrow(), |inner| &inner.store)
    }

    /// Listen for fields added to this instance.
    pub fn subscribe_added<H: Hook<PropertyAdded>>(&self, hook: H) -> ListenerId {
        self.inner.borrow_mut().added.subscribe(hook)
    }

    /// Listen for fields removed from this instance.
    pub fn subscribe_removed<H: Hook<PropertyRemoved>>(&self, hook: H) -> ListenerId {
        self.inner.borrow_mut().removed.subscribe(hook)
    }

    /// Detach a listener. Returns `false` if `id` is unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.added.unsubscribe(id) || inner.removed.unsubscribe(id)
    }

    pub(crate) fn inner(&self) -> &RefCell<Inner<T>> {
        &self.inner
    }

    pub(crate) fn insert_field(&self, name: &FieldName, field: DynamicField) -> bool {
        self.inner.borrow_mut().store.insert(name, field)
    }

    pub(crate) fn remove_field(&self, name: &FieldName) -> Option<DynamicField> {
        self.inner.borrow_mut().store.remove(name.as_str())
    }

    pub(crate) fn notify_added(&self, name: &FieldName) {
        // Snapshot so listeners may touch this instance.
        let (listeners, instance) = {
            let inner = self.inner.borrow();
            (inner.added.clone(), inner.id)
        };
        let event = PropertyAdded {
            instance,
            name: name.clone(),
        };
        let delivery = listeners.notify(&event);
        for failure in delivery.failures {
            #[cfg(feature = "tracing")]
            tracing::warn!(%instance, %name, error = %failure, "PropertyAdded listener failed");
            #[cfg(not(feature = "tracing"))]
            let _ = failure;
        }
    }

    pub(crate) fn notify_removed(&self, name: &FieldName) {
        let (listeners, instance) = {
            let inner = self.inner.borrow();
            (inner.removed.clone(), inner.id)
        };
        let event = PropertyRemoved {
            instance,
            name: name.clone(),
        };
        let delivery = listeners.notify(&event);
        for failure in delivery.failures {
            #[cfg(feature = "tracing")]
            tracing::warn!(%instance, %name, error = %failure, "PropertyRemoved listener failed");
            #[cfg(not(feature = "tracing"))]
            let _ = failure;
        }
    }
}

impl<T: Fields + fmt::Debug> fmt::Debug for Dynamic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Dynamic")
            .field("id", &inner.id)
            .field("value", &inner.value)
            .field("dynamic", &inner.store)
            .finish()
    }
}
