// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative property mapping from decoded values onto typed objects.
//!
//! Each target type owns a static [`PropertyTable`]: an ordered list of
//! (property name, wire key, converter) entries built once and shared
//! read-only by every fill. Filling never stops at a bad field; conversion
//! failures are recorded on the target through [`MessageObject::add_error`].

pub mod convert;

use std::borrow::Cow;

use fah_pyon::{Value, ValueMap};

use crate::{ConversionError, TypeMappingError};

/// A target that collects per-field conversion errors.
pub trait MessageObject {
    fn errors(&self) -> &[ConversionError];
    fn add_error(&mut self, error: ConversionError);
}

/// A [`MessageObject`] with a static property table.
pub trait Mapped: MessageObject + Default + Sized + 'static {
    fn property_table() -> &'static PropertyTable<Self>;

    /// Reshape the decoded tree before mapping. Identity by default.
    fn prepare(tree: &Value) -> Cow<'_, Value> {
        Cow::Borrowed(tree)
    }
}

/// Implement [`MessageObject`] for a struct with an `errors` field.
#[macro_export]
macro_rules! message_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::MessageObject for $ty {
                fn errors(&self) -> &[$crate::ConversionError] {
                    &self.errors
                }

                fn add_error(&mut self, error: $crate::ConversionError) {
                    self.errors.push(error);
                }
            }
        )+
    };
}

type Apply<T> =
    Box<dyn Fn(&mut T, &Value, &mut Vec<ConversionError>) -> Result<(), String> + Send + Sync>;

/// One declared property: where it lives on the wire and how it converts.
pub struct PropertyMapping<T> {
    name: &'static str,
    wire_key: &'static str,
    apply: Apply<T>,
}

impl<T> PropertyMapping<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }
}

impl<T> std::fmt::Debug for PropertyMapping<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyMapping")
            .field("name", &self.name)
            .field("wire_key", &self.wire_key)
            .finish_non_exhaustive()
    }
}

/// Ordered mapping table for one target type.
#[derive(Debug)]
pub struct PropertyTable<T> {
    mappings: Vec<PropertyMapping<T>>,
}

impl<T: 'static> PropertyTable<T> {
    pub fn builder() -> PropertyTableBuilder<T> {
        PropertyTableBuilder { mappings: Vec::new() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyMapping<T>> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Mappings that read `wire_key`, in declaration order.
    pub fn for_wire_key<'a>(
        &'a self,
        wire_key: &'a str,
    ) -> impl Iterator<Item = &'a PropertyMapping<T>> + 'a {
        self.mappings.iter().filter(move |m| m.wire_key == wire_key)
    }
}

/// Builds a [`PropertyTable`]. Several properties may read the same wire key.
pub struct PropertyTableBuilder<T> {
    mappings: Vec<PropertyMapping<T>>,
}

impl<T: 'static> PropertyTableBuilder<T> {
    /// Convert the raw value and assign it to a field.
    pub fn field<V: 'static>(
        mut self,
        name: &'static str,
        wire_key: &'static str,
        convert: fn(&Value) -> Result<V, String>,
        assign: fn(&mut T, V),
    ) -> Self {
        self.mappings.push(PropertyMapping {
            name,
            wire_key,
            apply: Box::new(move |target, value, _| {
                assign(target, convert(value)?);
                Ok(())
            }),
        });
        self
    }

    /// Fill a sub-object from a nested map.
    ///
    /// The sub-object's own conversion errors are also lifted into the
    /// parent under `<name>.<property>`.
    pub fn nested<S: Mapped>(
        mut self,
        name: &'static str,
        wire_key: &'static str,
        assign: fn(&mut T, S),
    ) -> Self {
        self.mappings.push(PropertyMapping {
            name,
            wire_key,
            apply: Box::new(move |target, value, lifted| {
                let prepared = S::prepare(value);
                let Some(map) = prepared.as_map() else {
                    return Err(format!("expected map, found {}", prepared.kind()));
                };
                let mut sub = S::default();
                fill_map(&mut sub, map);
                lifted.extend(sub.errors().iter().map(|e| e.qualified(name)));
                assign(target, sub);
                Ok(())
            }),
        });
        self
    }

    /// Re-apply every mapping of `S` to the `S` embedded in `T`.
    ///
    /// Lets a caller-defined type extend a stock model with extra
    /// properties; conversion errors land on the outer object.
    pub fn embed<S: Mapped>(mut self, project: fn(&mut T) -> &mut S) -> Self {
        for inner in S::property_table().iter() {
            self.mappings.push(PropertyMapping {
                name: inner.name,
                wire_key: inner.wire_key,
                apply: Box::new(move |target, value, lifted| {
                    (inner.apply)(project(target), value, lifted)
                }),
            });
        }
        self
    }

    pub fn build(self) -> PropertyTable<T> {
        PropertyTable { mappings: self.mappings }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Populate `target` from a decoded map value.
///
/// Fails only when the (prepared) tree is not a map; every field-level
/// problem is recorded on the target instead.
pub fn fill<T: Mapped>(mut target: T, tree: &Value) -> Result<T, TypeMappingError> {
    let prepared = T::prepare(tree);
    let Some(map) = prepared.as_map() else {
        return Err(TypeMappingError::Shape {
            target: short_type_name::<T>(),
            expected: "map",
            found: prepared.kind(),
        });
    };
    fill_map(&mut target, map);
    Ok(target)
}

/// Build one fresh `T` per element of a decoded list, in wire order.
///
/// Any element that is not a map fails the whole call.
pub fn fill_list<T: Mapped>(tree: &Value) -> Result<Vec<T>, TypeMappingError> {
    let Some(items) = tree.as_list() else {
        return Err(TypeMappingError::Shape {
            target: short_type_name::<T>(),
            expected: "list",
            found: tree.kind(),
        });
    };

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let prepared = T::prepare(item);
        let Some(map) = prepared.as_map() else {
            return Err(TypeMappingError::Element {
                target: short_type_name::<T>(),
                index,
                found: prepared.kind(),
            });
        };
        let mut element = T::default();
        fill_map(&mut element, map);
        out.push(element);
    }
    Ok(out)
}

fn fill_map<T: Mapped>(target: &mut T, map: &ValueMap) {
    let mut lifted = Vec::new();
    for mapping in T::property_table().iter() {
        let Some(value) = map.get(mapping.wire_key).filter(|v| !v.is_null()) else {
            continue;
        };
        if let Err(reason) = (mapping.apply)(target, value, &mut lifted) {
            tracing::debug!(property = mapping.name, %reason, "field conversion failed");
            target.add_error(ConversionError::new(mapping.name, reason));
        }
        for error in lifted.drain(..) {
            target.add_error(error);
        }
    }
}

#[cfg(test)]
#[path = "../mapping_tests.rs"]
mod tests;
