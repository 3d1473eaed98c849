//! Property adapters per Kotlin compile-task shape.
//!
//! Modern tasks expose their options as `compilerOptions`; older plugin
//! versions only expose `kotlinOptions`. Both are read through the same
//! property names by aliasing the legacy one.

use crate::model::{PropertyDump, PropertyMap};
use buildscope_core::toolchain::COMPILER_OPTIONS;
use buildscope_plugin::{PropertyError, PropertyHolder, PropertyValue};
use std::borrow::Cow;

pub const KOTLIN_OPTIONS: &str = "kotlinOptions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskShape {
    Modern,
    Legacy,
}

impl TaskShape {
    pub fn detect(properties: &PropertyMap) -> Self {
        if !properties.contains(COMPILER_OPTIONS) && properties.contains(KOTLIN_OPTIONS) {
            TaskShape::Legacy
        } else {
            TaskShape::Modern
        }
    }

    /// Name of the host property backing `name` for this shape.
    pub fn host_name<'n>(&self, name: &'n str) -> &'n str {
        match (self, name) {
            (TaskShape::Legacy, COMPILER_OPTIONS) => KOTLIN_OPTIONS,
            _ => name,
        }
    }
}

/// Task properties seen through a [`TaskShape`].
pub struct TaskProperties<'a> {
    shape: TaskShape,
    map: &'a PropertyMap,
}

impl<'a> TaskProperties<'a> {
    pub fn new(map: &'a PropertyMap) -> Self {
        Self {
            shape: TaskShape::detect(map),
            map,
        }
    }

    pub fn shape(&self) -> TaskShape {
        self.shape
    }
}

impl PropertyHolder for TaskProperties<'_> {
    fn has_property(&self, name: &str) -> bool {
        self.map.contains(self.shape.host_name(name))
    }

    fn property(&self, name: &str) -> Result<Option<PropertyValue<'_>>, PropertyError> {
        match self.map.get(self.shape.host_name(name)) {
            Some(dump) => read_value(name, dump),
            None => Ok(None),
        }
    }
}

impl PropertyHolder for PropertyMap {
    fn has_property(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn property(&self, name: &str) -> Result<Option<PropertyValue<'_>>, PropertyError> {
        match self.get(name) {
            Some(dump) => read_value(name, dump),
            None => Ok(None),
        }
    }
}

/// Converts a captured value. Host-side failures become read errors scoped
/// to `name`; a failure nested in a list fails the whole list.
fn read_value<'a>(
    name: &str,
    dump: &'a PropertyDump,
) -> Result<Option<PropertyValue<'a>>, PropertyError> {
    let value = match dump {
        PropertyDump::Absent => return Ok(None),
        PropertyDump::Error { error } => return Err(PropertyError::unreadable(name, error.clone())),
        PropertyDump::Unresolved { unresolved } => {
            return Err(PropertyError::unreadable(name, unresolved.clone()));
        }
        PropertyDump::Files { files } => PropertyValue::Files(files.clone()),
        PropertyDump::Text(text) => PropertyValue::Text(Cow::Borrowed(text.as_str())),
        PropertyDump::Bool(flag) => PropertyValue::Text(Cow::Owned(flag.to_string())),
        PropertyDump::Number(number) => PropertyValue::Text(Cow::Owned(number.to_string())),
        PropertyDump::List(items) => PropertyValue::List(
            items
                .iter()
                .map(|item| read_value(name, item))
                .filter_map(Result::transpose)
                .collect::<Result<_, _>>()?,
        ),
        PropertyDump::Object(map) => PropertyValue::Object(map),
    };
    Ok(Some(value))
}
