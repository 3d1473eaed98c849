use crate::error::PropertyError;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Value of a named property on a host object.
pub enum PropertyValue<'a> {
    Text(Cow<'a, str>),
    List(Vec<PropertyValue<'a>>),
    Files(Vec<PathBuf>),
    Object(&'a dyn PropertyHolder),
}

impl PropertyValue<'_> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn PropertyHolder> {
        match self {
            PropertyValue::Object(object) => Some(*object),
            _ => None,
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "text",
            PropertyValue::List(_) => "a list",
            PropertyValue::Files(_) => "a file collection",
            PropertyValue::Object(_) => "an object",
        }
    }
}

impl fmt::Display for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            PropertyValue::Files(files) => {
                let joined: Vec<_> = files.iter().map(|p| p.display().to_string()).collect();
                write!(f, "[{}]", joined.join(", "))
            }
            PropertyValue::Object(_) => f.write_str("{..}"),
        }
    }
}

impl fmt::Debug for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PropertyValue::{}({})", self.shape(), self)
    }
}

/// A host object with optionally-present named properties.
pub trait PropertyHolder {
    fn has_property(&self, name: &str) -> bool;

    /// `Ok(None)` when the property does not exist or holds no value.
    fn property(&self, name: &str) -> Result<Option<PropertyValue<'_>>, PropertyError>;
}

/// Shape-checked lookups on top of [`PropertyHolder`].
pub trait PropertyLookup {
    fn text(&self, name: &str) -> Result<Option<String>, PropertyError>;
    fn list(&self, name: &str) -> Result<Option<Vec<PropertyValue<'_>>>, PropertyError>;
    fn files(&self, name: &str) -> Result<Option<Vec<PathBuf>>, PropertyError>;
    fn object(&self, name: &str) -> Result<Option<&dyn PropertyHolder>, PropertyError>;
}

impl<T: PropertyHolder + ?Sized> PropertyLookup for T {
    fn text(&self, name: &str) -> Result<Option<String>, PropertyError> {
        match self.property(name)? {
            None => Ok(None),
            Some(PropertyValue::Text(text)) => Ok(Some(text.into_owned())),
            Some(_) => Err(PropertyError::unexpected_shape(name, "text")),
        }
    }

    fn list(&self, name: &str) -> Result<Option<Vec<PropertyValue<'_>>>, PropertyError> {
        match self.property(name)? {
            None => Ok(None),
            Some(PropertyValue::List(items)) => Ok(Some(items)),
            Some(_) => Err(PropertyError::unexpected_shape(name, "a list")),
        }
    }

    fn files(&self, name: &str) -> Result<Option<Vec<PathBuf>>, PropertyError> {
        match self.property(name)? {
            None => Ok(None),
            Some(PropertyValue::Files(files)) => Ok(Some(files)),
            Some(_) => Err(PropertyError::unexpected_shape(name, "a file collection")),
        }
    }

    fn object(&self, name: &str) -> Result<Option<&dyn PropertyHolder>, PropertyError> {
        match self.property(name)? {
            None => Ok(None),
            Some(PropertyValue::Object(object)) => Ok(Some(object)),
            Some(_) => Err(PropertyError::unexpected_shape(name, "an object")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Options;

    impl PropertyHolder for Options {
        fn has_property(&self, name: &str) -> bool {
            name == "jvmTarget"
        }

        fn property(&self, name: &str) -> Result<Option<PropertyValue<'_>>, PropertyError> {
            Ok(match name {
                "jvmTarget" => Some(PropertyValue::Text(Cow::Borrowed("JVM_17"))),
                _ => None,
            })
        }
    }

    struct Task {
        options: Options,
    }

    impl PropertyHolder for Task {
        fn has_property(&self, name: &str) -> bool {
            matches!(name, "compilerOptions" | "broken")
        }

        fn property(&self, name: &str) -> Result<Option<PropertyValue<'_>>, PropertyError> {
            match name {
                "compilerOptions" => Ok(Some(PropertyValue::Object(&self.options))),
                "broken" => Err(PropertyError::unreadable(name, "provider failed")),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn typed_lookups_follow_nested_objects() {
        let task = Task { options: Options };
        let options = task.object("compilerOptions").unwrap().unwrap();
        assert_eq!(options.text("jvmTarget").unwrap().as_deref(), Some("JVM_17"));
        assert_eq!(options.text("missing").unwrap(), None);
    }

    #[test]
    fn shape_mismatch_is_an_error_not_a_panic() {
        let task = Task { options: Options };
        let err = task.text("compilerOptions").unwrap_err();
        assert_eq!(
            err,
            PropertyError::unexpected_shape("compilerOptions", "text")
        );
        assert!(matches!(
            task.list("broken"),
            Err(PropertyError::Unreadable { .. })
        ));
    }

    #[test]
    fn display_renders_string_forms() {
        let value = PropertyValue::List(vec![
            PropertyValue::Text(Cow::Borrowed("-Xcontext-receivers")),
            PropertyValue::Files(vec![PathBuf::from("/a.jar")]),
        ]);
        assert_eq!(value.to_string(), "[-Xcontext-receivers, [/a.jar]]");
    }
}
