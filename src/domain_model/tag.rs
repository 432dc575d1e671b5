use std::any;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Short label identifying where a log record came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self(label.into())
    }

    /// Simple name of `T`, e.g. `Widget` for `app::ui::Widget<String>`.
    pub fn of<T: ?Sized>() -> Self {
        Self(simple_name(any::type_name::<T>()))
    }

    /// Simple name of the type behind `value`.
    pub fn of_val<T: ?Sized>(value: &T) -> Self {
        Self(simple_name(any::type_name_of_val(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can stand as the origin of a log record.
///
/// The default tag is the simple name of the implementing type, so
/// `impl Nameable for Widget {}` is enough for instances of `Widget` to
/// log under `Widget`. Override `tag` to pick a different label.
pub trait Nameable {
    fn tag(&self) -> Tag {
        Tag::of_val(self)
    }
}

impl<T: Nameable + ?Sized> Nameable for &T {
    fn tag(&self) -> Tag {
        (**self).tag()
    }
}

impl Nameable for Tag {
    fn tag(&self) -> Tag {
        self.clone()
    }
}

/// A reference to the type `T` itself, for callers without an instance.
pub struct TypeOf<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> TypeOf<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for TypeOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for TypeOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeOf<T> {}

impl<T: ?Sized> fmt::Debug for TypeOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeOf<{}>", Tag::of::<T>())
    }
}

impl<T: ?Sized> Nameable for TypeOf<T> {
    fn tag(&self) -> Tag {
        Tag::of::<T>()
    }
}

// Nominal types lose their path and generic arguments. Tuples, arrays,
// slices and references keep their shape with every inner path shortened.
fn simple_name(full: &'static str) -> Cow<'static, str> {
    if !full.starts_with(['(', '[', '&', '*']) {
        let path = full.find('<').map_or(full, |generics| &full[..generics]);
        return Cow::Borrowed(path.rsplit("::").next().unwrap_or(path));
    }
    let mut out = String::with_capacity(full.len());
    let mut segment = 0;
    let mut rest = full;
    while let Some(c) = rest.chars().next() {
        if let Some(tail) = rest.strip_prefix("::") {
            out.truncate(segment);
            rest = tail;
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment = out.len();
        }
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ui {
        pub struct Widget;
        pub struct Holder<T>(pub T);
    }

    use ui::{Holder, Widget};

    impl Nameable for Widget {}
    impl<T> Nameable for Holder<T> {}

    struct Renamed;

    impl Nameable for Renamed {
        fn tag(&self) -> Tag {
            Tag::new("Custom")
        }
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("Widget"), "Widget");
        assert_eq!(simple_name("app::ui::Widget"), "Widget");
        assert_eq!(simple_name("alloc::vec::Vec<alloc::string::String>"), "Vec");
        assert_eq!(simple_name("[i32; 3]"), "[i32; 3]");
        assert_eq!(
            simple_name("(alloc::string::String, alloc::vec::Vec<u8>)"),
            "(String, Vec<u8>)"
        );
        assert_eq!(simple_name("&dyn core::any::Any"), "&dyn Any");
    }

    #[test]
    fn test_compound_types_keep_their_shape() {
        assert_eq!(Tag::of::<(String, Vec<u8>)>().as_str(), "(String, Vec<u8>)");
        assert_eq!(Tag::of::<[String; 2]>().as_str(), "[String; 2]");
        assert_eq!(Tag::of::<&[Widget]>().as_str(), "&[Widget]");
    }

    #[test]
    fn test_type_and_instance_agree() {
        let widget = Widget;
        assert_eq!(TypeOf::<Widget>::new().tag().as_str(), "Widget");
        assert_eq!(widget.tag().as_str(), "Widget");
        assert_eq!((&widget).tag(), widget.tag());
    }

    #[test]
    fn test_generic_arguments_are_dropped() {
        assert_eq!(Holder(5u8).tag().as_str(), "Holder");
        assert_eq!(Tag::of::<Holder<String>>().as_str(), "Holder");
    }

    #[test]
    fn test_tag_is_idempotent() {
        let widget = Widget;
        let caller: &dyn Nameable = &widget;
        assert_eq!(caller.tag(), caller.tag());
        assert_eq!(caller.tag().as_str(), "Widget");
    }

    #[test]
    fn test_overridden_and_explicit_tags() {
        assert_eq!(Renamed.tag().as_str(), "Custom");
        assert_eq!(Tag::new("Main").tag().to_string(), "Main");
    }
}
