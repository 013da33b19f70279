//! BEM class-string builder
//!
//! Every component names its root element with a block class, then layers
//! variant and modifier classes on top of it:
//!
//! ```text
//! chirpui-alert chirpui-alert--success chirpui-alert--dismissible my-alert
//! ^ block       ^ variant              ^ modifier                 ^ extra class
//! ```

/// Prefix applied to every generated block class
pub const CLASS_PREFIX: &str = "chirpui";

/// Build a BEM class string with the default [`CLASS_PREFIX`]
///
/// Empty arguments are skipped, so passing `""` is the same as omitting the
/// part altogether.
///
/// # Examples
///
/// ```rust
/// use chirp_ui::filters::bem;
///
/// assert_eq!(bem("alert", "", "", ""), "chirpui-alert");
/// assert_eq!(
///     bem("alert", "success", "", ""),
///     "chirpui-alert chirpui-alert--success"
/// );
/// assert_eq!(bem("card", "", "", "custom"), "chirpui-card custom");
/// ```
#[must_use]
pub fn bem(block: &str, variant: &str, modifier: &str, cls: &str) -> String {
    Bem::new(block)
        .variant(variant)
        .modifier(modifier)
        .class(cls)
        .build()
}

/// Reusable BEM class builder with a configurable prefix
///
/// # Examples
///
/// ```rust
/// use chirp_ui::filters::Bem;
///
/// let classes = Bem::with_prefix("ui", "btn")
///     .modifier("loading")
///     .class("wide")
///     .build();
/// assert_eq!(classes, "ui-btn ui-btn--loading wide");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bem<'a> {
    prefix: &'a str,
    block: &'a str,
    variant: &'a str,
    modifier: &'a str,
    class: &'a str,
}

impl<'a> Bem<'a> {
    /// Start a class string for `block` using [`CLASS_PREFIX`]
    #[must_use]
    pub const fn new(block: &'a str) -> Self {
        Self::with_prefix(CLASS_PREFIX, block)
    }

    /// Start a class string for `block` using a custom prefix
    #[must_use]
    pub const fn with_prefix(prefix: &'a str, block: &'a str) -> Self {
        Self {
            prefix,
            block,
            variant: "",
            modifier: "",
            class: "",
        }
    }

    /// Set the variant (e.g. `success`, `error`)
    #[must_use]
    pub const fn variant(mut self, variant: &'a str) -> Self {
        self.variant = variant;
        self
    }

    /// Set the modifier (e.g. `loading`, `dismissible`)
    #[must_use]
    pub const fn modifier(mut self, modifier: &'a str) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set an extra class appended verbatim
    #[must_use]
    pub const fn class(mut self, class: &'a str) -> Self {
        self.class = class;
        self
    }

    /// Produce the space-separated class string
    #[must_use]
    pub fn build(&self) -> String {
        let base = format!("{}-{}", self.prefix, self.block);
        let mut classes = base.clone();

        for suffix in [self.variant, self.modifier] {
            if !suffix.is_empty() {
                classes.push(' ');
                classes.push_str(&base);
                classes.push_str("--");
                classes.push_str(suffix);
            }
        }

        if !self.class.is_empty() {
            classes.push(' ');
            classes.push_str(self.class);
        }

        classes
    }
}

impl std::fmt::Display for Bem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}
